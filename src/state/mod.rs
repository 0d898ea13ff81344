//! Generation state
//!
//! Tracks whether a report is currently being generated. At most one
//! generation runs at a time; the guard returned by `acquire` puts the gate
//! back to idle when dropped, on success and failure alike.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use crate::error::{ReportError, Result};

/// Observable state of the generation trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Generating,
}

/// Two-state gate guarding report generation
#[derive(Debug, Default)]
pub struct GenerationGate {
    busy: AtomicBool,
}

/// Held for the duration of one generation
#[derive(Debug)]
pub struct GenerationGuard<'a> {
    gate: &'a GenerationGate,
}

impl GenerationGate {
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> GenerationState {
        if self.busy.load(Ordering::Acquire) {
            GenerationState::Generating
        } else {
            GenerationState::Idle
        }
    }

    /// Move from idle to generating.
    ///
    /// Fails with `GenerationInProgress` while another guard is alive.
    pub fn acquire(&self) -> Result<GenerationGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ReportError::GenerationInProgress)?;
        debug!("generation gate acquired");
        Ok(GenerationGuard { gate: self })
    }
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
        debug!("generation gate released");
    }
}
