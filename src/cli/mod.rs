//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - gen: Generate a council report (PDF or DOCX)
//! - config init: Initialize configuration file
//! - show turns: List the turns of a transcript

pub mod config;
pub mod gen;
pub mod show;
