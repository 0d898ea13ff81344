use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory where report files are written
    pub output_dir: PathBuf,

    /// Page geometry for paginated output
    pub layout: Layout,

    /// Fixed text printed on every report
    pub branding: Branding,
}

/// Page geometry, in millimetres unless noted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub page_width_mm: f64,

    pub page_height_mm: f64,

    /// Top, bottom, left and right margin
    pub margin_mm: f64,

    /// Space kept clear above the bottom margin for the page footer
    pub footer_buffer_mm: f64,

    /// Line height as a multiple of the font size
    pub line_height_factor: f64,

    /// Longest councillor response printed in paginated output, in characters
    pub max_response_chars: usize,
}

/// Report titles and taglines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub title: String,

    pub subtitle: String,

    /// Prefix of the "Page i of N" footer
    pub footer_label: String,

    /// Closing line of flow documents
    pub tagline: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./reports"),
            layout: Layout::default(),
            branding: Branding::default(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 20.0,
            footer_buffer_mm: 12.0,
            line_height_factor: 1.4,
            max_response_chars: 2000,
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: "DLM LLM COUNCIL".to_string(),
            subtitle: "Official Council Report".to_string(),
            footer_label: "DLM LLM Council Report".to_string(),
            tagline: "DLM LLM Council - Where the Greatest Minds of Artificial Intelligence Convene"
                .to_string(),
        }
    }
}

impl Layout {
    /// Lowest baseline-plus-line-height allowed before a page break
    pub fn content_bottom(&self) -> f64 {
        self.page_height_mm - self.margin_mm - self.footer_buffer_mm
    }

    /// Width available between the side margins
    pub fn content_width(&self) -> f64 {
        self.page_width_mm - self.margin_mm * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("./reports"));
        assert_eq!(config.layout.page_width_mm, 210.0);
        assert_eq!(config.layout.max_response_chars, 2000);
        assert_eq!(config.branding.title, "DLM LLM COUNCIL");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.layout.margin_mm, 20.0);
        assert_eq!(parsed.branding.subtitle, "Official Council Report");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[layout]\nmargin_mm = 25.0\n").unwrap();
        assert_eq!(parsed.layout.margin_mm, 25.0);
        assert_eq!(parsed.layout.footer_buffer_mm, 12.0);
        assert_eq!(parsed.output_dir, PathBuf::from("./reports"));
    }

    #[test]
    fn test_layout_derived_measures() {
        let layout = Layout::default();
        assert_eq!(layout.content_bottom(), 265.0);
        assert_eq!(layout.content_width(), 170.0);
    }
}
