//! Export Configuration
//!
//! Static settings for the PDF export. There is no environment configuration;
//! the defaults reproduce the Flynn schedule sheet.

use serde::{Deserialize, Serialize};

/// A4 portrait, millimetres
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Download name is `<file_prefix><date>.pdf`
    pub file_prefix: String,
    /// Used in place of the date when the date field is blank
    pub default_stem: String,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// PDF document title
    pub title: String,
    /// Logo drawn above the groups; skipped if it fails to load
    pub logo_url: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: "Flynn_Schedule_".to_string(),
            default_stem: "Schedule".to_string(),
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            title: "Flynn Schedule".to_string(),
            logo_url: "/logo.png".to_string(),
        }
    }
}
