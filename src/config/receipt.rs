//! Receipt configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::adapters::receipt::ReceiptLayout;

/// Receipt document configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptConfig {
    /// Directory receipts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_institution")]
    pub institution: String,

    #[serde(default = "default_organizer")]
    pub organizer: String,

    #[serde(default = "default_event_title")]
    pub event_title: String,
}

impl ReceiptConfig {
    /// Layout for [`MarkdownReceiptRenderer`](crate::adapters::receipt::MarkdownReceiptRenderer)
    pub fn layout(&self, test_mode: bool) -> ReceiptLayout {
        ReceiptLayout {
            output_dir: self.output_dir.clone(),
            institution: self.institution.clone(),
            organizer: self.organizer.clone(),
            event_title: self.event_title.clone(),
            test_mode,
        }
    }
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            institution: default_institution(),
            organizer: default_organizer(),
            event_title: default_event_title(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./data/receipts")
}

fn default_institution() -> String {
    "BHARAT COLLEGE OF ENGINEERING".to_string()
}

fn default_organizer() -> String {
    "Student Council".to_string()
}

fn default_event_title() -> String {
    "Sports Event Registration Receipt".to_string()
}
