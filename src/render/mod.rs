// Output adapters for the CLI. Each one implements the FrameRenderer port.

pub mod csv_rows;
pub mod json_lines;
pub mod text;

pub use csv_rows::CsvRenderer;
pub use json_lines::JsonRenderer;
pub use text::TextRenderer;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
