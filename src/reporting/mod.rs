pub mod formatter;

pub use formatter::{format_asset_sections, format_batch_markdown, format_severity_table};
