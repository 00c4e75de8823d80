//! JSON export for overview statistics.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::overview::PlayerOverview;

/// Writes the overview to a pretty-printed JSON file.
pub fn export_to_json(overview: &PlayerOverview, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(overview)
        .context("Failed to serialize overview to JSON")?;

    let mut file = File::create(output_path).context(format!(
        "Failed to create JSON file: {}",
        output_path.display()
    ))?;

    file.write_all(json.as_bytes())
        .context("Failed to write JSON data")?;

    Ok(())
}
