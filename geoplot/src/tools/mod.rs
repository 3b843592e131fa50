pub mod csv;
pub mod json;
pub mod render;

use anyhow::{Context, Result};
use std::path::Path;

fn write_output(path: &Path, html: &str) -> Result<()> {
	std::fs::write(path, html).with_context(|| format!("Failed to write {path:?}"))
}
