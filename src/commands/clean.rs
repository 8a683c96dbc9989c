//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Jammlog;

/// Delete the generated static pages
pub fn run(app: &Jammlog) -> Result<()> {
    if app.public_dir.exists() {
        fs::remove_dir_all(&app.public_dir)?;
        tracing::info!("Deleted: {:?}", app.public_dir);
    }

    Ok(())
}
