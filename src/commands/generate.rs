//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Jammlog;

/// Generate the static site from the post file
pub fn run(app: &Jammlog) -> Result<()> {
    let start = std::time::Instant::now();

    let store = app.open_store()?;
    let generator = Generator::new(app)?;
    let pages = generator.generate(&store)?;

    tracing::info!(
        "Generated {} pages for {} posts in {:?}",
        pages,
        store.count()?,
        start.elapsed()
    );

    Ok(())
}
