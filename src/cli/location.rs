//! Where command - print the resolved store path.

use crate::cli::{output, Settings};
use crate::core::locator;
use crate::error::Result;

/// Print the store path this invocation would use.
pub fn execute(settings: &Settings) -> Result<()> {
    let location = locator::locate(settings.store_file.as_deref());
    println!("{}", location.path.display());
    output::dimmed(&format!(
        "({}{})",
        location.source,
        if location.path.exists() { "" } else { ", not created yet" }
    ));
    Ok(())
}
