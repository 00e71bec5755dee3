//! Progress reporting helpers.
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Error;

/// Bounded progress bar, or a hidden one when `enabled` is false.
pub fn bar(len: u64, enabled: bool) -> Result<ProgressBar, Error> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}
