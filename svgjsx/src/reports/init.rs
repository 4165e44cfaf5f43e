//! Init command report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from writing a default config.
#[derive(Debug)]
pub struct InitReport {
    pub path: PathBuf,
    /// An existing file was replaced (`--force`).
    pub overwritten: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        if self.overwritten {
            out.warning(&format!("overwrote existing {}", path));
        }
        out.added_item(&path);
    }
}
