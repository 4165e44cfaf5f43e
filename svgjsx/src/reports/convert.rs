//! Convert command report data structures.

use std::path::PathBuf;

use svgjsx_core::Extension;

use super::output::{Output, Report};

/// Report data from converting one file.
#[derive(Debug)]
pub struct ConvertReport {
    pub source: PathBuf,
    /// Where the component was (or, in a dry run, would be) written.
    pub target: PathBuf,
    pub component: String,
    pub extension: Extension,
    /// Non-fatal problems, e.g. a truncated file name.
    pub warnings: Vec<String>,
    /// The generated module.
    pub content: String,
    /// Whether `content` was written to `target`.
    pub written: bool,
    pub source_deleted: bool,
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        let target = self.target.display().to_string();
        if !self.written {
            out.divider(&format!("{} (dry run)", target));
            out.preformatted(&self.content);
            return;
        }

        out.added_item(&target);
        if self.source_deleted {
            out.removed_item(&self.source.display().to_string());
        }
        out.key_value("component", &format!("{} ({})", self.component, self.extension));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report() -> ConvertReport {
        ConvertReport {
            source: PathBuf::from("icons/star.svg"),
            target: PathBuf::from("icons/Star.tsx"),
            component: "Star".to_string(),
            extension: Extension::Tsx,
            warnings: Vec::new(),
            content: "export default Star;\n".to_string(),
            written: true,
            source_deleted: false,
        }
    }

    #[test]
    fn test_written_report() {
        let mut out = RecordingOutput::default();
        report().render(&mut out);

        assert_eq!(out.lines, vec!["+ icons/Star.tsx", "component: Star (.tsx)"]);
    }

    #[test]
    fn test_deleted_source_is_listed() {
        let mut out = RecordingOutput::default();
        ConvertReport {
            source_deleted: true,
            ..report()
        }
        .render(&mut out);

        assert_eq!(out.lines[1], "- icons/star.svg");
    }

    #[test]
    fn test_dry_run_prints_content_and_warnings() {
        let mut out = RecordingOutput::default();
        ConvertReport {
            written: false,
            warnings: vec!["name too long".to_string()],
            ..report()
        }
        .render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: name too long",
                "-- icons/Star.tsx (dry run) --",
                "export default Star;\n",
            ]
        );
    }
}
