use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use svgjsx_config::{Config, SvgjsxToml};
use svgjsx_convert::SvgToJsx;
use svgjsx_core::{Extension, FsStore};

use super::{UnwrapOrExit, exit_on_diagnostic};
use crate::{
    ops::{self, ConvertRequest},
    prompt,
    reports::{Report, TerminalOutput},
};

const NON_SVG_PROMPT: &str = "Not an .svg file. Convert anyway?";

#[derive(Args)]
pub struct ConvertCommand {
    /// SVG file to convert
    pub file: PathBuf,

    /// Directory for the component (defaults to the SVG's directory)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Print the component instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Delete the SVG after the component is written
    #[arg(long, conflicts_with = "keep_source")]
    pub delete_source: bool,

    /// Keep the SVG even if svgjsx.toml enables delete_source
    #[arg(long)]
    pub keep_source: bool,

    /// Convert files without an .svg extension without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Path to svgjsx.toml (defaults to ./svgjsx.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConvertCommand {
    pub fn run(&self, extension: Extension) -> Result<()> {
        let config = self.load_config().unwrap_or_exit();

        if !is_svg(&self.file) && !prompt::confirm(NON_SVG_PROMPT, self.yes)? {
            eprintln!("Skipped {}", self.file.display());
            return Ok(());
        }

        let request = ConvertRequest {
            source: &self.file,
            extension,
            out_dir: self.out_dir.as_deref(),
            dry_run: self.dry_run,
            delete_source: self.delete_source(&config),
            import_react: config.template.import_react,
            indent: config.template.indent(),
        };

        let report = exit_on_diagnostic(ops::convert(&request, &FsStore, &SvgToJsx::new()))?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn load_config(&self) -> svgjsx_config::Result<Config> {
        match &self.config {
            Some(path) => SvgjsxToml::open(path).map(SvgjsxToml::into_config),
            None => Ok(SvgjsxToml::discover(".")?
                .map(SvgjsxToml::into_config)
                .unwrap_or_default()),
        }
    }

    /// Command-line flags override the config file.
    fn delete_source(&self, config: &Config) -> bool {
        if self.delete_source {
            true
        } else if self.keep_source {
            false
        } else {
            config.convert.delete_source
        }
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}
