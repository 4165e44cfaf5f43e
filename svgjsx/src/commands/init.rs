use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use svgjsx_config::{CONFIG_FILE_NAME, SvgjsxToml};

use super::UnwrapOrExit;
use crate::reports::{InitReport, Report, TerminalOutput};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write svgjsx.toml into
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing svgjsx.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE_NAME);
        let existed = path.exists();
        let file = SvgjsxToml::create(&path, self.force).unwrap_or_exit();

        InitReport {
            path: file.path().to_path_buf(),
            overwritten: existed,
        }
        .render(&mut TerminalOutput::new());
        Ok(())
    }
}
