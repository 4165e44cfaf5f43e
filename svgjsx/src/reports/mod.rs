//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod convert;
mod init;
mod output;

pub use convert::ConvertReport;
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
