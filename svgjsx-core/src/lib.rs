//! Core utilities and types for the svgjsx converter.
//!
//! This crate owns the two pieces of the conversion that have real logic
//! outside of code generation:
//!
//! - [`format_file_name`] turns a source file name into a PascalCase
//!   component name plus a target extension.
//! - [`resolve_distinct_path`] queries a [`FileStore`] until it finds a
//!   location that does not collide with an existing file.
//!
//! Nothing here touches a terminal or installs a logger; callers decide how
//! to surface [`NameWarning`]s and errors.

mod error;
mod extension;
mod naming;
mod resolve;
mod store;
mod utils;

pub use error::{Error, Result};
pub use extension::Extension;
pub use naming::{
    ComponentName, FormattedName, InvalidComponentName, MAX_NAME_LENGTH, NameWarning,
    TRUNCATED_LENGTH, format_file_name,
};
pub use resolve::{MAX_SUFFIX, resolve_distinct_path};
pub use store::{FileStore, FsStore, MemoryStore};
// String utilities
pub use utils::{capitalize, to_camel_case};
