//! TypeScript/JSX syntax builders.
//!
//! Each builder implements [`Renderable`](crate::Renderable) and is
//! assembled into a module by [`CodeFile`](crate::CodeFile).

mod component;
mod exports;
mod imports;
mod types;

pub use component::ArrowComponent;
pub use exports::Export;
pub use imports::Import;
pub use types::{Field, ObjectType};
