//! Core domain types.
//!
//! These types describe a toolchain in the abstract, independent of where
//! its binaries live on disk.
//!
//! # Structure
//!
//! - `tool` - logical tool roles and their executable names
//! - `link` - kinds of linker output
//! - `sanitizer` - runtime sanitizer variants
//! - `triple` - compilation target identifiers

mod link;
mod sanitizer;
mod tool;
mod triple;

pub use link::LinkOutputType;
pub use sanitizer::{Sanitizer, UnknownSanitizer};
pub use tool::Tool;
pub use triple::Triple;
