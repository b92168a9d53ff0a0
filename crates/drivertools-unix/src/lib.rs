//! Generic Unix toolchain for drivertools.
//!
//! Resolves tool executables for a compiler driver running on a Unix-like
//! host, and supplies the Unix naming conventions for linker outputs and
//! sanitizer runtimes.
//!
//! ## Architecture
//!
//! - `search_path`: turns a `PATH` value into an ordered list of directories
//! - `lookup`: probes a list of directories for one executable
//! - `toolchain`: [`GenericUnixToolchain`] and its builder
//! - `fallback`: the platform fallback chosen for the host (`xcrun` on macOS)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use drivertools_core::{Environment, Tool, Toolchain};
//! use drivertools_unix::GenericUnixToolchain;
//!
//! let toolchain = GenericUnixToolchain::new(Environment::from_process());
//! let ar = toolchain.tool_path(Tool::StaticLinker).unwrap();
//! println!("archiver: {}", ar.display());
//! ```

#![deny(unused_crate_dependencies)]

pub mod fallback;
pub mod lookup;
pub mod search_path;
pub mod toolchain;

#[cfg(test)]
mod test_utils;

pub use fallback::{XcrunFallback, default_fallback};
pub use lookup::{LookupOutcome, lookup_executable_path};
pub use search_path::env_search_paths;
pub use toolchain::{GenericUnixToolchain, GenericUnixToolchainBuilder};
