//! Core types and ports for locating a compiler driver's toolchain.
//!
//! This crate holds everything a driver needs to *talk about* its tools
//! without touching the filesystem or spawning processes:
//!
//! - [`domain`] - tool roles, link output kinds, sanitizers, target triples
//! - [`env`] - the immutable [`Environment`] snapshot a toolchain is built from
//! - [`ports`] - the [`Toolchain`], [`PlatformFallback`] and [`FsProvider`] seams
//! - [`error`] - the single [`ToolchainError`] returned by lookups
//!
//! Concrete resolvers live in sibling crates (`drivertools-unix`).

#![deny(unused_crate_dependencies)]

pub mod attempt;
pub mod domain;
pub mod env;
pub mod error;
pub mod ports;

pub use attempt::{Attempt, AttemptOutcome};
pub use domain::{LinkOutputType, Sanitizer, Tool, Triple, UnknownSanitizer};
pub use env::Environment;
pub use error::{ToolchainError, ToolchainResult};
pub use ports::{FsProvider, PlatformFallback, SystemFs, Toolchain, override_env_var};
