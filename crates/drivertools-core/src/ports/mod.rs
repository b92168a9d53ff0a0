//! Port definitions (trait abstractions) for toolchain resolution.
//!
//! Ports define the interfaces a driver codes against and the capabilities
//! a resolver has injected into it. Implementations live in adapter crates
//! (e.g. `drivertools-unix`), except for the trivial `SystemFs`.
//!
//! # Design Rules
//!
//! - Every port is `Send + Sync`; resolvers are shared across threads
//! - No caching behind a port; each call reflects the filesystem as it is now

pub mod fallback;
pub mod fs;
pub mod toolchain;

pub use fallback::PlatformFallback;
pub use fs::{FsProvider, SystemFs};
pub use toolchain::{Toolchain, override_env_var};
