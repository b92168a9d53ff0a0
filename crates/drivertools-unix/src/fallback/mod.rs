//! Platform fallback selection.
//!
//! The fallback is picked once, when the toolchain is built, from the host
//! the crate was compiled for. Only macOS has one.

mod xcrun;

pub use xcrun::XcrunFallback;

use drivertools_core::{Environment, PlatformFallback};

/// The platform fallback for the host this crate was built for.
#[cfg(target_os = "macos")]
pub fn default_fallback(env: &Environment) -> Option<Box<dyn PlatformFallback>> {
    Some(Box::new(XcrunFallback::new(env)))
}

#[cfg(not(target_os = "macos"))]
pub fn default_fallback(_env: &Environment) -> Option<Box<dyn PlatformFallback>> {
    None
}
