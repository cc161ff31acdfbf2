//! Procterm - end the current process behind a single callable entry point
//!
//! One operation, [`terminate`], dispatched at build time to a Windows-family
//! or a POSIX-family backend. The POSIX backend goes through libc `exit(3)`
//! and so runs registered `atexit` callbacks and flushes C stdio; the Windows
//! backend calls `ExitProcess` directly and gives no such guarantee. Rust-level
//! buffered writers are not C stdio and are the caller's responsibility on
//! both backends.

mod platform_factory;

pub use platform_factory::{PlatformTerminator, PlatformTerminatorFactory};

/// Immediately end the current process with a successful exit status.
///
/// Never returns; code after the call point is unreachable. All threads end
/// with the caller.
pub fn terminate() -> ! {
    PlatformTerminatorFactory::create_terminator().terminate()
}

// Re-export core functionality
pub use procterm_core::*;
