#[cfg(unix)]
mod unix_impl {
    use procterm_core::{EXIT_SUCCESS, ProcessTerminator};
    use tracing::debug;

    /// Unix-specific terminator implementation
    ///
    /// Goes through libc `exit(3)`: registered `atexit` callbacks run and
    /// open C stdio streams are flushed before the kernel reaps the process.
    pub struct UnixTerminator;

    impl UnixTerminator {
        pub fn new() -> Self {
            debug!("Initializing Unix terminator");
            Self
        }
    }

    impl Default for UnixTerminator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ProcessTerminator for UnixTerminator {
        fn terminate(&self) -> ! {
            // exit(3) cannot fail and does not return.
            unsafe { libc::exit(EXIT_SUCCESS) }
        }
    }

}

// Re-export the Unix implementation when on Unix systems
#[cfg(unix)]
pub use unix_impl::UnixTerminator;

// Provide stub implementations for non-Unix systems
#[cfg(not(unix))]
pub struct UnixTerminator;

#[cfg(not(unix))]
impl UnixTerminator {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(unix))]
impl Default for UnixTerminator {
    fn default() -> Self {
        Self::new()
    }
}
