#[cfg(windows)]
mod windows_impl {
    use procterm_core::{EXIT_SUCCESS, ProcessTerminator};
    use tracing::debug;
    use windows::Win32::System::Threading::ExitProcess;

    /// Windows-specific terminator implementation
    ///
    /// Calls `ExitProcess` directly. Per-DLL shutdown routines outside the
    /// calling image are not guaranteed to run, so `atexit` callbacks and
    /// C stdio flushing may be skipped.
    pub struct WindowsTerminator;

    impl WindowsTerminator {
        pub fn new() -> Self {
            debug!("Initializing Windows terminator");
            Self
        }
    }

    impl Default for WindowsTerminator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ProcessTerminator for WindowsTerminator {
        fn terminate(&self) -> ! {
            // ExitProcess takes the status the parent will observe and does
            // not return.
            unsafe { ExitProcess(EXIT_SUCCESS as u32) }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_terminator_construction_has_no_side_effect() {
            let _terminator = WindowsTerminator::new();
        }
    }
}

// Re-export the Windows implementation when on Windows systems
#[cfg(windows)]
pub use windows_impl::WindowsTerminator;

// Provide stub implementations for non-Windows systems
#[cfg(not(windows))]
pub struct WindowsTerminator;

#[cfg(not(windows))]
impl WindowsTerminator {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
impl Default for WindowsTerminator {
    fn default() -> Self {
        Self::new()
    }
}
