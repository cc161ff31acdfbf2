/// Exit status reported to the parent process when the terminator runs.
///
/// Fixed at the conventional success value; there is no way to end with
/// anything else through this crate.
pub const EXIT_SUCCESS: i32 = 0;

/// Capability to end the current process.
///
/// Calling code should depend on this trait rather than on a concrete
/// backend, so the backend can be swapped at build time or injected.
pub trait ProcessTerminator: Send + Sync {
    /// End the current process, reporting [`EXIT_SUCCESS`] to the parent.
    ///
    /// Never returns. All threads end with the caller; code after the call
    /// point is unreachable.
    fn terminate(&self) -> !;
}

/// Factory trait for creating platform-specific terminators
pub trait TerminatorFactory {
    /// The type of terminator this factory creates
    type Terminator: ProcessTerminator;

    /// Create a terminator for the current platform
    fn create_terminator() -> Self::Terminator;

    /// Get the platform name for logging and debugging
    fn platform_name() -> &'static str;
}

/// Implementation of ProcessTerminator for boxed trait objects to enable
/// passing the capability through dependency injection
impl ProcessTerminator for Box<dyn ProcessTerminator> {
    fn terminate(&self) -> ! {
        (**self).terminate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double that diverges by panicking instead of ending the process.
    struct PanicTerminator;

    impl ProcessTerminator for PanicTerminator {
        fn terminate(&self) -> ! {
            panic!("terminate invoked")
        }
    }

    #[test]
    fn test_success_status_is_zero() {
        assert_eq!(EXIT_SUCCESS, 0);
    }

    #[test]
    fn test_terminate_never_returns_control() {
        let result = std::panic::catch_unwind(|| PanicTerminator.terminate());
        assert!(result.is_err());
    }

    #[test]
    fn test_capability_is_injectable_as_trait_object() {
        let boxed: Box<dyn ProcessTerminator> = Box::new(PanicTerminator);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| boxed.terminate()));
        assert!(result.is_err());
    }
}
