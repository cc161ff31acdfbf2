use procterm_core::{ProcessTerminator, TerminatorFactory};
use tracing::debug;

/// Platform-specific terminator implementations
pub enum PlatformTerminator {
    #[cfg(unix)]
    Unix(procterm_unix::UnixTerminator),
    #[cfg(windows)]
    Windows(procterm_windows::WindowsTerminator),
}

impl PlatformTerminator {
    pub fn new() -> Self {
        #[cfg(unix)]
        {
            debug!("Creating Unix terminator");
            Self::Unix(procterm_unix::UnixTerminatorFactory::create_terminator())
        }

        #[cfg(windows)]
        {
            debug!("Creating Windows terminator");
            Self::Windows(procterm_windows::WindowsTerminatorFactory::create_terminator())
        }

        #[cfg(not(any(unix, windows)))]
        {
            compile_error!("Unsupported platform: only Unix and Windows are currently supported");
        }
    }
}

impl Default for PlatformTerminator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTerminator for PlatformTerminator {
    fn terminate(&self) -> ! {
        match self {
            #[cfg(unix)]
            Self::Unix(terminator) => terminator.terminate(),
            #[cfg(windows)]
            Self::Windows(terminator) => terminator.terminate(),
        }
    }
}

/// Platform-agnostic factory that selects the appropriate implementation at compile time
pub struct PlatformTerminatorFactory;

impl TerminatorFactory for PlatformTerminatorFactory {
    type Terminator = PlatformTerminator;

    fn create_terminator() -> PlatformTerminator {
        PlatformTerminator::new()
    }

    fn platform_name() -> &'static str {
        #[cfg(unix)]
        {
            <procterm_unix::UnixTerminatorFactory as TerminatorFactory>::platform_name()
        }

        #[cfg(windows)]
        {
            <procterm_windows::WindowsTerminatorFactory as TerminatorFactory>::platform_name()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detection() {
        let platform = PlatformTerminatorFactory::platform_name();
        println!("Running on platform: {platform}");

        // Ensure we can create the platform-specific terminator without
        // touching the process
        let _terminator = PlatformTerminatorFactory::create_terminator();
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_backend_selected() {
        assert_eq!(PlatformTerminatorFactory::platform_name(), "Unix");
        assert!(matches!(
            PlatformTerminator::new(),
            PlatformTerminator::Unix(_)
        ));
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_backend_selected() {
        assert_eq!(PlatformTerminatorFactory::platform_name(), "Windows");
        assert!(matches!(
            PlatformTerminator::new(),
            PlatformTerminator::Windows(_)
        ));
    }
}
