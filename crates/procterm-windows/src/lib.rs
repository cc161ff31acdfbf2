//! Windows-specific process termination implementation

mod windows_terminator;

pub use windows_terminator::WindowsTerminator;

/// Windows-specific terminator factory
pub struct WindowsTerminatorFactory;

#[cfg(windows)]
impl procterm_core::TerminatorFactory for WindowsTerminatorFactory {
    type Terminator = WindowsTerminator;

    fn create_terminator() -> WindowsTerminator {
        WindowsTerminator::new()
    }

    fn platform_name() -> &'static str {
        "Windows"
    }
}
