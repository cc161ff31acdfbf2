mod unix_terminator;

pub use unix_terminator::UnixTerminator;

pub struct UnixTerminatorFactory;

#[cfg(unix)]
impl procterm_core::TerminatorFactory for UnixTerminatorFactory {
    type Terminator = UnixTerminator;

    fn create_terminator() -> UnixTerminator {
        UnixTerminator::new()
    }

    fn platform_name() -> &'static str {
        "Unix"
    }
}
