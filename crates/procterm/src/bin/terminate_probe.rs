//! Child-process probe used by the integration tests.
//!
//! Each mode performs some observable setup and then calls
//! [`procterm::terminate`]. The parent test asserts on the exit status and
//! captured output.

use anyhow::{Result, bail};
use procterm::terminate;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "plain".to_string());
    match mode.as_str() {
        // Terminate with nothing else observable.
        "plain" => terminate(),

        // Write a line to stdout first; the parent expects to see it.
        "stdout" => {
            println!("probe-output");
            terminate()
        }

        // Register a C exit callback, then terminate. On the POSIX backend
        // the callback runs and its marker reaches the parent; ExitProcess
        // gives no such guarantee, so the matching test is Unix-only.
        "atexit" => {
            #[cfg(unix)]
            {
                extern "C" fn on_exit() {
                    // write(2) goes straight to the fd, nothing buffers it
                    let msg = b"atexit-ran\n";
                    unsafe { libc::write(libc::STDOUT_FILENO, msg.as_ptr().cast(), msg.len()) };
                }
                unsafe { libc::atexit(on_exit) };
            }
            terminate()
        }

        other => bail!("unknown probe mode: {other}"),
    }
}
