use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::error::ShellError;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Keeps SIGINT from killing the shell. While the line editor owns the
/// terminal, Ctrl-C arrives as a key instead; this handler only fires when
/// an external command is running, and the child receives the signal too.
pub fn install_interrupt_handler() -> Result<(), ShellError> {
    ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
    })?;
    Ok(())
}

/// Returns whether an interrupt arrived since the last call, clearing it.
pub fn take_interrupt() -> bool {
    let seen = INTERRUPTED.swap(false, Ordering::SeqCst);
    if seen {
        debug!("interrupt delivered while a child process was running");
    }
    seen
}
