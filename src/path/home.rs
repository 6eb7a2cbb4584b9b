use crate::error::ShellError;
use std::path::PathBuf;

/// Home directory of the invoking user, taken from the password database
/// rather than `$HOME`. Falls back to `dirs::home_dir()`.
pub fn home_dir() -> Result<PathBuf, ShellError> {
    passwd_home()
        .or_else(dirs::home_dir)
        .ok_or(ShellError::HomeDirNotFound)
}

#[cfg(unix)]
fn passwd_home() -> Option<PathBuf> {
    use std::ffi::{CStr, OsStr};
    use std::os::unix::ffi::OsStrExt;

    // getpwuid returns a pointer into static storage; copy out before
    // anything else can call into the passwd functions.
    unsafe {
        let pw = libc::getpwuid(libc::getuid());
        if pw.is_null() || (*pw).pw_dir.is_null() {
            return None;
        }
        let dir = CStr::from_ptr((*pw).pw_dir).to_bytes();
        if dir.is_empty() {
            return None;
        }
        Some(PathBuf::from(OsStr::from_bytes(dir)))
    }
}

#[cfg(not(unix))]
fn passwd_home() -> Option<PathBuf> {
    None
}
