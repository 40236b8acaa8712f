//! File reading utilities

use crate::error::Result;
use std::fs;

/// Read a system-exposed file and return its raw contents.
///
/// Small pseudo-files (the common case: /proc and /sys interfaces) go
/// through a single direct read; larger files fall back to a buffered
/// read. Parsing is the caller's job.
pub fn read_system_file(path: &str) -> Result<String> {
    #[cfg(unix)]
    {
        if let Some(contents) = read_small(path) {
            return Ok(contents);
        }
    }
    Ok(fs::read_to_string(path)?)
}

/// One-shot read via the raw syscall interface. Returns None when the file
/// may be larger than the buffer (or is not plain UTF-8), signalling the
/// caller to take the buffered path.
#[cfg(unix)]
fn read_small(path: &str) -> Option<String> {
    use std::ffi::CString;

    let path_cstr = CString::new(path).ok()?;

    unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY);
        if fd < 0 {
            // Let the fallback produce the proper io::Error
            return None;
        }

        let mut buffer = [0u8; 8192];
        let bytes_read = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);

        if bytes_read < 0 || bytes_read as usize == buffer.len() {
            return None;
        }

        std::str::from_utf8(&buffer[..bytes_read as usize])
            .ok()
            .map(|s| s.to_string())
    }
}
