//! Best-effort screen capture.

use crate::error::{ProbeError, Result};
use crate::platform::PlatformTag;
use crate::probe::Probe;
use crate::utils::command::command_exists;
use std::time::{SystemTime, UNIX_EPOCH};

/// Capture the screen with the platform's native tool and return the
/// output filename. Failures are reported, never fatal.
pub fn take_screenshot(probe: &dyn Probe, tag: PlatformTag) -> Result<String> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let filename = format!("rsfetch-{}.png", stamp);

    match tag {
        PlatformTag::MacOs => {
            probe.run(&["screencapture", "-x", &filename])?;
        }
        PlatformTag::Unknown => {
            return Err(ProbeError::NotFound(
                "no screenshot tool for this platform".to_string(),
            ));
        }
        _ => {
            if command_exists("scrot") {
                probe.run(&["scrot", &filename])?;
            } else if command_exists("import") {
                probe.run(&["import", "-window", "root", &filename])?;
            } else {
                return Err(ProbeError::NotFound(
                    "no screenshot tool (scrot or import)".to_string(),
                ));
            }
        }
    }

    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::fake::FakeProbe;

    #[test]
    fn unknown_platform_reports_not_found() {
        let err = take_screenshot(&FakeProbe::failing(), PlatformTag::Unknown).unwrap_err();
        assert!(matches!(err, ProbeError::NotFound(_)));
    }
}
