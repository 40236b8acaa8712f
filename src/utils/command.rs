//! Command execution utilities

use crate::error::{ProbeError, Result};
use std::process::Command;

/// Upper bound on captured output; anything past this is dropped.
const OUTPUT_CAP: usize = 1 << 20;

/// Execute a command and return stdout as String, trailing whitespace trimmed.
///
/// No shell is involved, so the argv is passed through untouched. A missing
/// binary or a failing exit with no usable output both map to
/// `CommandFailed`.
pub fn run_command(argv: &[&str]) -> Result<String> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| ProbeError::CommandFailed("empty argv".to_string()))?;

    let output = Command::new(program).args(args).output()?;

    let stdout = cap_output(String::from_utf8_lossy(&output.stdout).into_owned());
    let stdout = stdout.trim_end();

    if !output.status.success() && stdout.is_empty() {
        return Err(ProbeError::CommandFailed(format!(
            "'{}' exited with code {:?}",
            program,
            output.status.code()
        )));
    }

    Ok(stdout.to_string())
}

/// Cut captured output at the cap, stepping back to a char boundary so a
/// multi-byte character straddling the cap cannot cause a panic.
fn cap_output(mut stdout: String) -> String {
    if stdout.len() > OUTPUT_CAP {
        let mut cut = OUTPUT_CAP;
        while !stdout.is_char_boundary(cut) {
            cut -= 1;
        }
        stdout.truncate(cut);
    }
    stdout
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    use std::env;

    if let Ok(path) = env::var("PATH") {
        for dir in path.split(':') {
            let full_path = std::path::Path::new(dir).join(program);
            if full_path.exists() && full_path.is_file() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argv_fails() {
        assert!(matches!(
            run_command(&[]),
            Err(ProbeError::CommandFailed(_))
        ));
    }

    #[test]
    fn stdout_is_trimmed() {
        assert_eq!(run_command(&["echo", "hi"]).unwrap(), "hi");
    }

    #[test]
    fn cap_cuts_on_a_char_boundary() {
        // OUTPUT_CAP % 3 == 1, so the cap lands mid-character in a run
        // of 3-byte euro signs
        let huge = "€".repeat(OUTPUT_CAP / 3 + 100);
        let capped = cap_output(huge);
        assert!(capped.len() <= OUTPUT_CAP);
        assert!(capped.is_char_boundary(capped.len()));
        assert!(capped.chars().all(|c| c == '€'));

        assert_eq!(cap_output("small".to_string()), "small");
    }

    #[test]
    fn oversized_multibyte_output_does_not_abort() {
        let path = std::env::temp_dir().join("rsfetch-cap-test.txt");
        std::fs::write(&path, "€".repeat(OUTPUT_CAP / 3 + 100)).unwrap();
        let out = run_command(&["cat", path.to_str().unwrap()]).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(out.len() <= OUTPUT_CAP);
        assert!(out.chars().all(|c| c == '€'));
    }

    #[test]
    fn command_exists_finds_sh() {
        assert!(command_exists("sh"));
        assert!(!command_exists("rsfetch-no-such-binary"));
    }
}
