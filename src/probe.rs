//! The command/file probe seam.
//!
//! Every fact extractor reaches the outside world through the [`Probe`]
//! trait, so the platform dispatch logic stays testable with a fake probe
//! under a single compiled artifact.

use crate::error::{ProbeError, Result};
use crate::utils::{command, file};

/// Read-only access to external commands, pseudo-files and the environment.
///
/// All three operations are idempotent and side-effect free with respect
/// to system state. `Sync` is required so independent extractors may run
/// in parallel against a shared probe.
pub trait Probe: Sync {
    /// Execute `argv[0]` with the remaining arguments (no shell involved)
    /// and return its stdout with trailing whitespace trimmed.
    fn run(&self, argv: &[&str]) -> Result<String>;

    /// Read a small system-exposed file and return its raw contents.
    /// Parsing is the caller's job.
    fn read_file(&self, path: &str) -> Result<String>;

    /// Environment variable lookup, part of the seam so shell/desktop
    /// detection is drivable from tests.
    fn env(&self, key: &str) -> Option<String>;
}

/// The production probe: real subprocesses, real files, real environment.
pub struct SystemProbe {
    debug: bool,
}

impl SystemProbe {
    pub fn new(debug: bool) -> Self {
        SystemProbe { debug }
    }

    fn trace(&self, err: &ProbeError) {
        if self.debug {
            eprintln!("\x1b[1;33m[[ DEBUG ]]\x1b[0m {}", err);
        }
    }
}

impl Probe for SystemProbe {
    fn run(&self, argv: &[&str]) -> Result<String> {
        command::run_command(argv).map_err(|err| {
            self.trace(&err);
            err
        })
    }

    fn read_file(&self, path: &str) -> Result<String> {
        file::read_system_file(path).map_err(|err| {
            self.trace(&err);
            err
        })
    }

    fn env(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
pub mod fake {
    //! Canned-response probe used by the collector tests.

    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct FakeProbe {
        commands: HashMap<String, String>,
        files: HashMap<String, String>,
        envs: HashMap<String, String>,
    }

    impl FakeProbe {
        pub fn new() -> Self {
            FakeProbe::default()
        }

        /// A probe for which every operation fails.
        pub fn failing() -> Self {
            FakeProbe::default()
        }

        pub fn with_command(mut self, argv: &[&str], stdout: &str) -> Self {
            self.commands.insert(argv.join(" "), stdout.to_string());
            self
        }

        pub fn with_file(mut self, path: &str, contents: &str) -> Self {
            self.files.insert(path.to_string(), contents.to_string());
            self
        }

        pub fn with_env(mut self, key: &str, value: &str) -> Self {
            self.envs.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl Probe for FakeProbe {
        fn run(&self, argv: &[&str]) -> Result<String> {
            self.commands
                .get(&argv.join(" "))
                .map(|out| out.trim_end().to_string())
                .ok_or_else(|| ProbeError::CommandFailed(argv.join(" ")))
        }

        fn read_file(&self, path: &str) -> Result<String> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| ProbeError::NotFound(path.to_string()))
        }

        fn env(&self, key: &str) -> Option<String> {
            self.envs.get(key).cloned()
        }
    }
}
