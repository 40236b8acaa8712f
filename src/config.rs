//! Optional user configuration and the merged run options.
//!
//! Flags always win over the config file; the file only carries cosmetic
//! preferences (separator, colors, a custom ascii-art path).

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// Shape of `~/.config/rsfetch/config.toml`. Every field is optional;
/// a missing file means all defaults.
#[derive(Deserialize, Debug, Default)]
pub struct FileConfig {
    pub separator: Option<String>,
    pub ascii_color: Option<String>,
    pub label_color: Option<String>,
    pub ascii_path: Option<String>,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

pub fn load_file_config() -> FileConfig {
    let Some(path) = dirs::config_dir().map(|p| p.join("rsfetch/config.toml")) else {
        return FileConfig::default();
    };
    if !path.exists() {
        return FileConfig::default();
    }

    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(_) => return FileConfig::default(),
    };

    match toml::from_str(&data) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: ignoring malformed {}: {}", path.display(), err);
            FileConfig::default()
        }
    }
}

/// Command-line switches, decoded by the front-end.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    pub verbose: bool,
    pub debug: bool,
    pub suppress_errors: bool,
    pub old_logo: bool,
    pub no_logo: bool,
    pub screenshot: bool,
    pub distro_override: Option<String>,
}

/// The fully merged run configuration, threaded explicitly into the
/// probe, presenter and screenshot action. There is no ambient state.
#[derive(Debug)]
pub struct Options {
    pub verbose: bool,
    pub debug: bool,
    pub suppress_errors: bool,
    pub old_logo: bool,
    pub no_logo: bool,
    pub screenshot: bool,
    pub distro_override: Option<String>,
    pub separator: String,
    pub ascii_color: String,
    pub label_color: String,
    pub ascii_path: Option<String>,
    pub colors: HashMap<String, String>,
}

impl Options {
    pub fn merge(file: FileConfig, flags: Flags) -> Options {
        Options {
            verbose: flags.verbose,
            debug: flags.debug,
            suppress_errors: flags.suppress_errors,
            old_logo: flags.old_logo,
            no_logo: flags.no_logo,
            screenshot: flags.screenshot,
            distro_override: flags.distro_override,
            separator: file.separator.unwrap_or_else(|| ": ".to_string()),
            ascii_color: file.ascii_color.unwrap_or_else(|| "cyan".to_string()),
            label_color: file.label_color.unwrap_or_else(|| "bright_blue".to_string()),
            ascii_path: file
                .ascii_path
                .as_deref()
                .map(|p| shellexpand::tilde(p).to_string()),
            colors: file.colors,
        }
    }
}
