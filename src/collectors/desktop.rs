//! Desktop/session fact extractors (shell, resolution, DE, WM and themes)

use super::{NOT_AVAILABLE, UNKNOWN};
use crate::platform::PlatformTag;
use crate::probe::Probe;
use crate::utils::parsing::extract_after_colon;

/// Detect the interactive shell: $SHELL basename, passwd lookup as
/// fallback.
pub fn detect_shell(probe: &dyn Probe, _tag: PlatformTag) -> String {
    if let Some(shell) = probe.env("SHELL") {
        if let Some(name) = basename(&shell) {
            return name.to_string();
        }
    }

    if let Some(user) = probe.env("USER") {
        if let Ok(output) = probe.run(&["getent", "passwd", &user]) {
            if let Some(shell) = output.lines().next().and_then(|l| l.split(':').nth(6)) {
                if let Some(name) = basename(shell.trim()) {
                    return name.to_string();
                }
            }
        }
    }

    UNKNOWN.to_string()
}

fn basename(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Detect the display resolution; "N/A" when no display server is
/// reachable.
pub fn detect_res(probe: &dyn Probe, tag: PlatformTag) -> String {
    match tag {
        PlatformTag::MacOs => probe
            .run(&["system_profiler", "SPDisplaysDataType"])
            .ok()
            .and_then(|output| {
                output
                    .lines()
                    .find(|line| line.trim_start().starts_with("Resolution:"))
                    .and_then(|line| extract_after_colon(line))
            })
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        PlatformTag::Linux | PlatformTag::FreeBsd | PlatformTag::NetBsd
        | PlatformTag::OpenBsd | PlatformTag::DragonFlyBsd => {
            if probe.env("DISPLAY").is_none() && probe.env("WAYLAND_DISPLAY").is_none() {
                return NOT_AVAILABLE.to_string();
            }
            xrandr_resolution(probe).unwrap_or_else(|| NOT_AVAILABLE.to_string())
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn xrandr_resolution(probe: &dyn Probe) -> Option<String> {
    let output = probe.run(&["xrandr", "--current"]).ok()?;

    // "Screen 0: minimum 320 x 200, current 1920 x 1080, maximum ..."
    if let Some(line) = output.lines().find(|line| line.contains("current ")) {
        if let Some(res) = parse_current_resolution(line) {
            return Some(res);
        }
    }

    // Fallback: the active mode line is starred, "   1920x1080  60.00*+"
    output
        .lines()
        .find(|line| line.contains('*'))
        .and_then(|line| line.split_whitespace().next())
        .filter(|token| token.contains('x'))
        .map(str::to_string)
}

fn parse_current_resolution(line: &str) -> Option<String> {
    let rest = &line[line.find("current ")? + "current ".len()..];
    let mut tokens = rest
        .split(|c: char| c == ' ' || c == ',')
        .filter(|t| !t.is_empty());
    let width = tokens.next()?;
    if tokens.next()? != "x" {
        return None;
    }
    let height = tokens.next()?;
    if width.chars().all(|c| c.is_ascii_digit()) && height.chars().all(|c| c.is_ascii_digit()) {
        Some(format!("{}x{}", width, height))
    } else {
        None
    }
}

/// Desktop environment indicator variables, checked in fixed priority
/// order. `None` means the variable's own value names the DE.
const DE_INDICATORS: &[(&str, Option<&str>)] = &[
    ("XDG_CURRENT_DESKTOP", None),
    ("DESKTOP_SESSION", None),
    ("KDE_FULL_SESSION", Some("KDE")),
    ("GNOME_DESKTOP_SESSION_ID", Some("GNOME")),
    ("MATE_DESKTOP_SESSION_ID", Some("MATE")),
];

/// Detect the desktop environment.
pub fn detect_de(probe: &dyn Probe, tag: PlatformTag) -> String {
    match tag {
        PlatformTag::MacOs => "Aqua".to_string(),
        PlatformTag::Cygwin | PlatformTag::Unknown => NOT_AVAILABLE.to_string(),
        _ => {
            for (var, fixed) in DE_INDICATORS {
                if let Some(value) = probe.env(var) {
                    return match fixed {
                        Some(name) => name.to_string(),
                        None => capitalize_first_letter(&value),
                    };
                }
            }
            UNKNOWN.to_string()
        }
    }
}

/// Known window manager process names, in match priority order, paired
/// with their display names. First running process that matches wins.
const WINDOW_MANAGERS: &[(&str, &str)] = &[
    ("sway", "Sway"),
    ("hyprland", "Hyprland"),
    ("river", "River"),
    ("wayfire", "Wayfire"),
    ("kwin_wayland", "KWin"),
    ("kwin_x11", "KWin"),
    ("kwin", "KWin"),
    ("mutter", "Mutter"),
    ("gnome-shell", "Mutter"),
    ("xfwm4", "Xfwm4"),
    ("openbox", "Openbox"),
    ("fluxbox", "Fluxbox"),
    ("i3", "i3"),
    ("bspwm", "bspwm"),
    ("awesome", "Awesome"),
    ("dwm", "dwm"),
    ("xmonad", "xmonad"),
    ("herbstluftwm", "herbstluftwm"),
    ("icewm", "IceWM"),
    ("metacity", "Metacity"),
    ("compiz", "Compiz"),
    ("weston", "Weston"),
];

/// Detect the window manager by matching the process list against the
/// known-WM table.
pub fn detect_wm(probe: &dyn Probe, tag: PlatformTag) -> String {
    match tag {
        PlatformTag::MacOs => "Quartz Compositor".to_string(),
        PlatformTag::Cygwin => "DWM".to_string(),
        PlatformTag::Unknown => NOT_AVAILABLE.to_string(),
        _ => {
            let Ok(output) = probe.run(&["ps", "-e", "-o", "comm="]) else {
                return UNKNOWN.to_string();
            };
            let processes: Vec<&str> = output
                .lines()
                .filter_map(|line| basename(line.trim()))
                .collect();
            for (process, name) in WINDOW_MANAGERS {
                if processes.iter().any(|p| p == process) {
                    return name.to_string();
                }
            }
            UNKNOWN.to_string()
        }
    }
}

/// Detect the window manager theme; only meaningful once a WM is known.
pub fn detect_wm_theme(probe: &dyn Probe, tag: PlatformTag, wm: &str) -> String {
    if matches!(tag, PlatformTag::MacOs | PlatformTag::Cygwin | PlatformTag::Unknown) {
        return NOT_AVAILABLE.to_string();
    }

    let theme = match wm {
        "Xfwm4" => probe
            .run(&["xfconf-query", "-c", "xfwm4", "-p", "/general/theme"])
            .ok(),
        "Mutter" | "Metacity" => probe
            .run(&["gsettings", "get", "org.gnome.desktop.wm.preferences", "theme"])
            .ok()
            .map(|value| value.trim_matches('\'').to_string()),
        "KWin" => kwin_theme(probe),
        "Openbox" => openbox_theme(probe),
        _ => None,
    };

    match theme {
        Some(theme) if !theme.is_empty() => theme,
        _ => UNKNOWN.to_string(),
    }
}

fn kwin_theme(probe: &dyn Probe) -> Option<String> {
    let home = probe.env("HOME")?;
    let contents = probe.read_file(&format!("{}/.config/kwinrc", home)).ok()?;
    contents
        .lines()
        .find_map(|line| line.strip_prefix("theme="))
        .map(|theme| theme.trim().to_string())
}

fn openbox_theme(probe: &dyn Probe) -> Option<String> {
    let home = probe.env("HOME")?;
    let contents = probe
        .read_file(&format!("{}/.config/openbox/rc.xml", home))
        .ok()?;
    // first <name>...</name> inside the <theme> section
    let theme_section = &contents[contents.find("<theme>")?..];
    let start = theme_section.find("<name>")? + "<name>".len();
    let end = theme_section[start..].find("</name>")?;
    Some(theme_section[start..start + end].trim().to_string())
}

/// Detect the GTK theme from the user's settings files.
pub fn detect_gtk(probe: &dyn Probe, tag: PlatformTag) -> String {
    if matches!(tag, PlatformTag::MacOs | PlatformTag::Cygwin | PlatformTag::Unknown) {
        return NOT_AVAILABLE.to_string();
    }

    let Some(home) = probe.env("HOME") else {
        return NOT_AVAILABLE.to_string();
    };

    if let Ok(contents) = probe.read_file(&format!("{}/.config/gtk-3.0/settings.ini", home)) {
        if let Some(theme) = ini_theme(&contents) {
            return theme;
        }
    }

    if let Ok(contents) = probe.read_file(&format!("{}/.gtkrc-2.0", home)) {
        if let Some(theme) = ini_theme(&contents) {
            return theme;
        }
    }

    NOT_AVAILABLE.to_string()
}

fn ini_theme(contents: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("gtk-theme-name"))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

pub fn capitalize_first_letter(s: &str) -> String {
    if let Some(first) = s.chars().next() {
        format!("{}{}", first.to_uppercase(), &s[first.len_utf8()..])
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::fake::FakeProbe;

    #[test]
    fn shell_from_env_basename() {
        let probe = FakeProbe::new().with_env("SHELL", "/usr/bin/zsh");
        assert_eq!(detect_shell(&probe, PlatformTag::Linux), "zsh");
    }

    #[test]
    fn shell_falls_back_to_passwd() {
        let probe = FakeProbe::new()
            .with_env("USER", "alice")
            .with_command(
                &["getent", "passwd", "alice"],
                "alice:x:1000:1000:Alice:/home/alice:/bin/fish\n",
            );
        assert_eq!(detect_shell(&probe, PlatformTag::Linux), "fish");
    }

    #[test]
    fn resolution_requires_a_display() {
        let probe = FakeProbe::new();
        assert_eq!(detect_res(&probe, PlatformTag::Linux), NOT_AVAILABLE);
    }

    #[test]
    fn resolution_from_xrandr_screen_line() {
        let xrandr = "Screen 0: minimum 320 x 200, current 2560 x 1440, maximum 16384 x 16384\n\
                      DP-1 connected primary 2560x1440+0+0\n";
        let probe = FakeProbe::new()
            .with_env("DISPLAY", ":0")
            .with_command(&["xrandr", "--current"], xrandr);
        assert_eq!(detect_res(&probe, PlatformTag::Linux), "2560x1440");
    }

    #[test]
    fn resolution_from_starred_mode_line() {
        let xrandr = "DP-1 connected primary\n   1920x1080     60.00*+  59.94\n";
        let probe = FakeProbe::new()
            .with_env("DISPLAY", ":0")
            .with_command(&["xrandr", "--current"], xrandr);
        assert_eq!(detect_res(&probe, PlatformTag::Linux), "1920x1080");
    }

    #[test]
    fn resolution_on_macos() {
        let report = "    Displays:\n      Resolution: 3456 x 2234 Retina\n";
        let probe =
            FakeProbe::new().with_command(&["system_profiler", "SPDisplaysDataType"], report);
        assert_eq!(detect_res(&probe, PlatformTag::MacOs), "3456 x 2234 Retina");
    }

    #[test]
    fn de_indicator_priority() {
        let probe = FakeProbe::new()
            .with_env("XDG_CURRENT_DESKTOP", "gnome")
            .with_env("KDE_FULL_SESSION", "true");
        assert_eq!(detect_de(&probe, PlatformTag::Linux), "Gnome");

        let probe = FakeProbe::new().with_env("KDE_FULL_SESSION", "true");
        assert_eq!(detect_de(&probe, PlatformTag::Linux), "KDE");

        assert_eq!(detect_de(&FakeProbe::new(), PlatformTag::MacOs), "Aqua");
        assert_eq!(detect_de(&FakeProbe::new(), PlatformTag::Linux), UNKNOWN);
    }

    #[test]
    fn wm_process_table_match() {
        let ps = "systemd\nsshd\ni3\nbash\n";
        let probe = FakeProbe::new().with_command(&["ps", "-e", "-o", "comm="], ps);
        assert_eq!(detect_wm(&probe, PlatformTag::Linux), "i3");
    }

    #[test]
    fn wm_table_priority_not_process_order() {
        // kwin_x11 outranks xfwm4 in the table even if listed later
        let ps = "xfwm4\nkwin_x11\n";
        let probe = FakeProbe::new().with_command(&["ps", "-e", "-o", "comm="], ps);
        assert_eq!(detect_wm(&probe, PlatformTag::Linux), "KWin");
    }

    #[test]
    fn wm_fixed_per_platform() {
        let probe = FakeProbe::failing();
        assert_eq!(detect_wm(&probe, PlatformTag::MacOs), "Quartz Compositor");
        assert_eq!(detect_wm(&probe, PlatformTag::Linux), UNKNOWN);
    }

    #[test]
    fn wm_theme_for_openbox() {
        let rc = "<openbox_config>\n<theme>\n  <name>Clearlooks</name>\n</theme>\n</openbox_config>";
        let probe = FakeProbe::new()
            .with_env("HOME", "/home/alice")
            .with_file("/home/alice/.config/openbox/rc.xml", rc);
        assert_eq!(
            detect_wm_theme(&probe, PlatformTag::Linux, "Openbox"),
            "Clearlooks"
        );
    }

    #[test]
    fn wm_theme_for_mutter_strips_quotes() {
        let probe = FakeProbe::new().with_command(
            &["gsettings", "get", "org.gnome.desktop.wm.preferences", "theme"],
            "'Adwaita'",
        );
        assert_eq!(
            detect_wm_theme(&probe, PlatformTag::Linux, "Mutter"),
            "Adwaita"
        );
    }

    #[test]
    fn wm_theme_unknown_wm_is_unknown() {
        assert_eq!(
            detect_wm_theme(&FakeProbe::failing(), PlatformTag::Linux, UNKNOWN),
            UNKNOWN
        );
    }

    #[test]
    fn gtk_theme_from_settings_ini() {
        let ini = "[Settings]\ngtk-theme-name = Arc-Dark\ngtk-icon-theme-name = Papirus\n";
        let probe = FakeProbe::new()
            .with_env("HOME", "/home/alice")
            .with_file("/home/alice/.config/gtk-3.0/settings.ini", ini);
        assert_eq!(detect_gtk(&probe, PlatformTag::Linux), "Arc-Dark");
    }

    #[test]
    fn gtk_theme_gtkrc_fallback() {
        let rc = "gtk-theme-name=\"Raleigh\"\n";
        let probe = FakeProbe::new()
            .with_env("HOME", "/home/alice")
            .with_file("/home/alice/.gtkrc-2.0", rc);
        assert_eq!(detect_gtk(&probe, PlatformTag::Linux), "Raleigh");
    }

    #[test]
    fn gtk_theme_absent_is_na() {
        let probe = FakeProbe::new().with_env("HOME", "/home/alice");
        assert_eq!(detect_gtk(&probe, PlatformTag::Linux), NOT_AVAILABLE);
    }

    #[test]
    fn sentinels_on_failing_probe() {
        let probe = FakeProbe::failing();
        for tag in PlatformTag::ALL {
            for value in [
                detect_shell(&probe, tag),
                detect_res(&probe, tag),
                detect_de(&probe, tag),
                detect_wm(&probe, tag),
                detect_gtk(&probe, tag),
            ] {
                assert!(!value.is_empty());
                assert!(value.chars().count() <= crate::data::MAX_VALUE_LEN);
            }
            let wm = detect_wm(&probe, tag);
            let theme = detect_wm_theme(&probe, tag, &wm);
            assert!(!theme.is_empty());
        }
    }
}
