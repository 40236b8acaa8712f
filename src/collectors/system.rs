//! System fact extractors (distro, architecture, hostname, kernel, uptime)

use super::UNKNOWN;
use crate::platform::PlatformTag;
use crate::probe::Probe;
use crate::utils::parsing::format_uptime;
use std::time::{SystemTime, UNIX_EPOCH};

/// Detect the human-readable operating system / distribution name.
pub fn detect_distro(probe: &dyn Probe, tag: PlatformTag) -> String {
    match tag {
        PlatformTag::Linux => linux_distro(probe),
        PlatformTag::MacOs => macos_distro(probe),
        PlatformTag::Cygwin => "Cygwin".to_string(),
        t if t.is_bsd() => t.name().to_string(),
        _ => UNKNOWN.to_string(),
    }
}

fn linux_distro(probe: &dyn Probe) -> String {
    if let Ok(contents) = probe.read_file("/etc/os-release") {
        for line in contents.lines() {
            if let Some(value) = line.strip_prefix("PRETTY_NAME=") {
                let name = value.trim().trim_matches('"');
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }
    }

    if let Ok(output) = probe.run(&["lsb_release", "-ds"]) {
        let name = output.trim_matches('"').trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }

    "Linux".to_string()
}

fn macos_distro(probe: &dyn Probe) -> String {
    match probe.run(&["sw_vers", "-productVersion"]) {
        Ok(version) => match macos_marketing_name(&version) {
            Some(name) => format!("macOS {} {}", name, version),
            None => format!("macOS {}", version),
        },
        Err(_) => "macOS".to_string(),
    }
}

/// Map a product version to Apple's marketing name by major (or, for the
/// 10.x line, minor) version.
fn macos_marketing_name(version: &str) -> Option<&'static str> {
    let mut parts = version.split('.');
    let major: u32 = parts.next()?.trim().parse().ok()?;
    match major {
        10 => {
            let minor: u32 = parts.next()?.trim().parse().ok()?;
            match minor {
                6 => Some("Snow Leopard"),
                7 => Some("Lion"),
                8 => Some("Mountain Lion"),
                9 => Some("Mavericks"),
                10 => Some("Yosemite"),
                11 => Some("El Capitan"),
                12 => Some("Sierra"),
                13 => Some("High Sierra"),
                14 => Some("Mojave"),
                15 => Some("Catalina"),
                _ => None,
            }
        }
        11 => Some("Big Sur"),
        12 => Some("Monterey"),
        13 => Some("Ventura"),
        14 => Some("Sonoma"),
        15 => Some("Sequoia"),
        _ => None,
    }
}

/// Detect the machine hardware architecture; single probe, passthrough.
pub fn detect_arch(probe: &dyn Probe, _tag: PlatformTag) -> String {
    match probe.run(&["uname", "-m"]) {
        Ok(arch) if !arch.is_empty() => arch,
        _ => UNKNOWN.to_string(),
    }
}

/// Detect the hostname.
pub fn detect_host(probe: &dyn Probe, tag: PlatformTag) -> String {
    if matches!(tag, PlatformTag::Linux | PlatformTag::Cygwin) {
        if let Ok(contents) = probe.read_file("/proc/sys/kernel/hostname") {
            let host = contents.lines().next().unwrap_or("").trim();
            if !host.is_empty() {
                return host.to_string();
            }
        }
    }

    match probe.run(&["uname", "-n"]) {
        Ok(host) if !host.is_empty() => host,
        _ => UNKNOWN.to_string(),
    }
}

/// Detect the kernel release string.
pub fn detect_kernel(probe: &dyn Probe, tag: PlatformTag) -> String {
    if matches!(tag, PlatformTag::Linux | PlatformTag::Cygwin) {
        if let Ok(contents) = probe.read_file("/proc/sys/kernel/osrelease") {
            let release = contents.trim();
            if !release.is_empty() {
                return release.to_string();
            }
        }
    }

    match probe.run(&["uname", "-r"]) {
        Ok(release) if !release.is_empty() => release,
        _ => UNKNOWN.to_string(),
    }
}

/// Detect uptime and render it through the decomposition.
pub fn detect_uptime(probe: &dyn Probe, tag: PlatformTag) -> String {
    match uptime_seconds(probe, tag) {
        Some(seconds) => format_uptime(seconds),
        None => UNKNOWN.to_string(),
    }
}

fn uptime_seconds(probe: &dyn Probe, tag: PlatformTag) -> Option<f64> {
    match tag {
        PlatformTag::Linux | PlatformTag::Cygwin => {
            let contents = probe.read_file("/proc/uptime").ok()?;
            contents.split_whitespace().next()?.parse().ok()
        }
        PlatformTag::MacOs | PlatformTag::FreeBsd | PlatformTag::NetBsd
        | PlatformTag::OpenBsd | PlatformTag::DragonFlyBsd => {
            let output = probe.run(&["sysctl", "-n", "kern.boottime"]).ok()?;
            let boot = parse_boottime(&output)?;
            let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
            Some(now.saturating_sub(boot) as f64)
        }
        PlatformTag::Unknown => None,
    }
}

/// Extract the boot timestamp from `kern.boottime` output, which is either
/// `{ sec = 1693286987, usec = 280000 } Tue Aug 29 ...` or a bare number.
fn parse_boottime(output: &str) -> Option<u64> {
    let trimmed = output.trim();
    if let Ok(seconds) = trimmed.parse::<u64>() {
        return Some(seconds);
    }

    let after_sec = &trimmed[trimmed.find("sec")?..];
    let digits: String = after_sec
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
