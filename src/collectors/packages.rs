//! Installed package counting

use super::UNKNOWN;
use crate::platform::PlatformTag;
use crate::probe::Probe;

/// One package manager candidate: the listing command and the number of
/// header lines its output carries before the actual package lines.
struct PackageManager {
    argv: &'static [&'static str],
    header_lines: usize,
}

/// Linux candidates in fixed priority order; the first one whose listing
/// command succeeds determines the count source.
const LINUX_MANAGERS: &[PackageManager] = &[
    PackageManager { argv: &["pacman", "-Qq"], header_lines: 0 },
    PackageManager {
        argv: &["dpkg-query", "-f", "${binary:Package}\n", "-W"],
        header_lines: 0,
    },
    PackageManager { argv: &["rpm", "-qa"], header_lines: 0 },
    PackageManager { argv: &["xbps-query", "-l"], header_lines: 0 },
    PackageManager { argv: &["apk", "info"], header_lines: 0 },
    PackageManager { argv: &["qlist", "-I"], header_lines: 0 },
    PackageManager {
        argv: &["nix-store", "--query", "--requisites", "/run/current-system/sw"],
        header_lines: 0,
    },
];

const MACOS_MANAGERS: &[PackageManager] = &[
    PackageManager { argv: &["brew", "list", "--formula"], header_lines: 0 },
    PackageManager { argv: &["port", "installed"], header_lines: 1 },
];

const FREEBSD_MANAGERS: &[PackageManager] =
    &[PackageManager { argv: &["pkg", "info"], header_lines: 0 }];

const PKGSRC_MANAGERS: &[PackageManager] =
    &[PackageManager { argv: &["pkg_info"], header_lines: 0 }];

// cygcheck prints two header lines before the package table
const CYGWIN_MANAGERS: &[PackageManager] =
    &[PackageManager { argv: &["cygcheck", "-cd"], header_lines: 2 }];

/// Count installed packages: try the platform's candidates in order,
/// first success wins, count the non-empty listing lines.
pub fn detect_pkgs(probe: &dyn Probe, tag: PlatformTag) -> String {
    let managers: &[PackageManager] = match tag {
        PlatformTag::Linux => LINUX_MANAGERS,
        PlatformTag::MacOs => MACOS_MANAGERS,
        PlatformTag::FreeBsd | PlatformTag::DragonFlyBsd => FREEBSD_MANAGERS,
        PlatformTag::NetBsd | PlatformTag::OpenBsd => PKGSRC_MANAGERS,
        PlatformTag::Cygwin => CYGWIN_MANAGERS,
        PlatformTag::Unknown => return UNKNOWN.to_string(),
    };

    for manager in managers {
        if let Ok(output) = probe.run(manager.argv) {
            let count = output
                .lines()
                .filter(|line| !line.trim().is_empty())
                .count()
                .saturating_sub(manager.header_lines);
            if count > 0 {
                return count.to_string();
            }
        }
    }

    UNKNOWN.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::fake::FakeProbe;

    #[test]
    fn counts_listing_lines() {
        let probe = FakeProbe::new().with_command(&["pacman", "-Qq"], "bash\ncoreutils\nlinux\n");
        assert_eq!(detect_pkgs(&probe, PlatformTag::Linux), "3");
    }

    #[test]
    fn blank_lines_are_not_packages() {
        let probe = FakeProbe::new().with_command(&["pacman", "-Qq"], "bash\n\ncoreutils\n\n");
        assert_eq!(detect_pkgs(&probe, PlatformTag::Linux), "2");
    }

    #[test]
    fn first_available_manager_wins() {
        let probe = FakeProbe::new()
            .with_command(&["rpm", "-qa"], "a\nb\n")
            .with_command(&["pacman", "-Qq"], "a\nb\nc\nd\n");
        // pacman is earlier in the priority order
        assert_eq!(detect_pkgs(&probe, PlatformTag::Linux), "4");
    }

    #[test]
    fn header_lines_are_subtracted() {
        let probe = FakeProbe::new()
            .with_command(&["cygcheck", "-cd"], "Cygwin Package Information\nPackage Version\nbash 5.2\nvim 9.0\n");
        assert_eq!(detect_pkgs(&probe, PlatformTag::Cygwin), "2");
    }

    #[test]
    fn no_manager_present_is_unknown() {
        let probe = FakeProbe::failing();
        for tag in PlatformTag::ALL {
            assert_eq!(detect_pkgs(&probe, tag), UNKNOWN);
        }
    }
}
