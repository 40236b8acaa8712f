//! Operating system family classification

/// The closed set of platform families rsfetch knows how to probe.
///
/// Computed once at process start and handed read-only to every fact
/// extractor; an environment that matches nothing yields `Unknown` and
/// extractors degrade to sentinel output instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTag {
    Cygwin,
    MacOs,
    Linux,
    FreeBsd,
    NetBsd,
    OpenBsd,
    DragonFlyBsd,
    Unknown,
}

impl PlatformTag {
    /// All tags, in a stable order. Handy for exhaustive tests.
    pub const ALL: [PlatformTag; 8] = [
        PlatformTag::Cygwin,
        PlatformTag::MacOs,
        PlatformTag::Linux,
        PlatformTag::FreeBsd,
        PlatformTag::NetBsd,
        PlatformTag::OpenBsd,
        PlatformTag::DragonFlyBsd,
        PlatformTag::Unknown,
    ];

    /// True for every member of the BSD family (they share most probe syntax).
    pub fn is_bsd(self) -> bool {
        matches!(
            self,
            PlatformTag::FreeBsd
                | PlatformTag::NetBsd
                | PlatformTag::OpenBsd
                | PlatformTag::DragonFlyBsd
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            PlatformTag::Cygwin => "Cygwin",
            PlatformTag::MacOs => "macOS",
            PlatformTag::Linux => "Linux",
            PlatformTag::FreeBsd => "FreeBSD",
            PlatformTag::NetBsd => "NetBSD",
            PlatformTag::OpenBsd => "OpenBSD",
            PlatformTag::DragonFlyBsd => "DragonFly BSD",
            PlatformTag::Unknown => "Unknown",
        }
    }
}

/// Classify the running operating system family.
///
/// Deterministic for a given binary/OS combination and side-effect free.
/// The windows arm maps to `Cygwin`: the only supported way to run this
/// tool there is under a Cygwin environment.
pub fn classify() -> PlatformTag {
    match std::env::consts::OS {
        "linux" => PlatformTag::Linux,
        "macos" => PlatformTag::MacOs,
        "freebsd" => PlatformTag::FreeBsd,
        "netbsd" => PlatformTag::NetBsd,
        "openbsd" => PlatformTag::OpenBsd,
        "dragonfly" => PlatformTag::DragonFlyBsd,
        "windows" => PlatformTag::Cygwin,
        _ => PlatformTag::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_deterministic() {
        let first = classify();
        for _ in 0..8 {
            assert_eq!(first, classify());
        }
    }

    #[test]
    fn classify_returns_a_known_tag() {
        assert!(PlatformTag::ALL.contains(&classify()));
    }

    #[test]
    fn bsd_family_membership() {
        assert!(PlatformTag::FreeBsd.is_bsd());
        assert!(PlatformTag::NetBsd.is_bsd());
        assert!(PlatformTag::OpenBsd.is_bsd());
        assert!(PlatformTag::DragonFlyBsd.is_bsd());
        assert!(!PlatformTag::Linux.is_bsd());
        assert!(!PlatformTag::MacOs.is_bsd());
        assert!(!PlatformTag::Cygwin.is_bsd());
        assert!(!PlatformTag::Unknown.is_bsd());
    }
}
