//! rsfetch library
//!
//! A screenfetch-style system information tool: sixteen facts about the
//! running machine, detected per platform family and rendered beside a
//! distro logo.

pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod logos;
pub mod platform;
pub mod probe;
pub mod screenshot;
pub mod utils;

pub use data::{Fact, FactSet, FACT_COUNT, FACT_LABELS};
pub use error::{ProbeError, Result};
pub use platform::{classify, PlatformTag};
pub use probe::{Probe, SystemProbe};

use collectors::{desktop, hardware, packages, system};

/// Detect all sixteen facts and assemble them in display order.
///
/// The single public entry point the presenter depends on. Independent
/// extractors run in parallel; the WM theme runs after the WM since it
/// depends on which window manager was found. Assembly order is fixed
/// regardless of execution order, and this function never fails: every
/// extractor already guarantees a value.
pub fn aggregate(probe: &dyn Probe, tag: PlatformTag) -> FactSet {
    let ((distro, (arch, host)), ((kernel, uptime), pkgs)) = rayon::join(
        || {
            rayon::join(
                || system::detect_distro(probe, tag),
                || {
                    rayon::join(
                        || system::detect_arch(probe, tag),
                        || system::detect_host(probe, tag),
                    )
                },
            )
        },
        || {
            rayon::join(
                || {
                    rayon::join(
                        || system::detect_kernel(probe, tag),
                        || system::detect_uptime(probe, tag),
                    )
                },
                || packages::detect_pkgs(probe, tag),
            )
        },
    );

    let ((cpu, gpu), (disk, memory)) = rayon::join(
        || {
            rayon::join(
                || hardware::detect_cpu(probe, tag),
                || hardware::detect_gpu(probe, tag),
            )
        },
        || {
            rayon::join(
                || hardware::detect_disk(probe, tag),
                || hardware::detect_mem(probe, tag),
            )
        },
    );

    let ((shell, resolution), (de, (wm, gtk))) = rayon::join(
        || {
            rayon::join(
                || desktop::detect_shell(probe, tag),
                || desktop::detect_res(probe, tag),
            )
        },
        || {
            rayon::join(
                || desktop::detect_de(probe, tag),
                || {
                    rayon::join(
                        || desktop::detect_wm(probe, tag),
                        || desktop::detect_gtk(probe, tag),
                    )
                },
            )
        },
    );

    let wm_theme = desktop::detect_wm_theme(probe, tag, &wm);

    FactSet::new([
        Fact::new("OS", distro),
        Fact::new("Arch", arch),
        Fact::new("Host", host),
        Fact::new("Kernel", kernel),
        Fact::new("Uptime", uptime),
        Fact::new("Packages", pkgs),
        Fact::new("CPU", cpu),
        Fact::new("GPU", gpu),
        Fact::new("Disk", disk),
        Fact::new("Memory", memory),
        Fact::new("Shell", shell),
        Fact::new("Resolution", resolution),
        Fact::new("DE", de),
        Fact::new("WM", wm),
        Fact::new("WM Theme", wm_theme),
        Fact::new("GTK Theme", gtk),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::fake::FakeProbe;

    #[test]
    fn aggregate_shape_is_fixed_even_when_every_probe_fails() {
        let probe = FakeProbe::failing();
        for tag in PlatformTag::ALL {
            let facts = aggregate(&probe, tag);
            assert_eq!(facts.len(), FACT_COUNT);
            for (fact, label) in facts.iter().zip(FACT_LABELS) {
                assert_eq!(fact.label, label);
                assert!(!fact.value.is_empty());
                assert!(fact.value.chars().count() <= data::MAX_VALUE_LEN);
            }
        }
    }

    #[test]
    fn aggregate_threads_probe_output_through() {
        let probe = FakeProbe::new()
            .with_file(
                "/etc/os-release",
                "PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\n",
            )
            .with_command(&["uname", "-m"], "x86_64")
            .with_file("/proc/sys/kernel/hostname", "deb-box\n")
            .with_file("/proc/uptime", "3660.0 100.0\n")
            .with_command(&["dpkg-query", "-f", "${binary:Package}\n", "-W"], "bash\nvim\n");

        let facts = aggregate(&probe, PlatformTag::Linux);
        assert_eq!(facts.os(), "Debian GNU/Linux 12 (bookworm)");
        assert_eq!(facts.get(1).unwrap().value, "x86_64");
        assert_eq!(facts.get(2).unwrap().value, "deb-box");
        assert_eq!(facts.get(4).unwrap().value, "1h 01m");
        assert_eq!(facts.get(5).unwrap().value, "2");
    }
}
