//! Hardware fact extractors (CPU, GPU, disk, memory)

use super::UNKNOWN;
use crate::platform::PlatformTag;
use crate::probe::Probe;
use crate::utils::parsing::{extract_after_colon, format_kib, meminfo_line_mb};

/// Detect the CPU model string. Multi-socket listings report the first
/// entry only.
pub fn detect_cpu(probe: &dyn Probe, tag: PlatformTag) -> String {
    let raw = match tag {
        PlatformTag::Linux | PlatformTag::Cygwin => probe
            .read_file("/proc/cpuinfo")
            .ok()
            .and_then(|contents| {
                contents
                    .lines()
                    .find(|line| line.starts_with("model name"))
                    .and_then(extract_after_colon)
            }),
        PlatformTag::MacOs => probe.run(&["sysctl", "-n", "machdep.cpu.brand_string"]).ok(),
        t if t.is_bsd() => probe.run(&["sysctl", "-n", "hw.model"]).ok(),
        _ => None,
    };

    match raw {
        // Vendor strings pad with runs of spaces; collapse them
        Some(model) if !model.is_empty() => {
            model.split_whitespace().collect::<Vec<_>>().join(" ")
        }
        _ => UNKNOWN.to_string(),
    }
}

/// Known GPU vendors, matched against device listings in priority order.
/// First match wins. Kept separate from the matching code so the table
/// can grow without touching control flow.
const GPU_VENDORS: &[(&str, &str)] = &[
    ("NVIDIA", "NVIDIA"),
    ("GeForce", "NVIDIA"),
    ("Advanced Micro Devices", "AMD"),
    ("AMD", "AMD"),
    ("ATI", "AMD"),
    ("Radeon", "AMD"),
    ("Intel", "Intel"),
    ("VMware", "VMware"),
    ("VirtualBox", "VirtualBox"),
    ("Matrox", "Matrox"),
];

/// PCI class names that mark a display device in `lspci` output.
const DISPLAY_CLASSES: &[&str] = &[
    "VGA compatible controller",
    "3D controller",
    "Display controller",
];

/// Detect the GPU model.
pub fn detect_gpu(probe: &dyn Probe, tag: PlatformTag) -> String {
    let gpu = match tag {
        PlatformTag::Linux => lspci_gpu(probe),
        t if t.is_bsd() => lspci_gpu(probe),
        PlatformTag::MacOs => probe
            .run(&["system_profiler", "SPDisplaysDataType"])
            .ok()
            .and_then(|output| {
                output
                    .lines()
                    .find(|line| line.contains("Chipset Model:"))
                    .and_then(|line| extract_after_colon(line))
            }),
        PlatformTag::Cygwin => probe
            .run(&["wmic", "path", "Win32_VideoController", "get", "caption"])
            .ok()
            .and_then(|output| {
                output
                    .lines()
                    .skip(1)
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .map(str::to_string)
            }),
        _ => None,
    };

    gpu.unwrap_or_else(|| UNKNOWN.to_string())
}

fn lspci_gpu(probe: &dyn Probe) -> Option<String> {
    let output = probe.run(&["lspci"]).ok()?;
    let line = output
        .lines()
        .find(|line| DISPLAY_CLASSES.iter().any(|class| line.contains(class)))?;
    parse_gpu_line(line)
}

/// Turn one lspci display line into "<Vendor> <model>".
fn parse_gpu_line(line: &str) -> Option<String> {
    let vendor = GPU_VENDORS
        .iter()
        .find(|(pattern, _)| line.contains(pattern))
        .map(|(_, name)| *name);

    let description = line.rsplit_once(": ").map(|(_, d)| d).unwrap_or(line);
    let description = description.split(" (rev ").next().unwrap_or(description).trim();

    // lspci puts the marketing name in the last bracket pair, e.g.
    // "GA104 [GeForce RTX 3070]"; vendor-only brackets like [AMD/ATI]
    // are skipped.
    let model = bracket_model(description).unwrap_or_else(|| cleaned_description(description));

    match vendor {
        Some(vendor) if !model.contains(vendor) => Some(format!("{} {}", vendor, model)),
        Some(_) => Some(model),
        None => Some(model),
    }
}

fn bracket_model(description: &str) -> Option<String> {
    let start = description.rfind('[')?;
    let end = description[start..].find(']')?;
    let content = &description[start + 1..start + end];
    if content.contains('/') || content.len() <= 3 {
        return None;
    }
    Some(content.to_string())
}

fn cleaned_description(description: &str) -> String {
    description
        .replace("Corporation", "")
        .replace("Advanced Micro Devices, Inc.", "AMD")
        .split(" [")
        .next()
        .unwrap_or(description)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Detect root filesystem usage as "used / total (pct%)".
pub fn detect_disk(probe: &dyn Probe, tag: PlatformTag) -> String {
    if tag == PlatformTag::Unknown {
        return UNKNOWN.to_string();
    }

    let parsed = probe.run(&["df", "-P", "-k", "/"]).ok().and_then(|output| {
        let line = output.lines().nth(1)?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let total_kib: u64 = fields.get(1)?.parse().ok()?;
        let used_kib: u64 = fields.get(2)?.parse().ok()?;
        if total_kib == 0 {
            return None;
        }
        let percent = (used_kib * 100 + total_kib / 2) / total_kib;
        Some(format!(
            "{} / {} ({}%)",
            format_kib(used_kib),
            format_kib(total_kib),
            percent
        ))
    });

    parsed.unwrap_or_else(|| UNKNOWN.to_string())
}

/// Detect memory usage as "usedMB / totalMB", used = total − available.
pub fn detect_mem(probe: &dyn Probe, tag: PlatformTag) -> String {
    let mem = match tag {
        PlatformTag::Linux | PlatformTag::Cygwin => meminfo_mem(probe),
        PlatformTag::MacOs => macos_mem(probe),
        PlatformTag::FreeBsd | PlatformTag::DragonFlyBsd => freebsd_mem(probe),
        // No portable free-page sysctl on these two; report the physical total
        PlatformTag::NetBsd | PlatformTag::OpenBsd => probe
            .run(&["sysctl", "-n", "hw.physmem"])
            .ok()
            .and_then(|total| total.trim().parse::<u64>().ok())
            .map(|bytes| format!("{}MB", bytes / (1024 * 1024))),
        _ => None,
    };

    mem.unwrap_or_else(|| UNKNOWN.to_string())
}

fn meminfo_mem(probe: &dyn Probe) -> Option<String> {
    let contents = probe.read_file("/proc/meminfo").ok()?;

    let mut total = None;
    let mut available = None;
    let mut free = 0u64;
    let mut buffers = 0u64;
    let mut cached = 0u64;

    for line in contents.lines() {
        if line.starts_with("MemTotal:") {
            total = meminfo_line_mb(line);
        } else if line.starts_with("MemAvailable:") {
            available = meminfo_line_mb(line);
        } else if line.starts_with("MemFree:") {
            free = meminfo_line_mb(line).unwrap_or(0);
        } else if line.starts_with("Buffers:") {
            buffers = meminfo_line_mb(line).unwrap_or(0);
        } else if line.starts_with("Cached:") {
            cached = meminfo_line_mb(line).unwrap_or(0);
        }
    }

    let total = total?;
    let available = available.unwrap_or(free + buffers + cached);
    let used = total.saturating_sub(available);
    Some(format!("{}MB / {}MB", used, total))
}

fn macos_mem(probe: &dyn Probe) -> Option<String> {
    let total_bytes: u64 = probe
        .run(&["sysctl", "-n", "hw.memsize"])
        .ok()?
        .trim()
        .parse()
        .ok()?;

    let vm_stat = probe.run(&["vm_stat"]).ok()?;
    let free_pages: u64 = vm_stat
        .lines()
        .find(|line| line.starts_with("Pages free"))?
        .split(':')
        .nth(1)?
        .trim()
        .trim_end_matches('.')
        .parse()
        .ok()?;

    let total_mb = total_bytes / (1024 * 1024);
    let free_mb = free_pages * 4096 / (1024 * 1024);
    Some(format!("{}MB / {}MB", total_mb.saturating_sub(free_mb), total_mb))
}

fn freebsd_mem(probe: &dyn Probe) -> Option<String> {
    let total_bytes: u64 = probe
        .run(&["sysctl", "-n", "hw.physmem"])
        .ok()?
        .trim()
        .parse()
        .ok()?;
    let page_size: u64 = probe
        .run(&["sysctl", "-n", "hw.pagesize"])
        .ok()?
        .trim()
        .parse()
        .ok()?;
    let free_pages: u64 = probe
        .run(&["sysctl", "-n", "vm.stats.vm.v_free_count"])
        .ok()?
        .trim()
        .parse()
        .ok()?;

    let total_mb = total_bytes / (1024 * 1024);
    let free_mb = free_pages * page_size / (1024 * 1024);
    Some(format!("{}MB / {}MB", total_mb.saturating_sub(free_mb), total_mb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::fake::FakeProbe;

    #[test]
    fn cpu_takes_first_model_name_entry() {
        let cpuinfo = "processor\t: 0\nmodel name\t: AMD Ryzen 7 5800X  8-Core\n\
                       processor\t: 1\nmodel name\t: something else\n";
        let probe = FakeProbe::new().with_file("/proc/cpuinfo", cpuinfo);
        assert_eq!(
            detect_cpu(&probe, PlatformTag::Linux),
            "AMD Ryzen 7 5800X 8-Core"
        );
    }

    #[test]
    fn cpu_on_macos_uses_sysctl() {
        let probe = FakeProbe::new()
            .with_command(&["sysctl", "-n", "machdep.cpu.brand_string"], "Apple M2 Pro");
        assert_eq!(detect_cpu(&probe, PlatformTag::MacOs), "Apple M2 Pro");
    }

    #[test]
    fn gpu_vendor_table_first_match_wins() {
        let lspci = "00:1f.0 ISA bridge: Intel Corporation Z690 Chipset\n\
             01:00.0 VGA compatible controller: NVIDIA Corporation GA104 [GeForce RTX 3070] (rev a1)\n";
        let probe = FakeProbe::new().with_command(&["lspci"], lspci);
        assert_eq!(
            detect_gpu(&probe, PlatformTag::Linux),
            "NVIDIA GeForce RTX 3070"
        );
    }

    #[test]
    fn gpu_amd_bracket_model() {
        let lspci = "03:00.0 VGA compatible controller: Advanced Micro Devices, Inc. [AMD/ATI] Navi 32 [Radeon RX 7800 XT] (rev c8)\n";
        let probe = FakeProbe::new().with_command(&["lspci"], lspci);
        assert_eq!(
            detect_gpu(&probe, PlatformTag::Linux),
            "AMD Radeon RX 7800 XT"
        );
    }

    #[test]
    fn gpu_macos_chipset_model() {
        let report = "Graphics/Displays:\n\n    Apple M2 Pro:\n\n      Chipset Model: Apple M2 Pro\n      Type: GPU\n";
        let probe = FakeProbe::new().with_command(&["system_profiler", "SPDisplaysDataType"], report);
        assert_eq!(detect_gpu(&probe, PlatformTag::MacOs), "Apple M2 Pro");
    }

    #[test]
    fn disk_computes_percentage() {
        let df = "Filesystem     1024-blocks     Used Available Capacity Mounted on\n\
                  /dev/nvme0n1p2   104857600 31457280  73400320      30% /\n";
        let probe = FakeProbe::new().with_command(&["df", "-P", "-k", "/"], df);
        assert_eq!(
            detect_disk(&probe, PlatformTag::Linux),
            "30.0G / 100.0G (30%)"
        );
    }

    #[test]
    fn memory_uses_total_minus_free() {
        // total 8000MB, free 3000MB and no MemAvailable: used must be 5000MB
        let meminfo = "MemTotal:        8192000 kB\nMemFree:         3072000 kB\n\
                       Buffers:               0 kB\nCached:                0 kB\n";
        let probe = FakeProbe::new().with_file("/proc/meminfo", meminfo);
        assert_eq!(detect_mem(&probe, PlatformTag::Linux), "5000MB / 8000MB");
    }

    #[test]
    fn memory_prefers_mem_available() {
        let meminfo = "MemTotal:        8192000 kB\nMemFree:         1024000 kB\n\
                       MemAvailable:    4096000 kB\nBuffers:          512000 kB\n";
        let probe = FakeProbe::new().with_file("/proc/meminfo", meminfo);
        assert_eq!(detect_mem(&probe, PlatformTag::Linux), "4000MB / 8000MB");
    }

    #[test]
    fn all_sentinels_on_failing_probe() {
        let probe = FakeProbe::failing();
        for tag in PlatformTag::ALL {
            for value in [
                detect_cpu(&probe, tag),
                detect_gpu(&probe, tag),
                detect_disk(&probe, tag),
                detect_mem(&probe, tag),
            ] {
                assert_eq!(value, UNKNOWN);
            }
        }
    }
}
