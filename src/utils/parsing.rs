//! String parsing utilities

/// Break a seconds-since-boot reading into calendar units.
///
/// The identity `days*86400 + hours*3600 + minutes*60 + seconds ==
/// floor(total)` always holds; the caller guarantees a non-negative,
/// finite input.
pub fn decompose_uptime(total: f64) -> (u64, u64, u64, u64) {
    let total = total as u64;
    let days = total / 86400;
    let mut rem = total % 86400;
    let hours = rem / 3600;
    rem %= 3600;
    let minutes = rem / 60;
    let seconds = rem % 60;
    (days, hours, minutes, seconds)
}

/// Format uptime from seconds, omitting empty leading units
pub fn format_uptime(total: f64) -> String {
    let (days, hours, minutes, seconds) = decompose_uptime(total);
    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split(':')
        .nth(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a `Key:  12345 kB` meminfo-style line into whole megabytes.
pub fn meminfo_line_mb(line: &str) -> Option<u64> {
    line.split(':')
        .nth(1)?
        .trim()
        .trim_end_matches(" kB")
        .trim()
        .parse::<u64>()
        .ok()
        .map(|kb| kb / 1024)
}

/// Truncate a finalized fact value to at most `max` characters,
/// respecting char boundaries.
pub fn truncate_value(mut value: String, max: usize) -> String {
    if value.chars().count() > max {
        value = value.chars().take(max).collect();
    }
    value
}

/// Format a size given in KiB with a binary unit suffix.
pub fn format_kib(kib: u64) -> String {
    let bytes = kib * 1024;
    if bytes >= 1 << 40 {
        format!("{:.1}T", bytes as f64 / (1u64 << 40) as f64)
    } else if bytes >= 1 << 30 {
        format!("{:.1}G", bytes as f64 / (1u64 << 30) as f64)
    } else if bytes >= 1 << 20 {
        format!("{:.1}M", bytes as f64 / (1u64 << 20) as f64)
    } else {
        format!("{}K", kib)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_known_values() {
        assert_eq!(decompose_uptime(0.0), (0, 0, 0, 0));
        assert_eq!(decompose_uptime(90061.0), (1, 1, 1, 1));
        assert_eq!(decompose_uptime(59.9), (0, 0, 0, 59));
        assert_eq!(decompose_uptime(86399.0), (0, 23, 59, 59));
    }

    #[test]
    fn decompose_recomposes_and_stays_in_range() {
        for &total in &[0.0, 1.0, 59.0, 60.0, 3599.5, 3600.0, 86400.0, 90061.0, 1234567.89] {
            let (d, h, m, s) = decompose_uptime(total);
            assert_eq!(d * 86400 + h * 3600 + m * 60 + s, total as u64);
            assert!(h < 24);
            assert!(m < 60);
            assert!(s < 60);
        }
    }

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(90061.0), "1d 1h 1m");
        assert_eq!(format_uptime(3660.0), "1h 01m");
        assert_eq!(format_uptime(75.0), "1m 15s");
        assert_eq!(format_uptime(5.0), "5s");
    }

    #[test]
    fn colon_extraction() {
        assert_eq!(
            extract_after_colon("model name\t: AMD Ryzen 7"),
            Some("AMD Ryzen 7".to_string())
        );
        assert_eq!(extract_after_colon("no colon here"), None);
        assert_eq!(extract_after_colon("empty:"), None);
    }

    #[test]
    fn meminfo_lines() {
        assert_eq!(meminfo_line_mb("MemTotal:        8192000 kB"), Some(8000));
        assert_eq!(meminfo_line_mb("MemTotal: garbage"), None);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "x".repeat(200);
        assert_eq!(truncate_value(long, 128).len(), 128);

        let multi = "é".repeat(200);
        let cut = truncate_value(multi, 128);
        assert_eq!(cut.chars().count(), 128);

        let short = "short".to_string();
        assert_eq!(truncate_value(short, 128), "short");
    }

    #[test]
    fn kib_formatting() {
        assert_eq!(format_kib(512), "512K");
        assert_eq!(format_kib(2048), "2.0M");
        assert_eq!(format_kib(3 * 1024 * 1024), "3.0G");
    }
}
