pub const ONE_KB: u64 = 1024;
pub const ONE_MB: u64 = ONE_KB * ONE_KB;
pub const ONE_GB: u64 = ONE_KB * ONE_MB;
pub const ONE_TB: u64 = ONE_KB * ONE_GB;
pub const ONE_PB: u64 = ONE_KB * ONE_TB;
pub const ONE_EB: u64 = ONE_KB * ONE_PB;

const UNITS: [(u64, &str); 6] = [
    (ONE_EB, "EB"),
    (ONE_PB, "PB"),
    (ONE_TB, "TB"),
    (ONE_GB, "GB"),
    (ONE_MB, "MB"),
    (ONE_KB, "KB"),
];

/// Formats a byte count using the largest unit that fits at least once.
///
/// The value is rounded down to a whole unit, so `1_999_999` bytes is
/// `"1 MB"`.
pub fn byte_count_to_display_size(size: u64) -> String {
    UNITS
        .iter()
        .find(|(unit, _)| size / unit > 0)
        .map(|(unit, name)| format!("{} {}", size / unit, name))
        .unwrap_or_else(|| format!("{size} bytes"))
}
