//! Human readable file sizes.

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count the way the preview cards display it.
///
/// Below 1 KB the exact count is shown, otherwise two decimals in KB or MB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(MIB - 1), "1024.00 KB");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(format_file_size(1_048_576), "1.00 MB");
        assert_eq!(format_file_size(16 * MIB), "16.00 MB");
    }
}
