//! Clock formatting for display layers.

/// `MM:SS`, zero-padded, for the big phase countdown.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `M:SS` for the running total.
pub fn format_total(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats() {
        assert_eq!(format_clock(45), "00:45");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_total(5), "0:05");
        assert_eq!(format_total(754), "12:34");
    }
}
