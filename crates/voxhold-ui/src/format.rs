/// Formats a recording duration as `mm:ss`. Minutes are not wrapped.
pub fn format_duration(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
