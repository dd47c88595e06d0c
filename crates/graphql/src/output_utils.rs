pub(crate) const GREEN_CHECK: &str = "✅";
pub(crate) const RED_X: &str = "❌";

/// `"1 file"`, `"2 files"`, ...
pub(crate) fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
