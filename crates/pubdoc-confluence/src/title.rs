//! Page titles derived from file paths.

/// Derive a page title from a file path.
///
/// Takes the base name and strips its final extension (from the last `.` to
/// the end). Only the last extension goes, so `a.b.c.txt` becomes `a.b.c`.
/// Names without an extension are returned unchanged.
///
/// # Examples
///
/// ```
/// use pubdoc_confluence::format_title;
///
/// assert_eq!(format_title("docs/README.md"), "README");
/// assert_eq!(format_title("a.b.c.txt"), "a.b.c");
/// assert_eq!(format_title("CHANGELOG"), "CHANGELOG");
/// assert_eq!(format_title(""), "");
/// ```
#[must_use]
pub fn format_title(path: &str) -> String {
    let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match base.rfind('.') {
        Some(dot) => base[..dot].to_owned(),
        None => base.to_owned(),
    }
}
