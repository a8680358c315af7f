//! crates/steadylog/src/path.rs
//! Source path shortening for the trailing location annotation.

/// Returns the final `/`-separated segment of `path`.
///
/// Paths without a separator are returned unchanged. A trailing separator
/// yields the empty string because nothing follows it. The scan touches each
/// byte once and never allocates, so the helper can run in constant contexts:
///
/// ```
/// use steadylog::strip_path;
///
/// const NAME: &str = strip_path("crates/steadylog/src/emitter.rs");
/// assert_eq!(NAME, "emitter.rs");
/// assert_eq!(strip_path("main.rs"), "main.rs");
/// ```
#[must_use]
pub const fn strip_path(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'/' {
            start = index + 1;
        }
        index += 1;
    }
    // `/` is ASCII, so the byte after it always starts a char.
    path.split_at(start).1
}
