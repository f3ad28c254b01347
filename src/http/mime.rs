//! Extension to content-type lookup.

/// Content type for anything not in [`MIME_TYPES`], including paths with no
/// extension.
pub const OCTET_STREAM: &str = "application/octet-stream";

pub const TEXT_HTML: &str = "text/html";

/// Known extensions, without the dot. Matched case-sensitively.
pub const MIME_TYPES: &[(&str, &str)] = &[
    ("html", TEXT_HTML),
    ("css", "text/css"),
    ("png", "image/png"),
    ("jpg", "image/jpg"),
    ("gif", "image/gif"),
];

/// Everything after the last `.` in `path`, or `""` when there is no dot.
///
/// Works on the request path as sent, so a dot in a directory name counts:
/// `/v1.2/readme` has the extension `2/readme`.
pub fn extension(path: &str) -> &str {
    path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

pub fn from_extension(ext: &str) -> &'static str {
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, content_type)| *content_type)
        .unwrap_or(OCTET_STREAM)
}

pub fn from_path(path: &str) -> &'static str {
    from_extension(extension(path))
}
