//! Relative address resolution

/// Marker after which an address carries a nested callback address
const CALLBACK_MARKER: &str = "callback=";

/// Resolve `address` against `base`.
///
/// Addresses without a `.` or with a `:` (absolute or external) are returned
/// unchanged. `..` pops a segment, pulling in the base segments on the first
/// underflow; `.` stands for the base itself. A `callback=` target is
/// resolved on its own while the text up to the marker is kept verbatim.
#[must_use]
pub fn resolve_address(base: Option<&str>, address: &str) -> String {
    if !address.contains('.') || address.contains(':') {
        return address.to_string();
    }

    if let Some(index) = address.find(CALLBACK_MARKER) {
        let (prefix, target) = address.split_at(index + CALLBACK_MARKER.len());
        return format!("{prefix}{}", resolve_address(base, target));
    }

    let base = base.map_or("", strip_query).trim_end_matches('/');

    let mut segments: Vec<&str> = Vec::new();
    let mut base_pulled = false;
    for segment in address.split('/') {
        match segment {
            ".." => {
                if segments.is_empty() && !base_pulled {
                    base_pulled = true;
                    segments.extend(base.split('/').filter(|s| !s.is_empty()));
                }
                segments.pop();
            }
            "." => segments.push(""),
            other => segments.push(other),
        }
    }

    let rooted = segments.first().is_some_and(|first| first.is_empty());
    let mut resolved = segments.join("/");
    while resolved.contains("//") {
        resolved = resolved.replace("//", "/");
    }

    if rooted {
        format!("{base}{resolved}")
    } else {
        resolved
    }
}

/// Address without its query string
#[must_use]
pub fn strip_query(address: &str) -> &str {
    address.split_once('?').map_or(address, |(path, _)| path)
}
