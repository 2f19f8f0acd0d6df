//! Active-link matching.

/// Whether the link to `href` is active at `pathname`.
///
/// Case-sensitive like the router, tolerant of a trailing slash. A link is active on an exact
/// match or when `pathname` continues below it at a segment boundary, so the
/// root link is only active on `/` itself.
pub fn is_active_route(pathname: &str, href: &str) -> bool {
    let path = normalize(pathname);
    let to = normalize(href);

    if path == to {
        return true;
    }
    path.strip_prefix(to.as_str())
        .is_some_and(|rest| rest.starts_with('/'))
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
