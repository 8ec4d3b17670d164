//! Home route matching.

/// Match `/` or `/{locale}` with an optional trailing slash.
///
/// Returns the locale path parameter (if any) for a home path, or `None`
/// when the path belongs to another route. The parameter is not validated
/// here; the loader checks it against the request locale.
pub fn match_home_path(path: &str) -> Option<Option<&str>> {
    let path = path.split('?').next().unwrap_or_default();
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(None);
    }

    let segment = rest.strip_suffix('/').unwrap_or(rest);
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    Some(Some(segment))
}

/// Path prefix for links on a page served under `locale_param`.
pub fn link_base(locale_param: Option<&str>) -> String {
    locale_param
        .map(|locale| format!("/{}", locale.to_lowercase()))
        .unwrap_or_default()
}
