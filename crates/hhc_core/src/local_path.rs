use std::path::{Component, Path, PathBuf};

use url::Url;

/// Turn a `Local` param value into an href usable from the source directory.
///
/// URLs and absolute paths are kept. A relative path is joined onto
/// `source_dir`, normalized, and re-expressed relative to `source_dir`; when
/// that is impossible (it escapes the directory, or normalizes to nothing) the
/// raw value is returned.
pub fn resolve_local(raw: &str, source_dir: &Path) -> String {
    if is_url(raw) {
        return raw.to_string();
    }
    let slashed = raw.replace('\\', "/");
    let local = Path::new(&slashed);
    if local.is_absolute() {
        return slashed;
    }

    let relative = normalize_lexically(source_dir).and_then(|base| {
        let joined = normalize_lexically(&base.join(local))?;
        joined.strip_prefix(&base).ok().map(Path::to_path_buf)
    });

    match relative {
        Some(rel) if rel.components().next().is_some() => to_href(&rel),
        _ => raw.to_string(),
    }
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// Returns `None` when a `..` would climb above the start of the path.
fn normalize_lexically(path: &Path) -> Option<PathBuf> {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                _ => return None,
            },
            other => parts.push(other),
        }
    }
    Some(parts.into_iter().collect())
}

// Single-letter schemes are Windows drive letters, not URLs.
fn is_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| url.scheme().len() > 1)
}

fn to_href(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
