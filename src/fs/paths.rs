//! Pure path-string utilities for link planning.
//!
//! Nothing here touches the filesystem. Paths are treated as strings split on the
//! separator of a [`PathStyle`], so Windows-style plans can be built and tested on
//! any host.

use crate::types::PathStyle;

/// True when `path` is a bare filesystem root (`/`, `C:\`) or a drive designator (`C:`).
fn is_bare_root(path: &str, style: PathStyle) -> bool {
    let sep = style.separator();
    let trimmed = path.strip_suffix(sep).unwrap_or(path);
    match style {
        PathStyle::Posix => trimmed.is_empty(),
        PathStyle::Windows => {
            trimmed.is_empty() || (trimmed.len() == 2 && trimmed.ends_with(':'))
        }
    }
}

/// Strip exactly one trailing separator. A bare filesystem root keeps its separator.
#[must_use]
pub fn normalize_root(path: &str, style: PathStyle) -> String {
    match path.strip_suffix(style.separator()) {
        Some(stripped) if !is_bare_root(path, style) => stripped.to_string(),
        _ => path.to_string(),
    }
}

/// Split a path into segments on the style's separator. A trailing separator does not
/// produce an empty final segment.
#[must_use]
pub fn split_segments(path: &str, style: PathStyle) -> Vec<&str> {
    let sep = style.separator();
    path.strip_suffix(sep).unwrap_or(path).split(sep).collect()
}

#[must_use]
pub fn join_segments<S: AsRef<str>>(segments: &[S], style: PathStyle) -> String {
    let mut out = String::new();
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            out.push(style.separator());
        }
        out.push_str(seg.as_ref());
    }
    out
}

/// Join a child name onto a directory without doubling the separator.
#[must_use]
pub fn join(dir: &str, name: &str, style: PathStyle) -> String {
    let sep = style.separator();
    if dir.ends_with(sep) {
        format!("{dir}{name}")
    } else {
        format!("{dir}{sep}{name}")
    }
}

/// Last segment of `path`, used as the link name.
#[must_use]
pub fn last_segment(path: &str, style: PathStyle) -> &str {
    split_segments(path, style).last().copied().unwrap_or(path)
}

/// Relative path that addresses `target` from the directory `current`.
///
/// Common leading segments are consumed pairwise until the first mismatch; each
/// remaining `current` segment becomes `..`, followed by the remaining `target`
/// segments. Identical inputs yield the empty string.
#[must_use]
pub fn relative_target(current: &[&str], target: &[&str], style: PathStyle) -> String {
    let common = current
        .iter()
        .zip(target)
        .take_while(|(a, b)| a == b)
        .count();
    let mut parts: Vec<&str> = std::iter::repeat("..")
        .take(current.len() - common)
        .collect();
    parts.extend_from_slice(&target[common..]);
    join_segments(&parts, style)
}

/// Link target string for `source` placed inside `dest_dir`.
///
/// The source path is returned unchanged when relative links are disabled or the
/// two paths do not share a root segment (different drives, or a relative source).
#[must_use]
pub fn link_target(dest_dir: &str, source: &str, use_relative: bool, style: PathStyle) -> String {
    if !use_relative {
        return source.to_string();
    }
    let dest = split_segments(dest_dir, style);
    let src = split_segments(source, style);
    if dest.first() != src.first() {
        return source.to_string();
    }
    relative_target(&dest, &src, style)
}
