/// Shell-style expansion of a leading `~`, `$VAR` or `${VAR}` in user paths.
use std::path::{Path, PathBuf};

/// Expand a leading home or environment token, looking variables up through
/// `lookup`.
///
/// Paths without a leading token (and non-UTF-8 paths) are returned unchanged,
/// as are tokens naming an unset variable.
#[must_use]
pub fn expand_path_with(path: &Path, lookup: &dyn Fn(&str) -> Option<String>) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };

    let mut current = raw.to_owned();
    if let Some(expanded) = expand_home_prefix(&current, lookup) {
        current = expanded;
    }
    if let Some(expanded) = expand_env_prefix(&current, lookup) {
        current = expanded;
    }
    PathBuf::from(current)
}

fn expand_home_prefix(value: &str, lookup: &dyn Fn(&str) -> Option<String>) -> Option<String> {
    if value == "~" {
        return lookup("HOME");
    }

    let rest = value.strip_prefix("~/")?;
    let mut expanded = PathBuf::from(lookup("HOME")?);
    // Absolute `rest` would replace the home directory on push.
    expanded.push(rest.trim_start_matches('/'));
    Some(expanded.to_string_lossy().into_owned())
}

fn expand_env_prefix(value: &str, lookup: &dyn Fn(&str) -> Option<String>) -> Option<String> {
    if let Some(rest) = value.strip_prefix("${") {
        let end = rest.find('}')?;
        let var = &rest[..end];
        if var.is_empty() {
            return None;
        }
        let val = lookup(var)?;
        return Some(format!("{val}{}", &rest[end + 1..]));
    }

    let rest = value.strip_prefix('$')?;
    let len = rest
        .char_indices()
        .find(|&(_, ch)| ch != '_' && !ch.is_ascii_alphanumeric())
        .map_or(rest.len(), |(idx, _)| idx);
    if len == 0 {
        return None;
    }

    let (var, remainder) = rest.split_at(len);
    let val = lookup(var)?;
    Some(format!("{val}{remainder}"))
}
