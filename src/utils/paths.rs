use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Decodes a project directory name back to the file system path it encodes.
///
/// Project directories under the repair root carry a leading hyphen and a
/// percent-encoded absolute path. Used for display only.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use jsonl_repair::utils::decode_path;
///
/// let encoded = "-Users%2Ffoo%2Fbar";
/// assert_eq!(decode_path(encoded), PathBuf::from("/Users/foo/bar"));
/// ```
pub fn decode_path(encoded: &str) -> PathBuf {
    // Remove leading hyphen
    let without_prefix = encoded.strip_prefix('-').unwrap_or(encoded);

    // Percent-decode the string (avoiding double allocation)
    let decoded = percent_decode_str(without_prefix).decode_utf8_lossy();
    let decoded_str = match decoded {
        Cow::Borrowed(s) => s,
        Cow::Owned(ref s) => s.as_str(),
    };

    // Add back the leading slash for absolute paths
    PathBuf::from(format!("/{}", decoded_str))
}

/// Formats a path with ~ substitution for the home directory.
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    // Avoid double allocation when converting Cow to String
    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Anything else comes back unchanged, including paths where `~` is not the
/// first component.
pub fn expand_tilde(input: &str) -> PathBuf {
    if input == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if let Some(rest) = input.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(input)
}

/// Truncates a long name for display, keeping the tail.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    let count = name.chars().count();
    if count <= max_chars {
        return name.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let tail: String = name.chars().skip(count - keep).collect();
    format!("...{tail}")
}
