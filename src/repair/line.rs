use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::models::{DropReason, RepairOutcome};

static COMMA_BEFORE_BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*\}").unwrap());
static COMMA_BEFORE_BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*\]").unwrap());
static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\x00-\x1F]").unwrap());

/// One text-level repair step. Returns the rewritten line, or `None` when the
/// step does not apply to the current candidate.
type Transform = fn(&str) -> Option<String>;

/// Ordered repair steps, most specific first. Applied cumulatively: each step
/// sees the output of every step before it, and a parse is attempted after
/// every step that changed the line.
const TRANSFORMS: &[Transform] = &[
    close_truncated_string,
    close_truncated_object,
    close_truncated_array,
    close_truncated_array_in_string,
    drop_comma_before_brace,
    drop_comma_before_bracket,
    strip_control_chars,
];

/// Run one raw line through the repair chain.
///
/// Tries, in strict order: a verbatim parse, the cumulative text transforms,
/// then extraction of a balanced object prefix. The first strategy that yields
/// valid JSON wins; a clean parse returns [`RepairOutcome::Parsed`], anything
/// that needed help returns [`RepairOutcome::Fixed`].
pub fn repair_line(raw: &str) -> RepairOutcome {
    let line = raw.trim();
    if line.is_empty() {
        return RepairOutcome::Unrecoverable(DropReason::Empty);
    }

    if let Ok(record) = serde_json::from_str::<Value>(line) {
        return RepairOutcome::Parsed(record);
    }

    let mut candidate = line.to_string();
    for transform in TRANSFORMS {
        if let Some(next) = transform(&candidate) {
            candidate = next;
            if let Ok(record) = serde_json::from_str::<Value>(&candidate) {
                return RepairOutcome::Fixed(record);
            }
        }
    }

    // Last resort: the line may be a valid object followed by garbage,
    // e.g. two records flushed onto one line. Keep the first object,
    // discard the rest.
    if let Some(prefix) = balanced_object_prefix(line)
        && let Ok(record) = serde_json::from_str::<Value>(prefix)
    {
        return RepairOutcome::Fixed(record);
    }

    RepairOutcome::Unrecoverable(DropReason::Unfixable)
}

fn quote_count_is_odd(s: &str) -> bool {
    s.bytes().filter(|&b| b == b'"').count() % 2 == 1
}

fn has_unclosed(s: &str, open: u8, close: u8) -> bool {
    let mut opens = 0usize;
    let mut closes = 0usize;
    for b in s.bytes() {
        if b == open {
            opens += 1;
        } else if b == close {
            closes += 1;
        }
    }
    opens > closes
}

/// Odd number of quotes: assume truncation inside a string value, likely
/// right before a closing brace.
fn close_truncated_string(s: &str) -> Option<String> {
    quote_count_is_odd(s).then(|| format!("{s}\"}}"))
}

/// More `{` than `}`: assume truncation mid-object.
fn close_truncated_object(s: &str) -> Option<String> {
    has_unclosed(s, b'{', b'}').then(|| format!("{s}}}"))
}

/// More `[` than `]`: assume truncation mid-array inside an object.
fn close_truncated_array(s: &str) -> Option<String> {
    has_unclosed(s, b'[', b']').then(|| format!("{s}]}}"))
}

/// Unmatched `[` and an odd quote count together: truncation inside a string
/// inside an array.
fn close_truncated_array_in_string(s: &str) -> Option<String> {
    (has_unclosed(s, b'[', b']') && quote_count_is_odd(s)).then(|| format!("{s}]\"}}"))
}

/// Trailing comma immediately before a closing `}`.
fn drop_comma_before_brace(s: &str) -> Option<String> {
    COMMA_BEFORE_BRACE.is_match(s).then(|| COMMA_BEFORE_BRACE.replace_all(s, "}").into_owned())
}

/// Trailing comma immediately before a closing `]`.
fn drop_comma_before_bracket(s: &str) -> Option<String> {
    COMMA_BEFORE_BRACKET.is_match(s).then(|| COMMA_BEFORE_BRACKET.replace_all(s, "]").into_owned())
}

/// Raw bytes in the ASCII control range are never valid inside JSON text.
fn strip_control_chars(s: &str) -> Option<String> {
    CONTROL_CHARS.is_match(s).then(|| CONTROL_CHARS.replace_all(s, "").into_owned())
}

/// Longest balanced `{...}` prefix starting at the first `{`.
///
/// Tracks string and escape state so braces inside string values don't count
/// toward nesting depth. Returns `None` when the braces never balance.
fn balanced_object_prefix(line: &str) -> Option<&str> {
    let start = line.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in line.bytes().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&line[start..=i]);
                }
            }
            _ => {}
        }
    }

    None
}
