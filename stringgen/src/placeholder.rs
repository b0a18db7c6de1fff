//! Placeholder detection for catalog values.
//!
//! Decides whether an entry needs a formatting accessor instead of a plain
//! `LocalizedStringKey` constant.

use std::{fmt, str::FromStr};

use crate::error::Error;

/// The literal marker for an object substitution in Apple format strings.
pub const OBJECT_MARKER: &str = "%@";

/// Which placeholders turn an entry into a formatting accessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderMode {
    /// Only the literal `%@` marker.
    #[default]
    Object,
    /// Any printf-style specifier (`%@`, `%d`, `%1$@`, `%lld`, ...). Escaped `%%` is ignored.
    Any,
}

impl PlaceholderMode {
    pub fn matches(self, value: &str) -> bool {
        match self {
            PlaceholderMode::Object => value.contains(OBJECT_MARKER),
            PlaceholderMode::Any => !extract_placeholders(value).is_empty(),
        }
    }
}

impl fmt::Display for PlaceholderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderMode::Object => write!(f, "object"),
            PlaceholderMode::Any => write!(f, "any"),
        }
    }
}

impl FromStr for PlaceholderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "object" => Ok(PlaceholderMode::Object),
            "any" => Ok(PlaceholderMode::Any),
            _ => Err(Error::UnknownPlaceholderMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    pub index: Option<usize>,
    pub kind: char,
}

/// Extracts printf-style placeholder tokens in occurrence order, skipping `%%`.
pub fn extract_placeholders(input: &str) -> Vec<PlaceholderToken> {
    let bytes = input.as_bytes();
    let mut i = 0;
    let mut out = Vec::new();

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        if i + 1 < bytes.len() && bytes[i + 1] == b'%' {
            i += 2;
            continue;
        }

        let mut j = i + 1;

        // Optional positional index: digits followed by '$'
        let mut index = None;
        let start_digits = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j < bytes.len() && j > start_digits && bytes[j] == b'$' {
            index = input[start_digits..j].parse::<usize>().ok();
            j += 1;
        } else {
            j = i + 1;
        }

        // Length modifiers (l, ll, h, hh, q, z, t, j)
        while j < bytes.len() && matches!(bytes[j], b'l' | b'h' | b'q' | b'z' | b't' | b'j') {
            j += 1;
        }

        if j < bytes.len() {
            let ch = bytes[j] as char;
            if is_conversion(ch) {
                out.push(PlaceholderToken { index, kind: ch });
                i = j + 1;
                continue;
            }
        }

        i += 1;
    }

    out
}

fn is_conversion(ch: char) -> bool {
    matches!(
        ch,
        '@' | 'd' | 'D' | 'i' | 'u' | 'U' | 'x' | 'X' | 'o' | 'O' | 'f' | 'F' | 'e' | 'E'
            | 'g' | 'G' | 'c' | 'C' | 's' | 'S' | 'p' | 'a' | 'A'
    )
}
