//! Swift identifier and literal helpers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SWIFT_IDENTIFIER: Regex =
        Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").unwrap();
    static ref IDENTIFIER_START: Regex = Regex::new(r"^[\p{XID_Start}_]").unwrap();
    static ref INVALID_IDENTIFIER_CHARS: Regex = Regex::new(r"[^\p{XID_Continue}]").unwrap();
}

/// Words that must be escaped with backticks when used as a declaration name.
const SWIFT_KEYWORDS: &[&str] = &[
    "Any", "Protocol", "Self", "Type", "as", "associatedtype", "await", "break", "case", "catch",
    "class", "continue", "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough",
    "false", "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout",
    "internal", "is", "let", "nil", "open", "operator", "precedencegroup", "private",
    "protocol", "public", "repeat", "rethrows", "return", "self", "static", "struct",
    "subscript", "super", "switch", "throw", "throws", "true", "try", "typealias", "var",
    "where", "while",
];

/// Turns a catalog key into a usable Swift declaration name.
///
/// Valid identifiers pass through untouched, keywords get backticks, and anything
/// else has invalid characters replaced by `_` (with a `_` prefix when it cannot
/// start an identifier, e.g. a leading digit).
pub fn swift_identifier(key: &str) -> String {
    if SWIFT_IDENTIFIER.is_match(key) {
        if key == "_" {
            return "__".to_string();
        }
        if SWIFT_KEYWORDS.contains(&key) {
            return format!("`{}`", key);
        }
        return key.to_string();
    }

    let mut ident = INVALID_IDENTIFIER_CHARS.replace_all(key, "_").into_owned();
    if !IDENTIFIER_START.is_match(&ident) {
        ident.insert(0, '_');
    }
    if ident == "_" {
        ident.push('_');
    }
    ident
}

/// Escapes a value for use inside a Swift `"..."` literal.
pub fn swift_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out
}

/// Keeps a translated value on a single `//` comment line.
pub fn comment_text(value: &str) -> String {
    value
        .replace('\r', "\\r")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers_pass_through() {
        assert_eq!(swift_identifier("common_Retry"), "common_Retry");
        assert_eq!(swift_identifier("_private"), "_private");
        assert_eq!(swift_identifier("title2"), "title2");
    }

    #[test]
    fn test_keywords_are_backticked() {
        assert_eq!(swift_identifier("default"), "`default`");
        assert_eq!(swift_identifier("self"), "`self`");
        assert_eq!(swift_identifier("Default"), "Default");
        assert_eq!(swift_identifier("Type"), "`Type`");
        assert_eq!(swift_identifier("Protocol"), "`Protocol`");
    }

    #[test]
    fn test_unicode_identifiers_pass_through() {
        assert_eq!(swift_identifier("café"), "café");
        assert_eq!(swift_identifier("größe_label"), "größe_label");
        assert_eq!(swift_identifier("日本語"), "日本語");
        assert_ne!(swift_identifier("café"), swift_identifier("caf_"));
        assert_eq!(swift_identifier("café au lait"), "café_au_lait");
    }

    #[test]
    fn test_invalid_keys_are_sanitized() {
        assert_eq!(swift_identifier("Hello world"), "Hello_world");
        assert_eq!(swift_identifier("error.title"), "error_title");
        assert_eq!(swift_identifier("1st_place"), "_1st_place");
        assert_eq!(swift_identifier("%@ items"), "___items");
        assert_eq!(swift_identifier(""), "__");
        assert_eq!(swift_identifier("_"), "__");
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!(swift_string_literal("plain"), "plain");
        assert_eq!(swift_string_literal(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(swift_string_literal("a\\b"), "a\\\\b");
        assert_eq!(swift_string_literal("line\nbreak"), "line\\nbreak");
    }

    #[test]
    fn test_comment_text_stays_on_one_line() {
        assert_eq!(comment_text("one\ntwo"), "one\\ntwo");
        assert_eq!(comment_text("tab\there"), "tab\\there");
        assert!(!comment_text("a\r\nb").contains('\n'));
    }
}
