//! POSIX shell quoting and form encoding for reconstructed commands.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Make `s` safe inside single quotes: `'` becomes `'\''`.
pub fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', r"'\''")
}

/// Wrap `s` in single quotes.
pub fn single_quoted(s: &str) -> String {
    format!("'{}'", escape_single_quotes(s))
}

/// Whether `s` needs `$'...'` quoting to survive as a single argument.
pub fn needs_ansi_c(s: &str) -> bool {
    s.contains('\n') || s.contains('\r')
}

/// Wrap `s` in ANSI-C quotes, `$'...'`.
///
/// Backslashes are escaped before anything else so the escapes added for
/// quotes and line breaks are not doubled.
pub fn ansi_c_quoted(s: &str) -> String {
    let escaped = s
        .replace('\\', r"\\")
        .replace('\'', r"\'")
        .replace('\n', r"\n")
        .replace('\r', r"\r");
    format!("$'{}'", escaped)
}

/// Single quotes unless the text spans lines.
pub fn shell_quoted(s: &str) -> String {
    if needs_ansi_c(s) {
        ansi_c_quoted(s)
    } else {
        single_quoted(s)
    }
}

/// Percent-encode a form name or value.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}
