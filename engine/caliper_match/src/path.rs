//! The path accumulator.
//!
//! Builds the human-readable accessor chain carried by failures:
//! `foo[1].bar`, `[1231]`, `["return"]`. The root is the empty string, and
//! every recursion derives a fresh child path, so no path state is shared
//! between branches of a match.

/// Extend `parent` with an array index.
pub(crate) fn extend_index(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Extend `parent` with an object key, choosing dot, numeric-bracket, or
/// quoted-bracket form.
pub(crate) fn extend_key(parent: &str, key: &str) -> String {
    if is_numeric(key) {
        return format!("{parent}[{key}]");
    }
    if is_unquoted_identifier(key) && !is_reserved_word(key) {
        return if parent.is_empty() {
            key.to_string()
        } else {
            format!("{parent}.{key}")
        };
    }
    let mut path = String::with_capacity(parent.len() + key.len() + 4);
    path.push_str(parent);
    path.push_str("[\"");
    for c in key.chars() {
        match c {
            '\\' => path.push_str("\\\\"),
            '"' => path.push_str("\\\""),
            '\n' => path.push_str("\\n"),
            '\r' => path.push_str("\\r"),
            '\t' => path.push_str("\\t"),
            c => path.push(c),
        }
    }
    path.push_str("\"]");
    path
}

/// Purely-numeric keys render bracketed but unquoted.
fn is_numeric(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

fn is_unquoted_identifier(key: &str) -> bool {
    let mut bytes = key.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' || b == b'$' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
}

/// Keywords of the accessor syntax the paths imitate; these keys take the
/// quoted-bracket form even though they scan as identifiers.
fn is_reserved_word(key: &str) -> bool {
    matches!(
        key,
        "await"
            | "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "enum"
            | "export"
            | "extends"
            | "false"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "implements"
            | "import"
            | "in"
            | "instanceof"
            | "interface"
            | "let"
            | "new"
            | "null"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "return"
            | "static"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "true"
            | "try"
            | "typeof"
            | "var"
            | "void"
            | "while"
            | "with"
            | "yield"
    )
}

#[cfg(test)]
mod tests;
