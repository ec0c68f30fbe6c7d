//! JSON-with-comments preprocessing
//!
//! Strips `//` and `/* */` comments plus trailing commas so the result can be
//! handed to `serde_json`. String literals are copied through untouched.

use crate::error::{PatchError, Result};

/// Strip comments and trailing commas from a JSONC document
pub fn strip(text: &str) -> Result<String> {
    let without_comments = strip_comments(text)?;
    Ok(strip_trailing_commas(&without_comments))
}

fn strip_comments(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                out.push(c);
                copy_string(&mut chars, &mut out)?;
            }
            '/' => match chars.peek() {
                Some('/') => {
                    // Keep the newline so line numbers in serde errors stay right
                    for next in chars.by_ref() {
                        if next == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut closed = false;
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if next == '\n' {
                            out.push('\n');
                        }
                        if prev == '*' && next == '/' {
                            closed = true;
                            break;
                        }
                        prev = next;
                    }
                    if !closed {
                        return Err(PatchError::InvalidJsonc(
                            "Unterminated block comment".to_string(),
                        ));
                    }
                    // A comment separates tokens
                    out.push(' ');
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Copy the rest of a string literal (opening quote already consumed)
fn copy_string(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    out: &mut String,
) -> Result<()> {
    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '"' => return Ok(()),
            _ => {}
        }
    }

    Err(PatchError::InvalidJsonc(
        "Unterminated string literal".to_string(),
    ))
}

/// Remove commas that directly precede `}` or `]` (ignoring whitespace).
/// Input must already be comment-free.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' && i + 1 < chars.len() {
                out.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
            if !matches!(next, Some('}') | Some(']')) {
                out.push(c);
            }
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}
