//! Quoted-string literals.
//!
//! A text value renders as a double-quoted literal in which `"`, `\` and
//! every control character (code point < 0x20) appear as a `\u%04x` escape.
//! All other code points, including non-ASCII, pass through unchanged.

use crate::error::DecodeError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Appends the quoted form of `text` to `out`.
///
/// Infallible: `&str` is UTF-8 by construction, and every code point has a
/// defined output.
pub fn quote_into(text: &str, out: &mut String) {
    out.push('"');
    for c in text.chars() {
        if c < '\u{20}' || c == '"' || c == '\\' {
            push_escape(out, c as u32);
        } else {
            out.push(c);
        }
    }
    out.push('"');
}

/// Returns the quoted form of `text`.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    quote_into(text, &mut out);
    out
}

/// Escaped code points are all below 0x80, so four hex digits suffice.
fn push_escape(out: &mut String, value: u32) {
    out.push('\\');
    out.push('u');
    for shift in [12, 8, 4, 0] {
        out.push(HEX_DIGITS[((value >> shift) & 0xF) as usize] as char);
    }
}

/// Decodes a quoted literal back to its text value.
///
/// Accepts exactly what [`quote`] produces, plus `\uXXXX` escapes for code
/// points that the encoder leaves unescaped.
pub fn unquote(literal: &str) -> Result<String, DecodeError> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(DecodeError::MissingQuotes)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.char_indices();
    while let Some((at, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some((_, 'u')) => {}
            Some(_) => return Err(DecodeError::InvalidEscape { at }),
            None => return Err(DecodeError::TruncatedEscape { at }),
        }
        let mut value: u32 = 0;
        for _ in 0..4 {
            let digit = match chars.next() {
                Some((_, d)) => d
                    .to_digit(16)
                    .ok_or(DecodeError::InvalidEscape { at })?,
                None => return Err(DecodeError::TruncatedEscape { at }),
            };
            value = (value << 4) | digit;
        }
        let decoded = char::from_u32(value).ok_or(DecodeError::EscapeNotScalar { at, value })?;
        out.push(decoded);
    }
    Ok(out)
}
