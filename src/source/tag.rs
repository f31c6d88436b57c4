//! Go struct tag reading
//!
//! A tag is the literal after a field's type: `` `gorm:"column:id" json:"id"` ``.
//! Lookup follows Go's `reflect.StructTag` convention: space separated
//! `key:"value"` pairs, values quoted with Go string escapes. Anything
//! malformed ends the scan, so keys after the defect are reported absent.

/// A struct tag with its literal delimiters removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructTag(String);

impl StructTag {
    /// Build a tag from the field's tag literal as written in source
    ///
    /// Raw literals (backticks) are taken verbatim; interpreted literals
    /// (double quotes) are unescaped first. Returns `None` for a literal that
    /// is neither.
    pub fn from_literal(literal: &str) -> Option<Self> {
        if let Some(raw) = literal
            .strip_prefix('`')
            .and_then(|s| s.strip_suffix('`'))
        {
            return Some(Self(raw.to_string()));
        }
        if literal.len() >= 2 && literal.starts_with('"') && literal.ends_with('"') {
            return unquote(literal).map(Self);
        }
        None
    }

    /// Tag content without delimiters
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value stored under `key`, if present and well formed
    pub fn get(&self, key: &str) -> Option<String> {
        let mut tag = self.0.as_str();
        loop {
            tag = tag.trim_start_matches(' ');
            if tag.is_empty() {
                return None;
            }

            let name_len = tag
                .bytes()
                .take_while(|&b| b > b' ' && b != b':' && b != b'"' && b != 0x7f)
                .count();
            let rest = &tag[name_len..];
            if name_len == 0 || !rest.starts_with(":\"") {
                return None;
            }
            let name = &tag[..name_len];
            let quoted = &rest[1..];

            let bytes = quoted.as_bytes();
            let mut i = 1;
            while i < bytes.len() && bytes[i] != b'"' {
                if bytes[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= bytes.len() {
                return None;
            }

            let value = &quoted[..=i];
            if name == key {
                return unquote(value);
            }
            tag = &quoted[i + 1..];
        }
    }
}

/// Decode a double-quoted Go string literal
///
/// Supports every escape Go allows in interpreted strings: `\a \b \f \n \r
/// \t \v \\ \"`, `\xHH`, three-digit octal `\NNN`, `\uXXXX` and
/// `\UXXXXXXXX`. `\'` is a rune-only escape and is rejected like Go does.
/// Byte escapes must combine into valid UTF-8.
fn unquote(quoted: &str) -> Option<String> {
    let body = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return None,
            '\\' => {
                let escape = chars.next()?;
                match escape {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => out.push(u8::try_from(digits(&mut chars, 16, 2)?).ok()?),
                    '0'..='7' => {
                        let high = escape.to_digit(8)?;
                        let value = high * 64 + digits(&mut chars, 8, 2)?;
                        out.push(u8::try_from(value).ok()?);
                    }
                    'u' => push_char(&mut out, digits(&mut chars, 16, 4)?)?,
                    'U' => push_char(&mut out, digits(&mut chars, 16, 8)?)?,
                    _ => return None,
                }
            }
            c => push_char(&mut out, u32::from(c))?,
        }
    }
    String::from_utf8(out).ok()
}

/// Read exactly `count` digits in `radix`
fn digits(chars: &mut std::str::Chars<'_>, radix: u32, count: usize) -> Option<u32> {
    (0..count).try_fold(0u32, |acc, _| {
        let digit = chars.next()?.to_digit(radix)?;
        acc.checked_mul(radix)?.checked_add(digit)
    })
}

fn push_char(out: &mut Vec<u8>, code: u32) -> Option<()> {
    let c = char::from_u32(code)?;
    out.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes());
    Some(())
}
