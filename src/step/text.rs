//! Decoding of STEP string literals.
//!
//! Handles the control directives of ISO 10303-21 section 7.3.3:
//! `\X\hh` (ISO 8859-1 byte), `\X2\...\X0\` (UTF-16), `\X4\...\X0\` (UTF-32),
//! `\S\c` (upper half of the active code page) and `\P?\` page switches.
//! Bytes outside these directives are read as UTF-8, lossily.

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take, take_while_m_n};
use nom::combinator::{map, map_opt, value};
use nom::multi::{fold_many0, many0};
use nom::sequence::{delimited, preceded, tuple};
use nom::IResult;

/// Decode the raw bytes between the quotes of a string literal.
pub fn decode(raw: &[u8]) -> String {
    match fold_many0(piece, Decoder::default, Decoder::push)(raw) {
        Ok((_, decoder)) => decoder.finish(),
        Err(_) => String::from_utf8_lossy(raw).into_owned(),
    }
}

#[derive(Debug, Clone)]
enum Piece<'a> {
    Raw(&'a [u8]),
    Char(char),
    Text(String),
}

fn piece(input: &[u8]) -> IResult<&[u8], Piece<'_>> {
    alt((
        value(Piece::Char('\''), tag("''")),
        value(Piece::Char('\\'), tag("\\\\")),
        map(
            delimited(tag("\\X2\\"), many0(hex_unit(4)), tag("\\X0\\")),
            |units| {
                let wide: Vec<u16> = units.iter().map(|&u| u as u16).collect();
                Piece::Text(String::from_utf16_lossy(&wide))
            },
        ),
        map(
            delimited(tag("\\X4\\"), many0(hex_unit(8)), tag("\\X0\\")),
            |points| {
                Piece::Text(
                    points
                        .iter()
                        .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
                        .collect(),
                )
            },
        ),
        map(preceded(tag("\\X\\"), hex_unit(2)), |code| Piece::Char(char::from(code as u8))),
        map(preceded(tag("\\S\\"), take(1usize)), |c: &[u8]| {
            Piece::Char(char::from(c[0].wrapping_add(0x80)))
        }),
        // Code page switch; only ISO 8859-1 is mapped.
        value(Piece::Raw(b""), tuple((tag("\\P"), take(1usize), tag("\\")))),
        map(is_not("'\\"), Piece::Raw),
        // Unknown escapes pass through verbatim.
        map(take(1usize), Piece::Raw),
    ))(input)
}

fn hex_unit<'a>(width: usize) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], u32> {
    map_opt(
        take_while_m_n(width, width, |b: u8| b.is_ascii_hexdigit()),
        |digits: &[u8]| u32::from_str_radix(std::str::from_utf8(digits).ok()?, 16).ok(),
    )
}

/// Accumulates plain bytes so multi-byte UTF-8 sequences decode together.
#[derive(Default)]
struct Decoder {
    out: String,
    plain: Vec<u8>,
}

impl Decoder {
    fn push(mut self, piece: Piece<'_>) -> Self {
        match piece {
            Piece::Raw(bytes) => self.plain.extend_from_slice(bytes),
            Piece::Char(c) => {
                self.flush();
                self.out.push(c);
            }
            Piece::Text(text) => {
                self.flush();
                self.out.push_str(&text);
            }
        }
        self
    }

    fn flush(&mut self) {
        if !self.plain.is_empty() {
            self.out.push_str(&String::from_utf8_lossy(&self.plain));
            self.plain.clear();
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_quotes() {
        assert_eq!(decode(b"Level 1"), "Level 1");
        assert_eq!(decode(b"Owner''s floor"), "Owner's floor");
        assert_eq!(decode(b"a\\\\b"), "a\\b");
        assert_eq!(decode(b""), "");
    }

    #[test]
    fn test_extended_directives() {
        assert_eq!(decode(b"Erdgescho\\X\\DF"), "Erdgescho\u{df}");
        assert_eq!(decode(b"\\X2\\00C400D6\\X0\\bene"), "\u{c4}\u{d6}bene");
        assert_eq!(decode(b"\\X4\\0001F3E0\\X0\\"), "\u{1f3e0}");
        assert_eq!(decode(b"\\S\\D"), "\u{c4}");
        assert_eq!(decode(b"\\PA\\plain"), "plain");
    }

    #[test]
    fn test_raw_utf8_kept_together() {
        assert_eq!(decode("Geschoß 2".as_bytes()), "Geschoß 2");
    }

    #[test]
    fn test_unknown_escape_passes_through() {
        assert_eq!(decode(b"C:\\temp"), "C:\\temp");
        assert_eq!(decode(b"\\X2\\00C4"), "\\X2\\00C4");
    }
}
