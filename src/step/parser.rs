//! ISO 10303-21 (STEP physical file) parser.
//!
//! Built from nom combinators over bytes. Only the exchange structure is
//! decoded here; attribute meaning is left to [`super::schema`].

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_until, take_while, take_while1, take_while_m_n};
use nom::character::complete::{char, digit1, multispace1};
use nom::combinator::{cut, map, map_opt, opt, recognize, value, verify};
use nom::error::{context, VerboseError, VerboseErrorKind};
use nom::multi::{many0, many0_count, many1, separated_list0};
use nom::number::complete::recognize_float;
use nom::sequence::{delimited, pair, preceded, terminated};
use smallvec::{smallvec, SmallVec};

use super::entity::{Entity, Record};
use super::header::Header;
use super::text;
use super::value::Value;
use crate::util::{Error, Result};

const MAGIC: &str = "ISO-10303-21";
const END_MAGIC: &str = "END-ISO-10303-21";

/// Deepest parameter nesting (lists and typed values) accepted in one instance.
pub const MAX_DEPTH: usize = 64;

type Input<'a> = &'a [u8];
type PResult<'a, O> = nom::IResult<Input<'a>, O, VerboseError<Input<'a>>>;

/// Parsed exchange structure: header plus all data-section instances in file order.
#[derive(Debug)]
pub struct ExchangeFile {
    pub header: Header,
    pub entities: Vec<Entity>,
}

/// Parse a complete STEP file.
#[tracing::instrument(skip_all, fields(bytes = data.len()))]
pub fn parse(data: &[u8]) -> Result<ExchangeFile> {
    let (rest, (header_records, sections)) = exchange(data).map_err(|e| to_error(data, e))?;

    if sections.is_empty() {
        return Err(Error::parse(line_at(data, data.len() - rest.len()), "missing DATA section"));
    }
    if !rest.is_empty() {
        tracing::warn!("ignoring {} trailing bytes after {}", rest.len(), END_MAGIC);
    }

    let header = Header::from_records(&header_records);
    tracing::debug!("header: schema={:?} name={:?}", header.schema, header.name);

    let count = sections.len();
    let entities: Vec<Entity> = sections.into_iter().flatten().collect();
    tracing::debug!("parsed {} instances in {} data section(s)", entities.len(), count);
    Ok(ExchangeFile { header, entities })
}

fn exchange(input: Input) -> PResult<(Vec<Record>, Vec<Vec<Entity>>)> {
    let (input, _) = terminated(keyword_is(MAGIC, "expected ISO-10303-21"), sym(';'))(input)?;
    let (input, header) = header_section(input)?;
    let (input, sections) = many0(data_section)(input)?;
    let (input, _) = terminated(keyword_is(END_MAGIC, "expected DATA or END-ISO-10303-21"), sym(';'))(input)?;
    let (input, _) = ws(input)?;
    Ok((input, (header, sections)))
}

fn header_section(input: Input) -> PResult<Vec<Record>> {
    delimited(
        pair(keyword_is("HEADER", "expected HEADER"), sym(';')),
        many0(terminated(record, sym(';'))),
        pair(keyword_is("ENDSEC", "expected ENDSEC"), sym(';')),
    )(input)
}

fn data_section(input: Input) -> PResult<Vec<Entity>> {
    let (input, _) = keyword_is("DATA", "expected DATA")(input)?;
    // Optional section parameters from edition 3 files.
    let (input, _) = cut(terminated(opt(|i| list(i, 0)), sym(';')))(input)?;
    cut(terminated(
        many0(instance),
        pair(keyword_is("ENDSEC", "expected ENDSEC"), sym(';')),
    ))(input)
}

/// `#id = NAME(...)` or `#id = (A(...) B(...))`, followed by `;`.
fn instance(input: Input) -> PResult<Entity> {
    let (input, _) = sym('#')(input)?;
    cut(|input| {
        let (input, id) = context("expected instance number", instance_id)(input)?;
        let (input, _) = sym('=')(input)?;
        let (input, records) = alt((
            map(delimited(sym('('), many1(record), sym(')')), SmallVec::from_vec),
            map(record, |r| -> SmallVec<[Record; 1]> { smallvec![r] }),
        ))(input)?;
        let (input, _) = sym(';')(input)?;

        tracing::trace!("#{} = {}", id, records[0].name);
        Ok((input, Entity { id, records }))
    })(input)
}

fn instance_id(input: Input) -> PResult<u64> {
    map_opt(digit1, |digits: &[u8]| std::str::from_utf8(digits).ok()?.parse().ok())(input)
}

fn record(input: Input) -> PResult<Record> {
    let (input, name) = context("expected entity name", keyword)(input)?;
    let (input, args) = list(input, 0)?;
    Ok((input, Record { name, args }))
}

/// Parenthesised, comma separated parameter list.
fn list(input: Input, depth: usize) -> PResult<Vec<Value>> {
    delimited(
        sym('('),
        separated_list0(sym(','), |i| param(i, depth + 1)),
        sym(')'),
    )(input)
}

fn param(input: Input, depth: usize) -> PResult<Value> {
    if depth > MAX_DEPTH {
        return Err(nom::Err::Failure(VerboseError {
            errors: vec![(input, VerboseErrorKind::Context("nesting too deep"))],
        }));
    }
    preceded(
        ws,
        context(
            "expected parameter",
            alt((
                value(Value::Null, char('$')),
                value(Value::Derived, char('*')),
                map(preceded(char('#'), instance_id), Value::Ref),
                map(string, Value::String),
                map(binary, Value::Binary),
                map(enumeration, Value::Enum),
                map(|i| list(i, depth), Value::List),
                number,
                |i| typed(i, depth),
            )),
        ),
    )(input)
}

/// Typed parameter such as `IFCLENGTHMEASURE(3.)`.
fn typed(input: Input, depth: usize) -> PResult<Value> {
    let (input, name) = keyword(input)?;
    let (input, inner) = delimited(sym('('), |i| param(i, depth + 1), sym(')'))(input)?;
    Ok((input, Value::Typed(name, Box::new(inner))))
}

fn string(input: Input) -> PResult<String> {
    let (input, raw) = preceded(
        char('\''),
        cut(context(
            "unterminated string",
            terminated(recognize(many0_count(alt((tag("''"), is_not("'"))))), char('\'')),
        )),
    )(input)?;
    Ok((input, text::decode(raw)))
}

fn binary(input: Input) -> PResult<String> {
    let (input, digits) = preceded(
        char('"'),
        cut(context(
            "unterminated binary literal",
            terminated(take_while(|b: u8| b.is_ascii_hexdigit()), char('"')),
        )),
    )(input)?;
    Ok((input, String::from_utf8_lossy(digits).into_owned()))
}

/// `.ELEMENT.` -> `ELEMENT`
fn enumeration(input: Input) -> PResult<String> {
    let (input, name) = delimited(
        char('.'),
        take_while1(|b: u8| b.is_ascii_alphanumeric() || b == b'_'),
        char('.'),
    )(input)?;
    Ok((input, String::from_utf8_lossy(name).to_ascii_uppercase()))
}

fn number(input: Input) -> PResult<Value> {
    map_opt(recognize_float, |lexeme: &[u8]| {
        let s = std::str::from_utf8(lexeme).ok()?;
        if s.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
            s.parse().ok().map(Value::Real)
        } else {
            s.parse().ok().map(Value::Integer)
        }
    })(input)
}

/// Upper-cased standard or user-defined (`!NAME`) keyword.
fn keyword(input: Input) -> PResult<String> {
    let (input, word) = preceded(
        ws,
        recognize(pair(
            take_while_m_n(1, 1, |b: u8| b.is_ascii_alphabetic() || b == b'!'),
            take_while(|b: u8| b.is_ascii_alphanumeric() || b == b'_' || b == b'-'),
        )),
    )(input)?;
    Ok((input, String::from_utf8_lossy(word).to_ascii_uppercase()))
}

fn keyword_is<'a>(
    expected: &'static str,
    label: &'static str,
) -> impl FnMut(Input<'a>) -> PResult<'a, String> {
    preceded(ws, context(label, verify(keyword, move |k: &str| k == expected)))
}

fn sym<'a>(c: char) -> impl FnMut(Input<'a>) -> PResult<'a, char> {
    let label = match c {
        ';' => "expected ';'",
        '(' => "expected '('",
        ')' => "expected ')'",
        ',' => "expected ','",
        '=' => "expected '='",
        '#' => "expected '#'",
        _ => "expected delimiter",
    };
    preceded(ws, context(label, char(c)))
}

/// Whitespace and `/* */` comments.
fn ws(input: Input) -> PResult<()> {
    value((), many0_count(alt((value((), multispace1), comment))))(input)
}

fn comment(input: Input) -> PResult<()> {
    value(
        (),
        preceded(
            tag("/*"),
            cut(context("unterminated comment", terminated(take_until("*/"), tag("*/")))),
        ),
    )(input)
}

fn to_error(data: &[u8], err: nom::Err<VerboseError<Input>>) -> Error {
    let e = match err {
        nom::Err::Incomplete(_) => return Error::parse(line_at(data, data.len()), "unexpected end of file"),
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
    };

    // Innermost context names what was expected at the failure point.
    let innermost = e.errors.iter().find_map(|(at, kind)| match kind {
        VerboseErrorKind::Context(ctx) => Some((*at, *ctx)),
        _ => None,
    });
    let (at, message) = match innermost {
        Some((at, ctx)) if ctx.starts_with("expected") => (at, format!("{}, found {}", ctx, describe(at))),
        Some((at, ctx)) => (at, ctx.to_string()),
        None => {
            let at = e.errors.first().map(|(at, _)| *at).unwrap_or(data);
            (at, format!("syntax error at {}", describe(at)))
        }
    };
    Error::parse(line_at(data, data.len() - at.len()), message)
}

fn line_at(data: &[u8], offset: usize) -> usize {
    data[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

fn describe(at: &[u8]) -> String {
    match at.first() {
        Some(&b) if b.is_ascii_graphic() => format!("'{}'", b as char),
        Some(&b) => format!("byte 0x{:02x}", b),
        None => "end of file".to_string(),
    }
}
