//! printf-style substitution over [`Value`] arguments.
//!
//! Formatting never fails. A verb that does not fit its argument, a missing
//! argument or leftover arguments are rendered inline as placeholders:
//!
//! - `%!d(string=hello)` for a mismatched verb,
//! - `%!d(MISSING)` when the arguments run out,
//! - `%!(EXTRA int=5)` for arguments nothing consumed,
//! - `%!(NOVERB)` for a trailing `%`.
//!
//! Floats under `%v` and `%g` use the shortest representation and switch to
//! exponent form when the exponent is below -4 or reaches 21 (`%v`) or 6 (`%g`).
//! The `0` flag pads every verb except integers with a precision and non-finite
//! floats. Placeholder type names come from the [`Value`] variant (`int`,
//! `uint`, `float64`, `char`, `string`, `bool`), not from the caller's Rust type,
//! and `%q` uses Rust string escaping.

use crate::value::Value;
use std::{iter::Peekable, str::Chars};

const MAX_WIDTH: usize = 1_000_000;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    minus: bool,
    plus: bool,
    zero: bool,
    space: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

struct Piece {
    prefix: String,
    body: String,
    zero_pad: bool,
}

impl Piece {
    fn text(body: String) -> Self {
        Self {
            prefix: String::new(),
            body,
            zero_pad: true,
        }
    }
}

pub fn sprintf(format: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut args = args.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '0' => spec.zero = true,
                ' ' => spec.space = true,
                '#' => spec.sharp = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = parse_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(parse_number(&mut chars).unwrap_or(0));
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.next() {
            None => {
                out.push_str(&format!("%!{verb}(MISSING)"));
            }
            Some(arg) => match render(verb, &spec, arg) {
                Some(piece) => pad(&mut out, &spec, piece),
                None => {
                    out.push_str(&format!("%!{verb}({}={arg})", arg.type_name()));
                }
            },
        }
    }

    let extra: Vec<String> = args
        .map(|arg| format!("{}={arg}", arg.type_name()))
        .collect();
    if !extra.is_empty() {
        out.push_str(&format!("%!(EXTRA {})", extra.join(", ")));
    }

    out
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let next = value.unwrap_or(0).saturating_mul(10) + digit as usize;
        value = Some(next.min(MAX_WIDTH));
    }
    value
}

fn render(verb: char, spec: &Spec, arg: &Value) -> Option<Piece> {
    let piece = match (verb, arg) {
        ('v' | 't', Value::Bool(b)) => Piece::text(b.to_string()),

        ('v' | 'd', Value::Int(i)) => integer(spec, *i < 0, i.unsigned_abs(), 10, false),
        ('v' | 'd', Value::Uint(u)) => integer(spec, false, *u, 10, false),
        ('d', Value::Char(c)) => integer(spec, false, u64::from(u32::from(*c)), 10, false),
        ('x' | 'X' | 'o' | 'b', Value::Int(i)) => {
            integer(spec, *i < 0, i.unsigned_abs(), radix(verb), verb == 'X')
        }
        ('x' | 'X' | 'o' | 'b', Value::Uint(u)) => {
            integer(spec, false, *u, radix(verb), verb == 'X')
        }
        ('c', Value::Int(i)) => Piece::text(to_char(u32::try_from(*i).ok()).to_string()),
        ('c', Value::Uint(u)) => Piece::text(to_char(u32::try_from(*u).ok()).to_string()),

        ('f' | 'F', Value::Float(x)) => {
            let precision = spec.precision.unwrap_or(6);
            float(spec, *x, format!("{:.precision$}", x.abs()))
        }
        ('e' | 'E', Value::Float(x)) => {
            let precision = spec.precision.unwrap_or(6);
            float(spec, *x, exponent(x.abs(), precision, verb == 'E'))
        }
        ('v', Value::Float(x)) => float(spec, *x, general(x.abs(), spec.precision, 21, false)),
        ('g' | 'G', Value::Float(x)) => {
            float(spec, *x, general(x.abs(), spec.precision, 6, verb == 'G'))
        }

        ('v' | 'c', Value::Char(c)) => Piece::text(c.to_string()),
        ('q', Value::Char(c)) => Piece::text(format!("{c:?}")),

        ('v' | 's', Value::Str(s)) => Piece::text(truncate(s, spec.precision).to_string()),
        ('q', Value::Str(s)) => Piece::text(format!("{:?}", truncate(s, spec.precision))),
        ('x' | 'X', Value::Str(s)) => {
            let body: String = s
                .bytes()
                .map(|byte| {
                    if verb == 'X' {
                        format!("{byte:02X}")
                    } else {
                        format!("{byte:02x}")
                    }
                })
                .collect();
            let prefix = match (spec.sharp, verb) {
                (true, 'X') => "0X",
                (true, _) => "0x",
                _ => "",
            };
            Piece {
                prefix: prefix.to_string(),
                body,
                zero_pad: true,
            }
        }

        _ => return None,
    };

    Some(piece)
}

fn radix(verb: char) -> u32 {
    match verb {
        'x' | 'X' => 16,
        'o' => 8,
        'b' => 2,
        _ => 10,
    }
}

fn sign(spec: &Spec, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn integer(spec: &Spec, negative: bool, magnitude: u64, radix: u32, upper: bool) -> Piece {
    let mut digits = match (radix, upper) {
        (16, true) => format!("{magnitude:X}"),
        (16, false) => format!("{magnitude:x}"),
        (8, _) => format!("{magnitude:o}"),
        (2, _) => format!("{magnitude:b}"),
        _ => magnitude.to_string(),
    };
    let precision = spec.precision.unwrap_or(0);
    if digits.len() < precision {
        digits.insert_str(0, &"0".repeat(precision - digits.len()));
    }

    let mut prefix = sign(spec, negative).to_string();
    if spec.sharp {
        prefix.push_str(match (radix, upper) {
            (16, true) => "0X",
            (16, false) => "0x",
            (8, _) => "0",
            (2, _) => "0b",
            _ => "",
        });
    }

    Piece {
        prefix,
        body: digits,
        zero_pad: spec.precision.is_none(),
    }
}

fn float(spec: &Spec, value: f64, body: String) -> Piece {
    if value.is_nan() {
        return Piece {
            prefix: sign(spec, false).to_string(),
            body: "NaN".to_string(),
            zero_pad: false,
        };
    }

    let negative = value.is_sign_negative();
    if value.is_infinite() {
        let prefix = match (negative, spec.space && !spec.plus) {
            (true, _) => "-",
            (false, true) => " ",
            (false, false) => "+",
        };
        return Piece {
            prefix: prefix.to_string(),
            body: "Inf".to_string(),
            zero_pad: false,
        };
    }

    Piece {
        prefix: sign(spec, negative).to_string(),
        body,
        zero_pad: true,
    }
}

/// Shortest `%v` rendering of a float, sign included.
pub(crate) fn shortest(value: f64) -> String {
    let spec = Spec::default();
    let piece = float(&spec, value, general(value.abs(), None, 21, false));
    piece.prefix + &piece.body
}

/// `%g` rendering of a non-negative finite value.
///
/// `precision` counts significant digits; `None` asks for the shortest
/// representation, which switches to exponent form once the exponent reaches
/// `limit`. Trailing zeros are dropped.
fn general(value: f64, precision: Option<usize>, limit: i32, upper: bool) -> String {
    let (raw, limit) = match precision {
        Some(p) => {
            let p = p.max(1);
            (format!("{:.*e}", p - 1, value), i32::try_from(p).unwrap_or(i32::MAX))
        }
        None => (format!("{value:e}"), limit),
    };
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return raw;
    };

    if exp < -4 || exp >= limit {
        let marker = if upper { 'E' } else { 'e' };
        let sign = if exp < 0 { '-' } else { '+' };
        return format!(
            "{}{marker}{sign}{:02}",
            trim_zeros(mantissa),
            exp.unsigned_abs()
        );
    }

    match precision {
        Some(p) => {
            // p is bounded by MAX_WIDTH.
            let decimals = (p.max(1) as i64 - 1 - i64::from(exp)).max(0) as usize;
            trim_zeros(&format!("{value:.decimals$}")).to_string()
        }
        None => value.to_string(),
    }
}

fn trim_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Scientific notation with a signed, at least two digit exponent: `1.234568e+03`.
fn exponent(value: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{value:.precision$e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return raw;
    };

    let marker = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{marker}{sign}{:02}", exp.unsigned_abs())
}

fn to_char(code: Option<u32>) -> char {
    code.and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn truncate(s: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|p| s.char_indices().nth(p)) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn pad(out: &mut String, spec: &Spec, piece: Piece) {
    let len = piece.prefix.chars().count() + piece.body.chars().count();
    let fill = spec.width.unwrap_or(0).saturating_sub(len);

    if fill == 0 {
        out.push_str(&piece.prefix);
        out.push_str(&piece.body);
    } else if spec.minus {
        out.push_str(&piece.prefix);
        out.push_str(&piece.body);
        out.extend(std::iter::repeat_n(' ', fill));
    } else if spec.zero && piece.zero_pad {
        out.push_str(&piece.prefix);
        out.extend(std::iter::repeat_n('0', fill));
        out.push_str(&piece.body);
    } else {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(&piece.prefix);
        out.push_str(&piece.body);
    }
}
