//! The pattern language used to render a [`ByteSize`].
//!
//! A pattern is scanned once, left to right:
//!
//! | token             | meaning                                                        |
//! |-------------------|----------------------------------------------------------------|
//! | `'…'` or `"…"`    | literal text, `\` escapes the quote or a backslash inside      |
//! | `,`               | group thousands in every number that follows                   |
//! | `\x`              | the character `x`, literally                                   |
//! | `b` `k` `m` `g` `t` | the value in bytes, kilobytes, … (any case)                  |
//! | `f`               | the value in the best-fit unit (any case)                      |
//! | `u`               | the best-fit unit's name, lower case; `U` for upper case       |
//!
//! Numeric tokens repeat to add decimals: `f` has none, `ff` one, `fff` two.
//! Unit tokens repeat to lengthen the name: `U` is `K`, `UU` is `KB`, `UUU` is
//! `Kilobytes`. Runs stop after three characters, so `ffff` is `fff` then `f`.
//! Every other character is copied through unchanged.

use crate::byte_size::{ByteSize, DEFAULT_PATTERN};
use crate::errors::FormatError;
use crate::number_format::NumberFormat;
use crate::unit::{LetterCase, Unit, Verbosity};

const MAX_RUN: usize = 3;

/// Renders `size` according to `pattern`.
///
/// An empty pattern means [`DEFAULT_PATTERN`]. Numbers are written with
/// `number_format`, or [`NumberFormat::INVARIANT`] when none is given.
///
/// # Errors
///
/// Fails when a quoted literal is never closed or the pattern ends in a lone
/// backslash.
///
/// # Examples
///
/// ```
/// use bytesize_fmt::{format, ByteSize, NumberFormat};
///
/// let size = ByteSize::from_bytes(1_572_864);
/// assert_eq!(format("ff U", size, None).unwrap(), "1.5 M");
/// assert_eq!(format("'Total: 'kk uu", size, None).unwrap(), "Total: 1536.0 mb");
/// assert_eq!(
///     format(",kk uu", size, Some(&NumberFormat::german())).unwrap(),
///     "1.536,0 mb"
/// );
/// ```
pub fn format(
    pattern: &str,
    size: ByteSize,
    number_format: Option<&NumberFormat>,
) -> Result<String, FormatError> {
    let pattern = if pattern.is_empty() {
        DEFAULT_PATTERN
    } else {
        pattern
    };
    let number_format = number_format.unwrap_or(&NumberFormat::INVARIANT);

    scan(pattern, size, number_format).map_err(|err| {
        log::trace!("rejected pattern {:?}: {}", pattern, err);
        err
    })
}

fn scan(pattern: &str, size: ByteSize, number_format: &NumberFormat) -> Result<String, FormatError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut grouped = false;
    let mut best_fit: Option<Unit> = None;
    let mut best_fit_unit = || {
        *best_fit.get_or_insert_with(|| {
            let unit = size.best_fit_unit();
            log::trace!("best-fit unit for {} bytes is {:?}", size.bytes(), unit);
            unit
        })
    };

    let mut pos = 0;
    while pos < chars.len() {
        let c = chars[pos];
        match c {
            '\'' | '"' => {
                pos = read_quoted(&chars, pos, &mut out)?;
            }
            ',' => {
                grouped = true;
                pos += 1;
            }
            '\\' => {
                let escaped = chars
                    .get(pos + 1)
                    .ok_or(FormatError::DanglingEscape { position: pos })?;
                out.push(*escaped);
                pos += 2;
            }
            'u' | 'U' => {
                let run = run_length(&chars, pos);
                let case = if c.is_ascii_uppercase() {
                    LetterCase::Upper
                } else {
                    LetterCase::Lower
                };
                out.push_str(best_fit_unit().label(verbosity(run), case));
                pos += run;
            }
            'f' | 'F' => {
                let run = run_length(&chars, pos);
                let unit = best_fit_unit();
                out.push_str(&render_value(size, unit, decimals(run), grouped, number_format));
                pos += run;
            }
            _ => match Unit::from_pattern_char(c) {
                Some(unit) => {
                    let run = run_length(&chars, pos);
                    out.push_str(&render_value(size, unit, decimals(run), grouped, number_format));
                    pos += run;
                }
                None => {
                    out.push(c);
                    pos += 1;
                }
            },
        }
    }

    Ok(out)
}

/// Writes the size in `unit`. Whole bytes are written from the stored integer.
fn render_value(
    size: ByteSize,
    unit: Unit,
    decimals: u8,
    grouped: bool,
    number_format: &NumberFormat,
) -> String {
    match unit {
        Unit::Bytes => number_format.render_integer(size.bytes(), decimals, grouped),
        _ => number_format.render(size.value_in(unit), decimals, grouped),
    }
}

/// Copies a quoted literal starting at `start` into `out` and returns the
/// index just past its closing quote.
fn read_quoted(chars: &[char], start: usize, out: &mut String) -> Result<usize, FormatError> {
    let quote = chars[start];
    let unterminated = FormatError::UnterminatedQuote {
        quote,
        position: start,
    };

    let mut pos = start + 1;
    loop {
        match chars.get(pos) {
            None => return Err(unterminated),
            Some('\\') => {
                let escaped = chars.get(pos + 1).ok_or(unterminated)?;
                out.push(*escaped);
                pos += 2;
            }
            Some(&c) if c == quote => return Ok(pos + 1),
            Some(&c) => {
                out.push(c);
                pos += 1;
            }
        }
    }
}

/// Length of the run of `chars[start]`, ignoring case, capped at three.
fn run_length(chars: &[char], start: usize) -> usize {
    let first = chars[start];
    chars[start..]
        .iter()
        .take(MAX_RUN)
        .take_while(|c| c.eq_ignore_ascii_case(&first))
        .count()
}

fn decimals(run: usize) -> u8 {
    match run {
        1 => 0,
        2 => 1,
        _ => 2,
    }
}

fn verbosity(run: usize) -> Verbosity {
    match run {
        1 => Verbosity::Letter,
        2 => Verbosity::Short,
        _ => Verbosity::Full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(pattern: &str, bytes: i64) -> String {
        format(pattern, ByteSize::from_bytes(bytes), None).unwrap()
    }

    #[test]
    fn test_empty_pattern_uses_default() {
        assert_eq!(render("", 1536), "1.50 KB");
    }

    #[test]
    fn test_run_lengths() {
        assert_eq!(run_length(&['f', 'F', 'f', 'f'], 0), 3);
        assert_eq!(run_length(&['u', 'U', ' '], 0), 2);
        assert_eq!(run_length(&['b', 'k'], 0), 1);
        assert_eq!(render("ffff", 1536), "1.502");
        assert_eq!(render("UUUU", 1536), "KilobytesK");
    }

    #[test]
    fn test_fixed_unit_tokens() {
        let size = 3 * 1024 * 1024;
        assert_eq!(render("b", size), "3145728");
        assert_eq!(render("K", size), "3072");
        assert_eq!(render("mm", size), "3.0");
        assert_eq!(render("GGG", size), "0.00");
        assert_eq!(render("ttt", size), "0.00");
    }

    #[test]
    fn test_byte_counts_keep_every_digit() {
        let past_f64 = (1_i64 << 53) + 1;
        assert_eq!(render("b", past_f64), "9007199254740993");
        assert_eq!(render(",bbb", i64::MAX), "9,223,372,036,854,775,807.00");
        assert_eq!(render("b", i64::MIN), "-9223372036854775808");
        assert_eq!(render("ff", 1000), "1000.0");
    }

    #[test]
    fn test_unit_case_follows_first_letter() {
        assert_eq!(render("Uu", 2048), "KB");
        assert_eq!(render("uU", 2048), "kb");
    }

    #[test]
    fn test_comma_is_sticky() {
        assert_eq!(render("b ,b b", 1234567), "1234567 1,234,567 1,234,567");
        assert_eq!(render(",", 1234567), "");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(render("\\f\\u f", 10), "fu 10");
        assert_eq!(render("\\\\", 10), "\\");
        assert_eq!(
            format("f\\", ByteSize::from_bytes(10), None),
            Err(FormatError::DanglingEscape { position: 1 })
        );
    }

    #[test]
    fn test_quoted_literals() {
        assert_eq!(render("'bytes: 'b", 42), "bytes: 42");
        assert_eq!(render("\"it's \"b", 42), "it's 42");
        assert_eq!(render("'it\\'s 'b", 42), "it's 42");
        assert_eq!(render("'a\\\\b'", 42), "a\\b");
        assert_eq!(render("''b", 42), "42");
    }

    #[test]
    fn test_unterminated_quotes() {
        let size = ByteSize::from_bytes(42);
        assert_eq!(
            format("b \"oops", size, None),
            Err(FormatError::UnterminatedQuote { quote: '"', position: 2 })
        );
        // An escaped closing quote does not close the literal.
        assert_eq!(
            format("'oops\\'", size, None),
            Err(FormatError::UnterminatedQuote { quote: '\'', position: 0 })
        );
        assert_eq!(
            format("'oops\\", size, None),
            Err(FormatError::UnterminatedQuote { quote: '\'', position: 0 })
        );
    }

    #[test]
    fn test_other_characters_pass_through() {
        assert_eq!(render("[f] ~ #", 7), "[7] ~ #");
        assert_eq!(render("é f", 7), "é 7");
    }
}
