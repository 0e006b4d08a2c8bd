use crate::errors::ParseUnitError;
use std::fmt;
use std::str::FromStr;

/// Number of bytes in one kilobyte.
pub const BYTES_PER_KILOBYTE: i64 = 1024;
/// Number of bytes in one megabyte.
pub const BYTES_PER_MEGABYTE: i64 = BYTES_PER_KILOBYTE * 1024;
/// Number of bytes in one gigabyte.
pub const BYTES_PER_GIGABYTE: i64 = BYTES_PER_MEGABYTE * 1024;
/// Number of bytes in one terabyte.
pub const BYTES_PER_TERABYTE: i64 = BYTES_PER_GIGABYTE * 1024;

/// The units a [`ByteSize`](crate::ByteSize) can be expressed in.
///
/// All multipliers are powers of 1024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

/// How much of a unit name to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// A single letter, e.g. `K`.
    Letter,
    /// The abbreviation, e.g. `KB`.
    Short,
    /// The whole word, e.g. `Kilobytes`.
    Full,
}

/// Case of a rendered unit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
}

struct Labels {
    upper: [&'static str; 3],
    lower: [&'static str; 3],
}

const BYTES_LABELS: Labels = Labels {
    upper: ["B", "B", "Bytes"],
    lower: ["b", "b", "bytes"],
};
const KILOBYTES_LABELS: Labels = Labels {
    upper: ["K", "KB", "Kilobytes"],
    lower: ["k", "kb", "kilobytes"],
};
const MEGABYTES_LABELS: Labels = Labels {
    upper: ["M", "MB", "Megabytes"],
    lower: ["m", "mb", "megabytes"],
};
const GIGABYTES_LABELS: Labels = Labels {
    upper: ["G", "GB", "Gigabytes"],
    lower: ["g", "gb", "gigabytes"],
};
const TERABYTES_LABELS: Labels = Labels {
    upper: ["T", "TB", "Terabytes"],
    lower: ["t", "tb", "terabytes"],
};

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Unit; 5] = [
        Unit::Bytes,
        Unit::Kilobytes,
        Unit::Megabytes,
        Unit::Gigabytes,
        Unit::Terabytes,
    ];

    /// Number of bytes in one of this unit.
    ///
    /// ```
    /// use bytesize_fmt::Unit;
    /// assert_eq!(Unit::Megabytes.multiplier(), 1024 * 1024);
    /// ```
    pub const fn multiplier(self) -> i64 {
        match self {
            Unit::Bytes => 1,
            Unit::Kilobytes => BYTES_PER_KILOBYTE,
            Unit::Megabytes => BYTES_PER_MEGABYTE,
            Unit::Gigabytes => BYTES_PER_GIGABYTE,
            Unit::Terabytes => BYTES_PER_TERABYTE,
        }
    }

    /// Returns the rendered name of this unit.
    ///
    /// The upper-case full word is title case, so `Bytes` rather than `BYTES`.
    ///
    /// ```
    /// use bytesize_fmt::{LetterCase, Unit, Verbosity};
    /// assert_eq!(Unit::Kilobytes.label(Verbosity::Short, LetterCase::Upper), "KB");
    /// assert_eq!(Unit::Bytes.label(Verbosity::Full, LetterCase::Upper), "Bytes");
    /// assert_eq!(Unit::Gigabytes.label(Verbosity::Letter, LetterCase::Lower), "g");
    /// ```
    pub fn label(self, verbosity: Verbosity, case: LetterCase) -> &'static str {
        let labels = self.labels();
        let row = match case {
            LetterCase::Upper => &labels.upper,
            LetterCase::Lower => &labels.lower,
        };
        match verbosity {
            Verbosity::Letter => row[0],
            Verbosity::Short => row[1],
            Verbosity::Full => row[2],
        }
    }

    /// Maps the fixed-unit pattern letters `b k m g t` (any case) to a unit.
    pub fn from_pattern_char(c: char) -> Option<Unit> {
        match c.to_ascii_lowercase() {
            'b' => Some(Unit::Bytes),
            'k' => Some(Unit::Kilobytes),
            'm' => Some(Unit::Megabytes),
            'g' => Some(Unit::Gigabytes),
            't' => Some(Unit::Terabytes),
            _ => None,
        }
    }

    fn labels(self) -> &'static Labels {
        match self {
            Unit::Bytes => &BYTES_LABELS,
            Unit::Kilobytes => &KILOBYTES_LABELS,
            Unit::Megabytes => &MEGABYTES_LABELS,
            Unit::Gigabytes => &GIGABYTES_LABELS,
            Unit::Terabytes => &TERABYTES_LABELS,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label(Verbosity::Short, LetterCase::Upper))
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    /// Accepts the letter, the abbreviation or the full word (singular or
    /// plural), ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Unit::ALL
            .into_iter()
            .find(|unit| {
                let labels = unit.labels();
                let full = labels.lower[2];
                labels.lower.contains(&wanted.as_str())
                    || full.strip_suffix('s') == Some(wanted.as_str())
            })
            .ok_or_else(|| ParseUnitError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_are_powers_of_1024() {
        for window in Unit::ALL.windows(2) {
            assert_eq!(window[1].multiplier(), window[0].multiplier() * 1024);
        }
        assert_eq!(Unit::Terabytes.multiplier(), 1_099_511_627_776);
    }

    #[test]
    fn test_label_table() {
        assert_eq!(Unit::Bytes.label(Verbosity::Letter, LetterCase::Upper), "B");
        assert_eq!(Unit::Bytes.label(Verbosity::Short, LetterCase::Lower), "b");
        assert_eq!(Unit::Bytes.label(Verbosity::Full, LetterCase::Lower), "bytes");
        assert_eq!(Unit::Terabytes.label(Verbosity::Full, LetterCase::Upper), "Terabytes");
        assert_eq!(Unit::Megabytes.label(Verbosity::Short, LetterCase::Lower), "mb");
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("kb".parse::<Unit>().unwrap(), Unit::Kilobytes);
        assert_eq!(" GB ".parse::<Unit>().unwrap(), Unit::Gigabytes);
        assert_eq!("Megabytes".parse::<Unit>().unwrap(), Unit::Megabytes);
        assert_eq!("terabyte".parse::<Unit>().unwrap(), Unit::Terabytes);
        assert_eq!("b".parse::<Unit>().unwrap(), Unit::Bytes);
        assert!("parsec".parse::<Unit>().is_err());
    }

    #[test]
    fn test_pattern_chars() {
        assert_eq!(Unit::from_pattern_char('K'), Some(Unit::Kilobytes));
        assert_eq!(Unit::from_pattern_char('t'), Some(Unit::Terabytes));
        assert_eq!(Unit::from_pattern_char('f'), None);
        assert_eq!(Unit::from_pattern_char('u'), None);
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:>4}", Unit::Kilobytes), "  KB");
    }
}
