use crate::errors::FormatError;
use crate::format::format;
use crate::number_format::NumberFormat;
use crate::unit::{
    Unit, BYTES_PER_GIGABYTE, BYTES_PER_KILOBYTE, BYTES_PER_MEGABYTE, BYTES_PER_TERABYTE,
};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Pattern used by `Display` and [`ByteSize::format`] with an empty pattern.
pub const DEFAULT_PATTERN: &str = ",fff UU";
/// Pattern used by [`ByteSize::to_short_string`].
pub const SHORT_PATTERN: &str = ",f UU";
/// Pattern used by [`ByteSize::to_long_string`] and the `{:#}` format.
pub const LONG_PATTERN: &str = ",fff UUU";

/// An immutable, signed count of bytes.
///
/// Sizes built from fractional units are truncated toward zero. Values that do
/// not fit in an `i64` saturate at `i64::MIN` or `i64::MAX`, and so does the
/// `+`/`-` arithmetic. Use [`ByteSize::checked_add`] and
/// [`ByteSize::checked_sub`] to detect overflow instead.
///
/// # Examples
///
/// ```
/// use bytesize_fmt::ByteSize;
///
/// let size = ByteSize::from_kilobytes(1.5);
/// assert_eq!(size.bytes(), 1536);
/// assert_eq!(size.to_string(), "1.50 KB");
/// assert_eq!(size.to_short_string(), "2 KB");
/// assert_eq!(size.to_long_string(), "1.50 Kilobytes");
///
/// let total = size + ByteSize::from_bytes(512);
/// assert_eq!(total, ByteSize::from_kilobytes(2.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize {
    bytes: i64,
}

impl ByteSize {
    /// An empty size, zero bytes.
    pub const ZERO: ByteSize = ByteSize { bytes: 0 };

    /// Same as [`BYTES_PER_KILOBYTE`](crate::BYTES_PER_KILOBYTE), for scaling by hand.
    pub const BYTES_PER_KILOBYTE: i64 = BYTES_PER_KILOBYTE;
    /// Same as [`BYTES_PER_MEGABYTE`](crate::BYTES_PER_MEGABYTE).
    pub const BYTES_PER_MEGABYTE: i64 = BYTES_PER_MEGABYTE;
    /// Same as [`BYTES_PER_GIGABYTE`](crate::BYTES_PER_GIGABYTE).
    pub const BYTES_PER_GIGABYTE: i64 = BYTES_PER_GIGABYTE;
    /// Same as [`BYTES_PER_TERABYTE`](crate::BYTES_PER_TERABYTE).
    pub const BYTES_PER_TERABYTE: i64 = BYTES_PER_TERABYTE;

    /// Wraps a raw byte count.
    pub const fn from_bytes(bytes: i64) -> Self {
        ByteSize { bytes }
    }

    /// Builds a size from a value in `unit`, truncating toward zero.
    ///
    /// Out-of-range values saturate and NaN becomes zero.
    ///
    /// ```
    /// use bytesize_fmt::{ByteSize, Unit};
    ///
    /// assert_eq!(ByteSize::from_unit(2.5, Unit::Gigabytes).bytes(), 2_684_354_560);
    /// assert_eq!(ByteSize::from_unit(0.9999, Unit::Bytes).bytes(), 0);
    /// assert_eq!(ByteSize::from_unit(1e30, Unit::Terabytes).bytes(), i64::MAX);
    /// assert_eq!(ByteSize::from_unit(f64::NAN, Unit::Megabytes), ByteSize::ZERO);
    /// ```
    pub fn from_unit(value: f64, unit: Unit) -> Self {
        ByteSize {
            bytes: (value * unit.multiplier() as f64) as i64,
        }
    }

    /// Builds a size from kilobytes, truncating toward zero.
    pub fn from_kilobytes(kilobytes: f64) -> Self {
        Self::from_unit(kilobytes, Unit::Kilobytes)
    }

    /// Builds a size from megabytes, truncating toward zero.
    pub fn from_megabytes(megabytes: f64) -> Self {
        Self::from_unit(megabytes, Unit::Megabytes)
    }

    /// Builds a size from gigabytes, truncating toward zero.
    pub fn from_gigabytes(gigabytes: f64) -> Self {
        Self::from_unit(gigabytes, Unit::Gigabytes)
    }

    /// Builds a size from terabytes, truncating toward zero.
    pub fn from_terabytes(terabytes: f64) -> Self {
        Self::from_unit(terabytes, Unit::Terabytes)
    }

    /// The stored byte count.
    pub const fn bytes(&self) -> i64 {
        self.bytes
    }

    /// The size in kilobytes (`bytes / 1024`).
    pub fn kilobytes(&self) -> f64 {
        self.value_in(Unit::Kilobytes)
    }

    /// The size in megabytes (`bytes / 1024²`).
    pub fn megabytes(&self) -> f64 {
        self.value_in(Unit::Megabytes)
    }

    /// The size in gigabytes (`bytes / 1024³`).
    pub fn gigabytes(&self) -> f64 {
        self.value_in(Unit::Gigabytes)
    }

    /// The size in terabytes (`bytes / 1024⁴`).
    pub fn terabytes(&self) -> f64 {
        self.value_in(Unit::Terabytes)
    }

    /// The size expressed in `unit`.
    pub fn value_in(&self, unit: Unit) -> f64 {
        self.bytes as f64 / unit.multiplier() as f64
    }

    /// The largest unit in which the size is at least one.
    ///
    /// Checks terabytes first and works down, comparing whole byte counts
    /// against each threshold. Negative sizes use their magnitude.
    ///
    /// ```
    /// use bytesize_fmt::{ByteSize, Unit};
    ///
    /// assert_eq!(ByteSize::from_bytes(1023).best_fit_unit(), Unit::Bytes);
    /// assert_eq!(ByteSize::from_bytes(1024).best_fit_unit(), Unit::Kilobytes);
    /// assert_eq!(ByteSize::from_gigabytes(-3.0).best_fit_unit(), Unit::Gigabytes);
    /// ```
    pub fn best_fit_unit(&self) -> Unit {
        let magnitude = self.bytes.unsigned_abs();
        Unit::ALL
            .into_iter()
            .rev()
            .find(|unit| magnitude >= unit.multiplier().unsigned_abs())
            .unwrap_or(Unit::Bytes)
    }

    /// Adds two sizes, returning `None` on overflow.
    pub const fn checked_add(self, other: ByteSize) -> Option<ByteSize> {
        match self.bytes.checked_add(other.bytes) {
            Some(bytes) => Some(ByteSize { bytes }),
            None => None,
        }
    }

    /// Subtracts `other`, returning `None` on overflow.
    pub const fn checked_sub(self, other: ByteSize) -> Option<ByteSize> {
        match self.bytes.checked_sub(other.bytes) {
            Some(bytes) => Some(ByteSize { bytes }),
            None => None,
        }
    }

    /// Adds `count` whole units, saturating.
    pub const fn add_units(self, count: i64, unit: Unit) -> ByteSize {
        ByteSize {
            bytes: self
                .bytes
                .saturating_add(count.saturating_mul(unit.multiplier())),
        }
    }

    /// Subtracts `count` whole units, saturating.
    pub const fn subtract_units(self, count: i64, unit: Unit) -> ByteSize {
        ByteSize {
            bytes: self
                .bytes
                .saturating_sub(count.saturating_mul(unit.multiplier())),
        }
    }

    /// Adds whole bytes, saturating.
    pub const fn add_bytes(self, bytes: i64) -> ByteSize {
        self.add_units(bytes, Unit::Bytes)
    }

    /// Adds whole kilobytes, saturating.
    pub const fn add_kilobytes(self, kilobytes: i64) -> ByteSize {
        self.add_units(kilobytes, Unit::Kilobytes)
    }

    /// Adds whole megabytes, saturating.
    pub const fn add_megabytes(self, megabytes: i64) -> ByteSize {
        self.add_units(megabytes, Unit::Megabytes)
    }

    /// Adds whole gigabytes, saturating.
    pub const fn add_gigabytes(self, gigabytes: i64) -> ByteSize {
        self.add_units(gigabytes, Unit::Gigabytes)
    }

    /// Adds whole terabytes, saturating.
    pub const fn add_terabytes(self, terabytes: i64) -> ByteSize {
        self.add_units(terabytes, Unit::Terabytes)
    }

    /// Subtracts whole bytes, saturating.
    pub const fn subtract_bytes(self, bytes: i64) -> ByteSize {
        self.subtract_units(bytes, Unit::Bytes)
    }

    /// Subtracts whole kilobytes, saturating.
    pub const fn subtract_kilobytes(self, kilobytes: i64) -> ByteSize {
        self.subtract_units(kilobytes, Unit::Kilobytes)
    }

    /// Subtracts whole megabytes, saturating.
    pub const fn subtract_megabytes(self, megabytes: i64) -> ByteSize {
        self.subtract_units(megabytes, Unit::Megabytes)
    }

    /// Subtracts whole gigabytes, saturating.
    pub const fn subtract_gigabytes(self, gigabytes: i64) -> ByteSize {
        self.subtract_units(gigabytes, Unit::Gigabytes)
    }

    /// Subtracts whole terabytes, saturating.
    pub const fn subtract_terabytes(self, terabytes: i64) -> ByteSize {
        self.subtract_units(terabytes, Unit::Terabytes)
    }

    /// Renders the size with a custom pattern and invariant number format.
    ///
    /// See the [`format`](crate::format) module for the pattern language.
    pub fn format(&self, pattern: &str) -> Result<String, FormatError> {
        format(pattern, *self, None)
    }

    /// Renders the size with a custom pattern and number format.
    ///
    /// ```
    /// use bytesize_fmt::{ByteSize, NumberFormat};
    ///
    /// let size = ByteSize::from_bytes(1_234_567);
    /// assert_eq!(
    ///     size.format_with(",bbb 'bytes'", &NumberFormat::german()).unwrap(),
    ///     "1.234.567,00 bytes"
    /// );
    /// ```
    pub fn format_with(
        &self,
        pattern: &str,
        number_format: &NumberFormat,
    ) -> Result<String, FormatError> {
        format(pattern, *self, Some(number_format))
    }

    /// Best-fit unit, no decimals, abbreviated unit: `2 MB`.
    pub fn to_short_string(&self) -> String {
        self.render_builtin(SHORT_PATTERN)
    }

    /// Best-fit unit, two decimals, unit spelled out: `2.40 Megabytes`.
    pub fn to_long_string(&self) -> String {
        self.render_builtin(LONG_PATTERN)
    }

    fn render_builtin(&self, pattern: &'static str) -> String {
        match format(pattern, *self, None) {
            Ok(rendered) => rendered,
            Err(err) => unreachable!("built-in pattern {:?} rejected: {}", pattern, err),
        }
    }
}

impl fmt::Display for ByteSize {
    /// Writes the default rendering, or the long one with `{:#}`.
    ///
    /// Width, fill and alignment apply to the whole rendered text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = if f.alternate() {
            LONG_PATTERN
        } else {
            DEFAULT_PATTERN
        };
        f.pad(&self.render_builtin(pattern))
    }
}

impl From<i64> for ByteSize {
    fn from(bytes: i64) -> Self {
        ByteSize::from_bytes(bytes)
    }
}

impl From<u32> for ByteSize {
    fn from(bytes: u32) -> Self {
        ByteSize::from_bytes(i64::from(bytes))
    }
}

impl From<ByteSize> for i64 {
    fn from(size: ByteSize) -> Self {
        size.bytes
    }
}

impl Add for ByteSize {
    type Output = ByteSize;

    fn add(self, other: ByteSize) -> ByteSize {
        ByteSize {
            bytes: self.bytes.saturating_add(other.bytes),
        }
    }
}

impl Sub for ByteSize {
    type Output = ByteSize;

    fn sub(self, other: ByteSize) -> ByteSize {
        ByteSize {
            bytes: self.bytes.saturating_sub(other.bytes),
        }
    }
}

impl AddAssign for ByteSize {
    fn add_assign(&mut self, other: ByteSize) {
        *self = *self + other;
    }
}

impl SubAssign for ByteSize {
    fn sub_assign(&mut self, other: ByteSize) {
        *self = *self - other;
    }
}

impl Sum for ByteSize {
    fn sum<I: Iterator<Item = ByteSize>>(iter: I) -> ByteSize {
        iter.fold(ByteSize::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a ByteSize> for ByteSize {
    fn sum<I: Iterator<Item = &'a ByteSize>>(iter: I) -> ByteSize {
        iter.copied().sum()
    }
}
