use crate::byte_size::ByteSize;

/// Provides functionality to treat plain integers as byte counts.
///
/// This trait is particularly useful for displaying file sizes, memory usage, or any other
/// byte-based measurements without building a [`ByteSize`] by hand. The output automatically
/// scales from bytes to terabytes based on the size of the number.
///
/// # Examples
///
/// ```
/// use bytesize_fmt::ByteSizeExt;
/// let size: u64 = 1024;
/// assert_eq!(size.format_size(), "1.00 KB");
///
/// let large_size: u64 = 1024 * 1024 * 1024;
/// assert_eq!(large_size.format_size(), "1.00 GB");
/// assert_eq!(large_size.byte_size().megabytes(), 1024.0);
/// ```
pub trait ByteSizeExt {
    /// Interprets the number as a count of bytes.
    ///
    /// Unsigned values above `i64::MAX` saturate.
    fn byte_size(&self) -> ByteSize;

    /// Formats the number into a human-readable string with appropriate size units.
    ///
    /// The output uses the best-fit unit with two decimals and the abbreviated unit name:
    /// - bytes (0.00 B to 1,023.00 B)
    /// - kilobytes (1.00 KB to 1,024.00 KB)
    /// - megabytes, gigabytes and terabytes likewise
    ///
    /// # Examples
    ///
    /// ```
    /// use bytesize_fmt::ByteSizeExt;
    ///
    /// assert_eq!(50_u64.format_size(), "50.00 B");
    /// assert_eq!((1536_u32).format_size(), "1.50 KB");
    /// assert_eq!((1024 * 1024 * 1024 * 1024_u64).format_size(), "1.00 TB");
    /// assert_eq!((-2048_i64).format_size(), "-2.00 KB");
    /// ```
    fn format_size(&self) -> String {
        self.byte_size().to_string()
    }
}

macro_rules! impl_lossless {
    ($($t:ty),*) => {
        $(
            impl ByteSizeExt for $t {
                fn byte_size(&self) -> ByteSize {
                    ByteSize::from_bytes(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_saturating {
    ($($t:ty),*) => {
        $(
            impl ByteSizeExt for $t {
                fn byte_size(&self) -> ByteSize {
                    ByteSize::from_bytes(i64::try_from(*self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_lossless!(u8, u16, u32, i32, i64);
impl_saturating!(u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturates_above_i64_max() {
        assert_eq!(u64::MAX.byte_size().bytes(), i64::MAX);
        assert_eq!((i64::MAX as u64).byte_size().bytes(), i64::MAX);
    }

    #[test]
    fn test_small_integers() {
        assert_eq!(0_u8.format_size(), "0.00 B");
        assert_eq!(1023_u16.format_size(), "1,023.00 B");
        assert_eq!(4096_usize.byte_size().kilobytes(), 4.0);
    }
}
