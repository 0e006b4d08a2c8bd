//! Byte quantities with unit conversions and a small pattern language for
//! rendering them.
//!
//! ```
//! use bytesize_fmt::{ByteSize, NumberFormat};
//!
//! let size = ByteSize::from_megabytes(2.4);
//! assert_eq!(size.to_short_string(), "2 MB");
//! assert_eq!(size.format("'Size: 'ff uuu").unwrap(), "Size: 2.4 megabytes");
//! assert_eq!(
//!     size.format_with(",k UU", &NumberFormat::german()).unwrap(),
//!     "2.458 MB"
//! );
//! ```

pub mod args;
pub mod byte_size;
pub mod config;
pub mod errors;
pub mod format;
pub mod number_format;
pub mod traits;
pub mod unit;

#[cfg(test)]
mod tests;

pub use byte_size::{ByteSize, DEFAULT_PATTERN, LONG_PATTERN, SHORT_PATTERN};
pub use errors::{FormatError, ParseUnitError};
pub use format::format;
pub use number_format::NumberFormat;
pub use traits::ByteSizeExt;
pub use unit::{
    LetterCase, Unit, Verbosity, BYTES_PER_GIGABYTE, BYTES_PER_KILOBYTE, BYTES_PER_MEGABYTE,
    BYTES_PER_TERABYTE,
};

use config::Config;

/*
Accepts a Config struct and renders its size with the configured pattern and number format.
 */
pub fn run(config: &Config) -> Result<String, FormatError> {
    log::debug!(
        "rendering {} bytes with pattern {:?}",
        config.size.bytes(),
        config.pattern
    );
    config
        .size
        .format_with(&config.pattern, &config.number_format)
}
