use crate::args::Args;
use crate::byte_size::{ByteSize, LONG_PATTERN, SHORT_PATTERN};
use crate::errors::ConfigError;
use crate::number_format::NumberFormat;
use crate::unit::Unit;

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `size` - The quantity to render, already converted from the requested unit
/// * `pattern` - Pattern the quantity is rendered with
/// * `number_format` - Separators used for decimals and digit groups
/// * `verbose` - Bool to determine if debug logging is enabled
///
#[derive(Clone, Debug)]
pub struct Config {
    pub size: ByteSize,
    pub pattern: String,
    pub number_format: NumberFormat,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Details
    ///
    /// 1. Parses the unit name and scales the value into whole bytes (truncating, saturating)
    /// 2. Resolves the locale name to a number format preset
    /// 3. Picks the pattern, letting `--short` and `--long` override `--pattern`
    /// 4. Checks the pattern once so a malformed one is reported before any output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The unit name is not recognised
    /// * The locale name is not one of the presets
    /// * The pattern has an unterminated quote or a dangling escape
    ///
    pub fn build(args: &Args) -> Result<Config, ConfigError> {
        let unit: Unit = args.unit.parse()?;
        let size = ByteSize::from_unit(args.value, unit);

        let number_format = NumberFormat::preset(&args.locale)
            .ok_or_else(|| ConfigError::UnknownLocale(args.locale.clone()))?;

        let pattern = if args.short {
            SHORT_PATTERN.to_string()
        } else if args.long {
            LONG_PATTERN.to_string()
        } else {
            args.pattern.clone()
        };
        ByteSize::ZERO.format(&pattern)?;

        Ok(Config {
            size,
            pattern,
            number_format,
            verbose: args.verbose,
        })
    }
}
