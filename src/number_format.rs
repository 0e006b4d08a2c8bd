/// Describes how numbers are written: which characters separate decimals and
/// digit groups, and how many digits make a group.
///
/// Formatting never consults the process locale. Callers pass a
/// `NumberFormat` explicitly, and [`NumberFormat::INVARIANT`] is used when
/// they don't.
///
/// # Examples
///
/// ```
/// use bytesize_fmt::NumberFormat;
///
/// let german = NumberFormat::german();
/// assert_eq!(german.render(1234567.891, 2, true), "1.234.567,89");
/// assert_eq!(NumberFormat::INVARIANT.render(1234567.891, 0, true), "1,234,568");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: char,
    /// Digits per group. Zero disables grouping even when it is requested.
    pub group_size: usize,
}

// Keeps 10^decimals inside u128.
const MAX_DECIMALS: u8 = 18;

impl NumberFormat {
    /// `.` for decimals, `,` between groups of three.
    pub const INVARIANT: NumberFormat = NumberFormat {
        decimal_separator: '.',
        group_separator: ',',
        group_size: 3,
    };

    /// `,` for decimals, `.` between groups of three.
    pub const fn german() -> Self {
        NumberFormat {
            decimal_separator: ',',
            group_separator: '.',
            group_size: 3,
        }
    }

    /// French style, grouping with a narrow no-break space.
    pub const fn french() -> Self {
        NumberFormat {
            decimal_separator: ',',
            group_separator: '\u{202F}',
            group_size: 3,
        }
    }

    /// Swiss style, grouping with an apostrophe.
    pub const fn swiss() -> Self {
        NumberFormat {
            decimal_separator: '.',
            group_separator: '\'',
            group_size: 3,
        }
    }

    /// Looks up a preset by short name: `invariant`, `en`, `de`, `fr` or `ch`.
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "invariant" | "en" => Some(Self::INVARIANT),
            "de" => Some(Self::german()),
            "fr" => Some(Self::french()),
            "ch" => Some(Self::swiss()),
            _ => None,
        }
    }

    /// Returns a copy using `separator` before the fractional digits.
    pub const fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Returns a copy using `separator` between digit groups.
    pub const fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    /// Returns a copy grouping `size` digits at a time.
    pub const fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Writes `value` with exactly `decimals` fractional digits.
    ///
    /// Rounds half away from zero, so `2.5` with no decimals is `3`. The
    /// integer part is grouped only when `grouped` is set. A value that rounds
    /// to zero never carries a minus sign.
    pub fn render(&self, value: f64, decimals: u8, grouped: bool) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let decimals = decimals.min(MAX_DECIMALS);
        let scale = 10_u128.pow(u32::from(decimals));
        // f64::round rounds half away from zero; `as` saturates.
        let scaled = (value.abs() * scale as f64).round() as u128;
        let negative = value.is_sign_negative() && scaled != 0;
        self.assemble(negative, scaled / scale, scaled % scale, decimals, grouped)
    }

    /// Writes a whole number exactly, followed by `decimals` zeros.
    ///
    /// Unlike [`NumberFormat::render`] this never goes through `f64`, so every
    /// digit of large byte counts survives.
    ///
    /// ```
    /// use bytesize_fmt::NumberFormat;
    ///
    /// let nf = NumberFormat::INVARIANT;
    /// assert_eq!(nf.render_integer(i64::MAX, 2, true), "9,223,372,036,854,775,807.00");
    /// assert_eq!(nf.render_integer(-1536, 0, false), "-1536");
    /// ```
    pub fn render_integer(&self, value: i64, decimals: u8, grouped: bool) -> String {
        let decimals = decimals.min(MAX_DECIMALS);
        self.assemble(
            value < 0,
            u128::from(value.unsigned_abs()),
            0,
            decimals,
            grouped,
        )
    }

    fn assemble(
        &self,
        negative: bool,
        integer: u128,
        fraction: u128,
        decimals: u8,
        grouped: bool,
    ) -> String {
        let mut out = String::new();
        if negative {
            out.push('-');
        }
        self.push_integer(&mut out, &integer.to_string(), grouped);
        if decimals > 0 {
            out.push(self.decimal_separator);
            out.push_str(&format!("{:0width$}", fraction, width = usize::from(decimals)));
        }
        out
    }

    fn push_integer(&self, out: &mut String, digits: &str, grouped: bool) {
        if !grouped || self.group_size == 0 {
            out.push_str(digits);
            return;
        }
        let len = digits.len();
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (len - i) % self.group_size == 0 {
                out.push(self.group_separator);
            }
            out.push(digit);
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}
