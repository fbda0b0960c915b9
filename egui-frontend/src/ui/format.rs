//! Number formatting for animated displays.
//!
//! en-US style: comma-grouped integer part, configurable fraction digits,
//! and a fixed prefix/suffix wrapped around the number. Formatting is a pure
//! function of (value, options), so sampling the same tween value twice
//! renders the same string.

/// Display options for one formatted number
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    /// Fraction digits always shown, even when zero
    pub min_fraction_digits: usize,
    /// Fraction digits the value is rounded to; treated as at least
    /// `min_fraction_digits`
    pub max_fraction_digits: usize,
    /// Fixed text before the number, e.g. a currency symbol
    pub prefix: String,
    /// Fixed text after the number, e.g. "%"
    pub suffix: String,
    /// Whether to group the integer part with commas
    pub grouping: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            prefix: String::new(),
            suffix: String::new(),
            grouping: true,
        }
    }
}

impl NumberFormat {
    /// Whole-dollar currency display ("$42,500")
    pub fn currency() -> Self {
        Self {
            prefix: "$".to_string(),
            ..Self::default()
        }
    }

    /// Currency with cents ("$1,299.00")
    pub fn currency_cents() -> Self {
        Self {
            min_fraction_digits: 2,
            max_fraction_digits: 2,
            prefix: "$".to_string(),
            ..Self::default()
        }
    }

    /// Whole-number percentage display ("75%")
    pub fn percent() -> Self {
        Self {
            suffix: "%".to_string(),
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_fraction_digits(mut self, min: usize, max: usize) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    /// Render `value` as prefix + formatted number + suffix
    pub fn format(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, self.format_number(value), self.suffix)
    }

    fn format_number(&self, value: f64) -> String {
        let max_digits = self.max_fraction_digits.max(self.min_fraction_digits);
        let rounded = format!("{:.*}", max_digits, value);

        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (rounded.as_str(), ""),
        };

        // Trim trailing zeros, but never below the minimum digit count
        let mut frac: &str = frac_part;
        while frac.len() > self.min_fraction_digits && frac.ends_with('0') {
            frac = &frac[..frac.len() - 1];
        }

        let int_grouped = if self.grouping {
            group_thousands(int_part)
        } else {
            int_part.to_string()
        };

        if frac.is_empty() {
            int_grouped
        } else {
            format!("{}.{}", int_grouped, frac)
        }
    }
}

/// Insert commas every three digits, preserving a leading sign
fn group_thousands(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_integer_display() {
        let format = NumberFormat::default();
        assert_eq!(format.format(0.0), "0");
        assert_eq!(format.format(42.0), "42");
        assert_eq!(format.format(999.0), "999");
    }

    #[test]
    fn test_thousands_grouping() {
        let format = NumberFormat::default();
        assert_eq!(format.format(1000.0), "1,000");
        assert_eq!(format.format(42500.0), "42,500");
        assert_eq!(format.format(256320.0), "256,320");
        assert_eq!(format.format(1234567.0), "1,234,567");
    }

    #[test]
    fn test_prefix_and_suffix() {
        assert_eq!(NumberFormat::currency().format(42500.0), "$42,500");
        assert_eq!(NumberFormat::percent().format(75.0), "75%");

        let custom = NumberFormat::default().with_prefix("₹").with_suffix(" / mo");
        assert_eq!(custom.format(8200.0), "₹8,200 / mo");
    }

    #[test]
    fn test_fraction_digits() {
        let cents = NumberFormat::currency_cents();
        assert_eq!(cents.format(1299.0), "$1,299.00");
        assert_eq!(cents.format(15.5), "$15.50");

        // Max digits round, min digits keep
        let flexible = NumberFormat::default().with_fraction_digits(0, 2);
        assert_eq!(flexible.format(10.0), "10");
        assert_eq!(flexible.format(10.25), "10.25");
        assert_eq!(flexible.format(10.10), "10.1");
    }

    #[test]
    fn test_rounding_to_max_digits() {
        let format = NumberFormat::default();
        assert_eq!(format.format(93.75), "94");
        assert_eq!(format.format(52.4), "52");

        let one_digit = NumberFormat::default().with_fraction_digits(1, 1);
        assert_eq!(one_digit.format(53.333), "53.3");
    }

    #[test]
    fn test_negative_values() {
        let format = NumberFormat::default();
        assert_eq!(format.format(-120.0), "-120");
        assert_eq!(format.format(-42500.0), "-42,500");

        // Sign stays attached to the number, inside the prefix
        assert_eq!(NumberFormat::currency().format(-120.0), "$-120");
    }

    #[test]
    fn test_grouping_can_be_disabled() {
        let format = NumberFormat {
            grouping: false,
            ..NumberFormat::default()
        };
        assert_eq!(format.format(42500.0), "42500");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let format = NumberFormat::currency_cents();
        let first = format.format(2200.456);
        let second = format.format(2200.456);
        assert_eq!(first, second);

        let percent = NumberFormat::percent();
        assert_eq!(percent.format(93.75), percent.format(93.75));
    }

    #[test]
    fn test_min_above_max_is_treated_as_max() {
        let format = NumberFormat::default().with_fraction_digits(2, 0);
        assert_eq!(format.format(10.5), "10.50");
    }
}
