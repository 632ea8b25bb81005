use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;

/// One raw input row: column name to cell text.
pub type RawRow = HashMap<String, String>;

// ---------------------------------------------------------------------------
// Alias rules
// ---------------------------------------------------------------------------

/// A logical field and the columns that may carry it, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

pub const TICKER: FieldRule = FieldRule {
    name: "ticker",
    aliases: &["ticker"],
};
pub const ISIN: FieldRule = FieldRule {
    name: "isin",
    aliases: &["isin"],
};
pub const ISSUER: FieldRule = FieldRule {
    name: "issuer",
    aliases: &["issuer", "name"],
};
pub const CURRENCY: FieldRule = FieldRule {
    name: "currency",
    aliases: &["currency"],
};
pub const COUPON: FieldRule = FieldRule {
    name: "coupon",
    aliases: &["coupon"],
};
pub const MATURITY: FieldRule = FieldRule {
    name: "maturity",
    aliases: &["maturity", "maturity_date"],
};
pub const PRICE: FieldRule = FieldRule {
    name: "price",
    aliases: &["price", "price_clean"],
};
pub const YTM: FieldRule = FieldRule {
    name: "ytm",
    aliases: &["ytm"],
};
pub const RUNNING_YIELD: FieldRule = FieldRule {
    name: "running_yield",
    aliases: &["running_yield"],
};

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Outcome of reading a numeric field from a raw row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The cell parsed as a number.
    Present(Decimal),
    /// No alias carried a non-blank cell.
    Absent,
    /// A cell was found but is not numeric; holds the offending text.
    Invalid(String),
}

impl FieldValue {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            FieldValue::Present(v) => Some(*v),
            _ => None,
        }
    }

    /// The value used for computation when lenient zero-filling applies.
    pub fn or_zero(&self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldValue::Invalid(_))
    }
}

impl FieldRule {
    /// First non-blank cell among the aliases, trimmed.
    pub fn resolve<'a>(&self, row: &'a RawRow) -> Option<&'a str> {
        self.aliases
            .iter()
            .filter_map(|alias| row.get(*alias))
            .map(|cell| cell.trim())
            .find(|cell| !cell.is_empty())
    }

    /// Resolved cell text, or an empty string.
    pub fn text(&self, row: &RawRow) -> String {
        self.resolve(row).unwrap_or_default().to_string()
    }

    /// Resolved cell parsed as a number.
    pub fn number(&self, row: &RawRow) -> FieldValue {
        match self.resolve(row) {
            None => FieldValue::Absent,
            Some(cell) => match parse_number(cell) {
                Some(v) => FieldValue::Present(v),
                None => FieldValue::Invalid(cell.to_string()),
            },
        }
    }
}

/// Parse plain or scientific decimal notation.
pub fn parse_number(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_alias_wins() {
        let r = row(&[("price", "99.5"), ("price_clean", "98")]);
        assert_eq!(PRICE.number(&r), FieldValue::Present(dec!(99.5)));
    }

    #[test]
    fn test_blank_alias_falls_through() {
        let r = row(&[("price", "  "), ("price_clean", "98.25")]);
        assert_eq!(PRICE.number(&r), FieldValue::Present(dec!(98.25)));

        let r = row(&[("issuer", ""), ("name", "Acme Corp")]);
        assert_eq!(ISSUER.text(&r), "Acme Corp");
    }

    #[test]
    fn test_invalid_cell_does_not_fall_through() {
        let r = row(&[("price", "n/a"), ("price_clean", "98")]);
        assert_eq!(PRICE.number(&r), FieldValue::Invalid("n/a".into()));
        assert_eq!(PRICE.number(&r).or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_absent_when_no_alias_present() {
        let r = row(&[("ticker", "ABC")]);
        assert_eq!(COUPON.number(&r), FieldValue::Absent);
        assert_eq!(CURRENCY.text(&r), "");
    }

    #[test]
    fn test_parse_number_forms() {
        assert_eq!(parse_number("4.25"), Some(dec!(4.25)));
        assert_eq!(parse_number(" -1 "), Some(dec!(-1)));
        assert_eq!(parse_number("1e2"), Some(dec!(100)));
        assert_eq!(parse_number("0"), Some(Decimal::ZERO));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let r = row(&[("Price", "99")]);
        assert_eq!(PRICE.number(&r), FieldValue::Absent);
    }
}
