//! The currency module holds the Currency model, an immutable description of
//! a denomination. It knows nothing about exchange rates or other currencies.

use getset::{CopyGetters, Getters};
use std::fmt;

/// Describes a currency: its name, ISO 4217 code, optional display symbol,
/// and the number of fractional digits amounts of it are written with.
///
/// Once constructed, a `Currency` never changes (no setters are generated).
/// No field is validated on construction: an empty code or zero digits is
/// accepted exactly as given.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into))]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Currency {
    /// The English name of the currency
    #[getset(get = "pub")]
    name: String,
    /// The ISO 4217 three-letter code for the currency
    #[getset(get = "pub")]
    code: String,
    /// Optional symbol used to designate the currency
    #[getset(get = "pub")]
    #[builder(default)]
    symbol: Option<String>,
    /// Number of fractional digits shown when formatting amounts
    #[getset(get_copy = "pub")]
    #[builder(default = "2")]
    digits: u32,
}

impl Currency {
    /// Create a new currency from its parts, verbatim.
    pub fn new<T: Into<String>>(name: T, code: T, symbol: Option<T>, digits: u32) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            symbol: symbol.map(|x| x.into()),
            digits,
        }
    }

    /// Grab a builder, for when the defaults (`symbol: None`, `digits: 2`)
    /// are what you want anyway.
    pub fn builder() -> CurrencyBuilder {
        CurrencyBuilder::default()
    }
}

impl fmt::Display for Currency {
    /// Renders the currency code, or the symbol in parentheses if the
    /// currency has one. Note that this is the currency's *own* rendering,
    /// separate from how [`Money`][crate::Money] formats an amount.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "({})", symbol),
            None => write!(f, "{}", self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_is_verbatim() {
        let usd = Currency::new("US Dollar", "USD", Some("$"), 2);
        assert_eq!(usd.name(), "US Dollar");
        assert_eq!(usd.code(), "USD");
        assert_eq!(usd.symbol(), &Some("$".to_string()));
        assert_eq!(usd.digits(), 2);

        // nothing gets "fixed up" for us
        let junk = Currency::new("", "", None, 0);
        assert_eq!(junk.name(), "");
        assert_eq!(junk.code(), "");
        assert_eq!(junk.symbol(), &None);
        assert_eq!(junk.digits(), 0);
    }

    #[test]
    fn builder_defaults() {
        let jpy = Currency::builder()
            .name("Japanese Yen")
            .code("JPY")
            .build().unwrap();
        assert_eq!(jpy, Currency::new("Japanese Yen", "JPY", None, 2));

        let eur = Currency::builder()
            .name("Euro")
            .code("EUR")
            .symbol("€".to_string())
            .build().unwrap();
        assert_eq!(eur.symbol(), &Some("€".to_string()));
        assert_eq!(eur.digits(), 2);
    }

    #[test]
    fn equality_is_fieldwise() {
        let usd1 = Currency::new("US Dollar", "USD", Some("$"), 2);
        let usd2 = Currency::new("US Dollar", "USD", Some("$"), 2);
        assert_eq!(usd1, usd1);
        assert_eq!(usd1, usd2);
        assert_eq!(usd2, usd1);

        // changing any single field breaks equality
        assert_ne!(usd1, Currency::new("US Peso", "USD", Some("$"), 2));
        assert_ne!(usd1, Currency::new("US Dollar", "USX", Some("$"), 2));
        assert_ne!(usd1, Currency::new("US Dollar", "USD", None, 2));
        assert_ne!(usd1, Currency::new("US Dollar", "USD", Some("$"), 3));
    }

    #[test]
    fn displays_code_or_symbol() {
        let eur = Currency::new("Euro", "EUR", Some("€"), 2);
        assert_eq!(format!("{}", eur), "(€)");

        let eur_plain = Currency::new("Euro", "EUR", None, 2);
        assert_eq!(format!("{}", eur_plain), "EUR");
    }
}
