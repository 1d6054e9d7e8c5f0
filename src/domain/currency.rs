// ============================================================================
// Currency Record
// Code/base/exponent triple plus a small reference registry
// ============================================================================

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currency descriptor.
///
/// Only `code` takes part in compatibility checks. `base` is the radix used
/// for scale shifts and `exponent` is the natural number of minor-unit digits
/// (2 for USD, 0 for JPY). Neither is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency {
    /// Symbolic name (e.g., "USD")
    pub code: Cow<'static, str>,

    /// Radix for scale conversions, almost always 10
    pub base: u32,

    /// Natural number of minor-unit digits
    pub exponent: u32,
}

impl Currency {
    /// Create a currency with a runtime code.
    pub fn new(code: impl Into<Cow<'static, str>>, base: u32, exponent: u32) -> Self {
        Self {
            code: code.into(),
            base,
            exponent,
        }
    }

    /// Const constructor for registry entries.
    pub const fn from_static(code: &'static str, base: u32, exponent: u32) -> Self {
        Self {
            code: Cow::Borrowed(code),
            base,
            exponent,
        }
    }

    /// Currency code as a string slice.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether two records denote the same currency.
    #[inline]
    pub fn same_code(&self, other: &Currency) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Reference ISO 4217 records.
///
/// This is not an exhaustive registry; callers with other needs build their
/// own [`Currency`] values.
pub mod iso4217 {
    use super::Currency;

    /// Bahraini dinar
    pub const BHD: Currency = Currency::from_static("BHD", 10, 3);
    /// Swiss franc
    pub const CHF: Currency = Currency::from_static("CHF", 10, 2);
    /// Unidad de Fomento
    pub const CLF: Currency = Currency::from_static("CLF", 10, 4);
    /// Euro
    pub const EUR: Currency = Currency::from_static("EUR", 10, 2);
    /// Pound sterling
    pub const GBP: Currency = Currency::from_static("GBP", 10, 2);
    /// Indonesian rupiah
    pub const IDR: Currency = Currency::from_static("IDR", 10, 2);
    /// Japanese yen
    pub const JPY: Currency = Currency::from_static("JPY", 10, 0);
    /// Kuwaiti dinar
    pub const KWD: Currency = Currency::from_static("KWD", 10, 3);
    /// Malagasy ariary (one ariary is five iraimbilanja)
    pub const MGA: Currency = Currency::from_static("MGA", 5, 1);
    /// Mauritanian ouguiya (one ouguiya is five khoums)
    pub const MRU: Currency = Currency::from_static("MRU", 5, 1);
    /// Tajikistani somoni
    pub const TJS: Currency = Currency::from_static("TJS", 10, 2);
    /// United States dollar
    pub const USD: Currency = Currency::from_static("USD", 10, 2);

    /// Every record in this registry
    pub const ALL: &[Currency] = &[BHD, CHF, CLF, EUR, GBP, IDR, JPY, KWD, MGA, MRU, TJS, USD];

    /// Look up a record by code (case-insensitive).
    pub fn lookup(code: &str) -> Option<Currency> {
        ALL.iter()
            .find(|currency| currency.code.eq_ignore_ascii_case(code))
            .cloned()
    }
}
