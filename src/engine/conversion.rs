// ============================================================================
// Conversion and Rendering
// Currency conversion, unit decomposition and plain decimal output
// ============================================================================

use super::scale::{amount_at_scale, scale_factor, widened_scale};
use crate::calculator::Calculator;
use crate::domain::{Currency, Money, MoneyError, MoneyResult, Ratio};

impl<C: Calculator> Money<C> {
    /// Convert into `target` at an exact `rate`.
    ///
    /// The amount is multiplied by the rate and the scales add up, so the
    /// result is exact. It is then raised to the target's exponent when that
    /// is larger.
    ///
    /// # Example
    /// ```text
    /// 10.00 USD at rate 0.89 -> 1000 * 89 = 89000 at scale 4 -> 8.9000 EUR
    /// ```
    pub fn convert(&self, target: &Currency, rate: impl Into<Ratio<C::Amount>>) -> MoneyResult<Self> {
        let rate = rate.into();
        let calc = &self.calculator;
        let scale = widened_scale(self.scale, rate.scale)?;
        let amount = calc.multiply(&self.amount, &rate.amount)?;
        let converted = Money::from_parts(calc.clone(), amount, target.clone(), scale);

        if target.exponent > converted.scale {
            let amount = amount_at_scale(&converted, target.exponent)?;
            return Ok(converted.rewrap(amount, target.exponent));
        }
        Ok(converted)
    }

    /// Split the amount into whole currency units and remaining sub-units.
    ///
    /// Both parts carry the sign of the amount: -10.50 is `(-10, -50)`.
    pub fn to_units(&self) -> MoneyResult<(C::Amount, C::Amount)> {
        let calc = &self.calculator;
        let unit = scale_factor(calc, self.currency.base, self.scale)?;
        Ok(calc.divide_with_remainder(&self.amount, &unit)?)
    }

    /// Plain decimal rendering at the value's own scale, e.g. `"-10.50"`.
    ///
    /// This is not locale-aware formatting.
    ///
    /// # Errors
    /// `NonDecimalCurrency` when the currency base is not 10.
    pub fn to_decimal(&self) -> MoneyResult<String> {
        if self.currency.base != 10 {
            return Err(MoneyError::NonDecimalCurrency {
                code: self.currency.code().to_string(),
                base: self.currency.base,
            });
        }

        let calc = &self.calculator;
        let (units, sub_units) = self.to_units()?;
        if self.scale == 0 {
            return Ok(units.to_string());
        }

        let sign = if calc.is_negative(&self.amount) { "-" } else { "" };
        let units = calc.absolute(&units)?;
        let sub_units = calc.absolute(&sub_units)?.to_string();
        Ok(format!(
            "{sign}{units}.{sub_units:0>width$}",
            width = self.scale as usize
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{DecimalCalculator, I64Calculator};
    use crate::domain::iso4217::{EUR, JPY, MGA, USD};
    use rust_decimal_macros::dec;

    fn money(amount: i64, currency: Currency, scale: u32) -> Money<I64Calculator> {
        Money::from_parts(I64Calculator, amount, currency, scale)
    }

    #[test]
    fn test_convert() {
        let eur = money(1000, USD, 2).convert(&EUR, Ratio::new(89i64, 2)).unwrap();
        assert_eq!(eur, money(89_000, EUR, 4));
        assert_eq!(eur.to_decimal().unwrap(), "8.9000");
    }

    #[test]
    fn test_convert_raises_to_target_exponent() {
        // 500 JPY at 0.0067 -> 3.35 USD, scale already 4
        let usd = money(500, JPY, 0).convert(&USD, Ratio::new(67i64, 4)).unwrap();
        assert_eq!(usd, money(33_500, USD, 4));

        // 5 JPY at integer rate 1 into USD -> raised to exponent 2
        let usd = money(5, JPY, 0).convert(&USD, 1i64).unwrap();
        assert_eq!(usd, money(500, USD, 2));
    }

    #[test]
    fn test_convert_scale_overflow() {
        assert_eq!(
            money(1, USD, u32::MAX).convert(&EUR, Ratio::new(1i64, 1)),
            Err(MoneyError::Arithmetic(crate::numeric::NumericError::Overflow))
        );
    }

    #[test]
    fn test_to_units() {
        assert_eq!(money(1050, USD, 2).to_units().unwrap(), (10, 50));
        assert_eq!(money(-1050, USD, 2).to_units().unwrap(), (-10, -50));
        assert_eq!(money(13, MGA, 1).to_units().unwrap(), (2, 3));
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(money(1050, USD, 2).to_decimal().unwrap(), "10.50");
        assert_eq!(money(5, USD, 2).to_decimal().unwrap(), "0.05");
        assert_eq!(money(-5, USD, 2).to_decimal().unwrap(), "-0.05");
        assert_eq!(money(-1234, USD, 1).to_decimal().unwrap(), "-123.4");
        assert_eq!(money(42, JPY, 0).to_decimal().unwrap(), "42");
        assert!(matches!(
            money(13, MGA, 1).to_decimal(),
            Err(MoneyError::NonDecimalCurrency { base: 5, .. })
        ));
    }

    #[test]
    fn test_to_decimal_with_decimal_backend() {
        let value = Money::from_parts(DecimalCalculator, dec!(1050), USD, 2);
        assert_eq!(value.to_decimal().unwrap(), "10.50");

        // Trailing zero digits in the stored amount do not leak into the output
        let padded = Money::from_parts(DecimalCalculator, dec!(1050.00), USD, 2);
        assert_eq!(padded.to_decimal().unwrap(), "10.50");
        assert_eq!(padded.to_string(), "10.50 USD");
    }
}
