// ============================================================================
// Money Factory
// Builds money values bound to one calculator and a set of defaults
// ============================================================================

use crate::calculator::Calculator;
use crate::domain::config::FactoryConfig;
use crate::domain::{Currency, Money, MoneyError, MoneyResult, MoneySnapshot};
use crate::guards::{assert_valid_amount, assert_valid_scale};

// ============================================================================
// Construction Request
// ============================================================================

/// Construction request handed to [`MoneyFactory::create`].
///
/// Currency and scale are optional and fall back to the factory defaults; a
/// missing scale ultimately falls back to the currency exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyOptions<A> {
    pub amount: A,
    pub currency: Option<Currency>,
    pub scale: Option<i64>,
}

impl<A> MoneyOptions<A> {
    pub fn new(amount: A) -> Self {
        Self {
            amount,
            currency: None,
            scale: None,
        }
    }

    /// Builder method: Set the currency
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Builder method: Set the scale
    pub fn scale(mut self, scale: i64) -> Self {
        self.scale = Some(scale);
        self
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Entry point for creating [`Money`] values.
///
/// # Example
/// ```
/// use dinero::prelude::*;
///
/// let factory = MoneyFactoryBuilder::new(I64Calculator)
///     .default_currency(iso4217::USD)
///     .build()
///     .unwrap();
///
/// let price = factory.create(MoneyOptions::new(1050)).unwrap();
/// let tip = factory.create(MoneyOptions::new(5).scale(0)).unwrap();
/// assert_eq!(price.add(&tip).unwrap().to_decimal().unwrap(), "15.50");
/// ```
#[derive(Debug, Clone)]
pub struct MoneyFactory<C: Calculator> {
    calculator: C,
    default_currency: Option<Currency>,
    default_scale: Option<u32>,
}

impl<C: Calculator> MoneyFactory<C> {
    /// Factory with no defaults: every request must name its currency.
    pub fn new(calculator: C) -> Self {
        Self {
            calculator,
            default_currency: None,
            default_scale: None,
        }
    }

    #[inline]
    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    pub fn default_currency(&self) -> Option<&Currency> {
        self.default_currency.as_ref()
    }

    /// Create a value, running the amount and scale guards.
    ///
    /// # Errors
    /// - `MissingCurrency` when neither the request nor the factory names one
    /// - `InvalidScale` for a negative or oversized scale
    /// - `InvalidAmount` when the backend cannot hold the amount as whole units
    pub fn create(&self, options: MoneyOptions<C::Amount>) -> MoneyResult<Money<C>> {
        let currency = options
            .currency
            .or_else(|| self.default_currency.clone())
            .ok_or(MoneyError::MissingCurrency)?;

        let scale = match options.scale {
            Some(scale) => assert_valid_scale(scale)?,
            None => self.default_scale.unwrap_or(currency.exponent),
        };

        assert_valid_amount(&self.calculator, &options.amount)?;

        Ok(Money::from_parts(
            self.calculator.clone(),
            self.calculator.canonicalize(options.amount),
            currency,
            scale,
        ))
    }

    /// Create a value from a whole-number string of minor units.
    ///
    /// # Errors
    /// `InvalidAmount` when the string does not parse into the backend type,
    /// plus everything [`create`](Self::create) can return.
    pub fn parse(
        &self,
        amount: &str,
        currency: Option<Currency>,
        scale: Option<i64>,
    ) -> MoneyResult<Money<C>> {
        let parsed = self
            .calculator
            .parse(amount)
            .map_err(|reason| MoneyError::InvalidAmount {
                amount: amount.to_string(),
                reason,
            })?;

        self.create(MoneyOptions {
            amount: parsed,
            currency,
            scale,
        })
    }

    /// Create a value from a host integer of minor units.
    pub fn from_minor_units(
        &self,
        amount: i128,
        currency: Option<Currency>,
        scale: Option<i64>,
    ) -> MoneyResult<Money<C>> {
        let converted = self
            .calculator
            .from_i128(amount)
            .map_err(|reason| MoneyError::InvalidAmount {
                amount: amount.to_string(),
                reason,
            })?;

        self.create(MoneyOptions {
            amount: converted,
            currency,
            scale,
        })
    }

    /// Rebuild a value from its snapshot, re-running the amount guard.
    pub fn from_snapshot(&self, snapshot: MoneySnapshot<C::Amount>) -> MoneyResult<Money<C>> {
        assert_valid_amount(&self.calculator, &snapshot.amount)?;
        Ok(Money::from_parts(
            self.calculator.clone(),
            self.calculator.canonicalize(snapshot.amount),
            snapshot.currency,
            snapshot.scale,
        ))
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a money factory from configuration
///
/// # Example
/// ```
/// use dinero::prelude::*;
/// use dinero::engine::create_from_config;
///
/// let config = FactoryConfig::for_currency(iso4217::EUR);
/// let factory = create_from_config(DecimalCalculator, config).unwrap();
/// assert_eq!(factory.calculator().name(), "decimal");
/// ```
pub fn create_from_config<C: Calculator>(calculator: C, config: FactoryConfig) -> MoneyResult<MoneyFactory<C>> {
    let default_scale = config.validate()?;

    tracing::debug!(
        calculator = calculator.name(),
        currency = ?config.default_currency.as_ref().map(Currency::code),
        scale = ?default_scale,
        "money factory configured"
    );

    Ok(MoneyFactory {
        calculator,
        default_currency: config.default_currency,
        default_scale,
    })
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating money factories with a fluent API
pub struct MoneyFactoryBuilder<C: Calculator> {
    calculator: C,
    config: FactoryConfig,
}

impl<C: Calculator> MoneyFactoryBuilder<C> {
    /// Create a new builder around the given calculator
    pub fn new(calculator: C) -> Self {
        Self {
            calculator,
            config: FactoryConfig::new(),
        }
    }

    /// Currency used when a request names none
    pub fn default_currency(mut self, currency: Currency) -> Self {
        self.config = self.config.with_default_currency(currency);
        self
    }

    /// Scale used when a request names none
    pub fn default_scale(mut self, scale: i64) -> Self {
        self.config = self.config.with_default_scale(scale);
        self
    }

    /// Validate the configuration and build the factory
    pub fn build(self) -> MoneyResult<MoneyFactory<C>> {
        create_from_config(self.calculator, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{BigIntCalculator, DecimalCalculator, I64Calculator};
    use crate::domain::iso4217::{EUR, JPY, USD};
    use crate::numeric::NumericError;
    use num_bigint::BigInt;
    use rust_decimal_macros::dec;

    fn usd_factory() -> MoneyFactory<I64Calculator> {
        MoneyFactoryBuilder::new(I64Calculator)
            .default_currency(USD)
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults_apply() {
        let money = usd_factory().create(MoneyOptions::new(1050)).unwrap();
        assert_eq!(money.currency(), &USD);
        assert_eq!(money.scale(), 2);
    }

    #[test]
    fn test_explicit_options_override_defaults() {
        let money = usd_factory()
            .create(MoneyOptions::new(5).currency(JPY).scale(3))
            .unwrap();
        assert_eq!(money.currency(), &JPY);
        assert_eq!(money.scale(), 3);
    }

    #[test]
    fn test_default_scale() {
        let factory = MoneyFactoryBuilder::new(I64Calculator)
            .default_currency(USD)
            .default_scale(4)
            .build()
            .unwrap();
        assert_eq!(factory.create(MoneyOptions::new(1)).unwrap().scale(), 4);
        assert_eq!(factory.default_currency(), Some(&USD));
    }

    #[test]
    fn test_missing_currency() {
        let factory = MoneyFactory::new(I64Calculator);
        assert_eq!(
            factory.create(MoneyOptions::new(1)),
            Err(MoneyError::MissingCurrency)
        );
        assert!(factory.create(MoneyOptions::new(1).currency(EUR)).is_ok());
    }

    #[test]
    fn test_invalid_scale() {
        assert_eq!(
            usd_factory().create(MoneyOptions::new(1).scale(-3)),
            Err(MoneyError::InvalidScale { scale: -3 })
        );
        assert!(MoneyFactoryBuilder::new(I64Calculator)
            .default_scale(-1)
            .build()
            .is_err());
    }

    #[test]
    fn test_invalid_amount() {
        let factory = MoneyFactoryBuilder::new(DecimalCalculator)
            .default_currency(USD)
            .build()
            .unwrap();
        assert!(matches!(
            factory.create(MoneyOptions::new(dec!(10.5))),
            Err(MoneyError::InvalidAmount { .. })
        ));
        assert_eq!(
            usd_factory().parse("99999999999999999999", None, None),
            Err(MoneyError::InvalidAmount {
                amount: "99999999999999999999".to_string(),
                reason: NumericError::Overflow
            })
        );
        assert!(matches!(
            usd_factory().from_minor_units(i128::MAX, None, None),
            Err(MoneyError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_parse_bigint() {
        let factory = MoneyFactoryBuilder::new(BigIntCalculator)
            .default_currency(USD)
            .build()
            .unwrap();
        let money = factory
            .parse("99999999999999999999", None, Some(2))
            .unwrap();
        assert_eq!(
            *money.amount(),
            "99999999999999999999".parse::<BigInt>().unwrap()
        );
    }

    #[test]
    fn test_decimal_trailing_zeros_are_canonicalized() {
        let factory = MoneyFactoryBuilder::new(DecimalCalculator)
            .default_currency(USD)
            .build()
            .unwrap();
        let padded = factory.create(MoneyOptions::new(dec!(1050.00))).unwrap();
        let plain = factory.create(MoneyOptions::new(dec!(1050))).unwrap();

        assert_eq!(padded, plain);
        assert_eq!(padded.to_decimal().unwrap(), "10.50");
        assert_eq!(padded.to_string(), "10.50 USD");
        let (units, sub_units) = padded.to_units().unwrap();
        assert_eq!((units.to_string(), sub_units.to_string()), ("10".to_string(), "50".to_string()));

        let snapshot = MoneySnapshot {
            amount: dec!(-7.000),
            currency: USD,
            scale: 2,
        };
        assert_eq!(factory.from_snapshot(snapshot).unwrap().to_decimal().unwrap(), "-0.07");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let factory = usd_factory();
        let money = factory.from_minor_units(-250, None, Some(3)).unwrap();
        let rebuilt = factory.from_snapshot(money.to_snapshot()).unwrap();
        assert_eq!(rebuilt, money);
    }
}
