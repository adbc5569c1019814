//! Prices

use std::{fmt, num::NonZeroU32};

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::items::CartLineItem;

/// Number of decimal places shown to customers.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Errors raised when constructing a [`UnitPrice`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The amount was below zero.
    #[error("unit price cannot be negative: {0}")]
    Negative(Decimal),
}

/// Price of a single unit; never negative.
///
/// Serialized as a JSON number, like the storefront's persisted carts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitPrice(Decimal);

impl UnitPrice {
    /// A free item.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }

        Ok(Self(amount.abs()))
    }

    /// Price of `cents` hundredths, e.g. `from_cents(1999)` is `19.99`.
    pub const fn from_cents(cents: u32) -> Self {
        Self(Decimal::from_parts(cents, 0, 0, false, 2))
    }

    /// Price of a whole number of currency units.
    pub const fn from_units(units: u32) -> Self {
        Self(Decimal::from_parts(units, 0, 0, false, 0))
    }

    /// The amount.
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// `self * quantity`, saturating at [`Decimal::MAX`] instead of overflowing.
    pub fn times(self, quantity: NonZeroU32) -> Decimal {
        self.0.saturating_mul(Decimal::from(quantity.get()))
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for UnitPrice {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<UnitPrice> for Decimal {
    fn from(price: UnitPrice) -> Self {
        price.0
    }
}

impl Serialize for UnitPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for UnitPrice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;

        Self::new(amount).map_err(de::Error::custom)
    }
}

/// Calculates the total price of a list of line items.
///
/// The result is not rounded; rounding happens only when the amount is displayed. Totals
/// too large for a [`Decimal`] saturate at [`Decimal::MAX`].
pub fn total(items: &[CartLineItem]) -> Decimal {
    items
        .iter()
        .map(CartLineItem::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Rounds an amount to two decimal places, midpoint away from zero.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Wraps a display-rounded amount in the store currency.
pub fn to_money(amount: Decimal, currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_decimal(round_for_display(amount), currency)
}

/// Formats an amount for display, e.g. `$44.98`.
///
/// Currencies whose symbol is conventionally written after the amount are rendered with
/// their ISO code instead, e.g. `12.50 SEK`.
pub fn format_price(amount: Decimal, currency: &Currency) -> String {
    let rounded = round_for_display(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = rounded.abs();

    if currency.symbol_first {
        format!("{sign}{}{magnitude:.2}", currency.symbol)
    } else {
        format!("{sign}{magnitude:.2} {}", currency.iso_alpha_code)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn item(price: UnitPrice, quantity: u32) -> CartLineItem {
        CartLineItem::new(
            format!("sku-{price}-{quantity}"),
            "Item",
            price,
            "/item.png",
            NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN),
        )
    }

    #[test]
    fn test_total_price() {
        let items = [
            item(UnitPrice::from_cents(1999), 2),
            item(UnitPrice::from_cents(500), 1),
        ];

        assert_eq!(total(&items), Decimal::new(4498, 2));
    }

    #[test]
    fn test_total_price_empty() {
        assert_eq!(total(&[]), Decimal::ZERO);
    }

    #[test]
    fn total_keeps_full_precision() -> TestResult {
        let items = [item(UnitPrice::new(Decimal::new(3333, 3))?, 3)];

        assert_eq!(total(&items), Decimal::new(9999, 3));
        assert_eq!(round_for_display(total(&items)), Decimal::new(1000, 2));

        Ok(())
    }

    #[test]
    fn repeated_additions_do_not_compound_rounding() -> TestResult {
        let price = UnitPrice::new(Decimal::new(1005, 3))?;
        let items: Vec<_> = (0..3).map(|_| item(price, 1)).collect();

        assert_eq!(total(&items), Decimal::new(3015, 3));
        assert_eq!(round_for_display(total(&items)), Decimal::new(302, 2));

        Ok(())
    }

    #[test]
    fn oversized_totals_saturate() -> TestResult {
        let huge = UnitPrice::new(Decimal::from_i128_with_scale(10_i128.pow(28), 0))?;
        let items = [item(huge, 10), item(huge, u32::MAX)];

        assert_eq!(items.first().map(CartLineItem::line_total), Some(Decimal::MAX));
        assert_eq!(total(&items), Decimal::MAX);
        assert!(format_price(total(&items), USD).starts_with('$'));

        Ok(())
    }

    #[test]
    fn negative_unit_price_is_rejected() {
        assert_eq!(
            UnitPrice::new(Decimal::from(-50)),
            Err(PriceError::Negative(Decimal::from(-50)))
        );
        assert_eq!(UnitPrice::new(Decimal::ZERO), Ok(UnitPrice::ZERO));
    }

    #[test]
    fn negative_unit_price_fails_to_decode() {
        assert!(serde_json::from_value::<UnitPrice>(json!(-5)).is_err());
        assert!(serde_json::from_value::<UnitPrice>(json!(-0.01)).is_err());
    }

    #[test]
    fn unit_price_round_trips_as_number() -> TestResult {
        let price: UnitPrice = serde_json::from_value(json!(19.99))?;

        assert_eq!(price, UnitPrice::from_cents(1999));
        assert_eq!(serde_json::to_value(price)?, json!(19.99));

        Ok(())
    }

    #[test]
    fn format_price_usd() {
        assert_eq!(format_price(Decimal::new(4498, 2), USD), "$44.98");
        assert_eq!(format_price(Decimal::from(30), USD), "$30.00");
    }

    #[test]
    fn format_price_gbp_rounds_half_away_from_zero() {
        assert_eq!(format_price(Decimal::new(1_005, 3), GBP), "£1.01");
    }

    #[test]
    fn format_price_negative() {
        assert_eq!(format_price(Decimal::new(-999, 2), USD), "-$9.99");
    }

    #[test]
    fn to_money_rounds_amount() {
        let money = to_money(Decimal::new(12_345, 3), USD);

        assert_eq!(*money.amount(), Decimal::new(1235, 2));
        assert_eq!(money.currency(), USD);
    }
}
