use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Currencies a salary can be stored or displayed in.
///
/// Salary grids and benchmark figures are always stored in [`Currency::BASE`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    #[strum(ascii_case_insensitive, serialize = "EUR")]
    Eur,
    #[strum(ascii_case_insensitive, serialize = "USD")]
    Usd,
    #[strum(ascii_case_insensitive, serialize = "GBP")]
    Gbp,
    #[strum(ascii_case_insensitive, serialize = "BRL")]
    Brl,
}

impl Currency {
    pub const BASE: Currency = Currency::Eur;

    pub const ALL: [Currency; 4] = [Currency::Eur, Currency::Usd, Currency::Gbp, Currency::Brl];

    /// Value of one unit of the base currency expressed in this currency's rate table.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Eur => 1.0,
            Currency::Usd => 0.92,
            Currency::Gbp => 1.18,
            Currency::Brl => 0.18,
        }
    }
}

/// Converts `amount` from one currency to another through the base currency.
///
/// Same-currency conversions return the amount untouched so that repeated
/// no-op conversions never drift.
pub fn convert(amount: u64, from: Currency, to: Currency) -> u64 {
    if from == to {
        return amount;
    }
    let base = amount as f64 / from.rate();
    round_half_up(base * to.rate()) as u64
}

/// Rounds to the nearest integer, ties towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds a percentage to one decimal place.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}
