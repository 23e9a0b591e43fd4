// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Value types carried by contract nodes.
//!
//! Nodes reference three kinds of external values:
//!
//! - [`Currency`]: the settlement currency of a `One` node. The registry is
//!   closed and ledger-encoded as a small integer index.
//! - [`Observable`]: the address of a gateway that resolves a runtime value
//!   at execution time. Boolean gateways condition `If` nodes, integer
//!   gateways scale `ScaleObs` nodes.
//! - [`Timestamp`]: Unix-epoch seconds bounding a `Timebound` window.
//!
//! None of these are resolved here; the tree only records references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Seconds since the Unix epoch.
pub type Timestamp = u64;

// ============================================================================
// Currency
// ============================================================================

/// A settlement currency recognized by the marketplace.
///
/// The set is closed: contracts are ledger-encoded with the currency as a
/// small integer index, so adding a currency is a coordinated change across
/// every component that stores or transmits contracts. The index mapping in
/// [`Currency::index`] and [`Currency::from_index`] is part of that wire
/// contract and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Japanese yen.
    Jpy,
    /// Renminbi.
    Cny,
    /// Singapore dollar.
    Sgd,
}

/// All currencies in ledger-index order.
pub const CURRENCIES: [Currency; 6] = [
    Currency::Usd,
    Currency::Eur,
    Currency::Gbp,
    Currency::Jpy,
    Currency::Cny,
    Currency::Sgd,
];

impl Currency {
    /// Decode a currency from its ledger index.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::CurrencyIndexOutOfRange`] for indices outside
    /// the registry.
    pub fn from_index(index: u8) -> Result<Self, ValueError> {
        CURRENCIES
            .get(usize::from(index))
            .copied()
            .ok_or(ValueError::CurrencyIndexOutOfRange(index))
    }

    /// The ledger index of this currency.
    pub fn index(self) -> u8 {
        match self {
            Currency::Usd => 0,
            Currency::Eur => 1,
            Currency::Gbp => 2,
            Currency::Jpy => 3,
            Currency::Cny => 4,
            Currency::Sgd => 5,
        }
    }

    /// The ISO 4217 code for this currency.
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Sgd => "SGD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CURRENCIES
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValueError::UnknownCurrency(s.to_string()))
    }
}

// ============================================================================
// Observable
// ============================================================================

/// A reference to an externally resolved runtime value.
///
/// An observable names the gateway that will supply the value when the
/// contract executes. The tree never resolves it: `If` records the boolean
/// gateway selecting its active branch, `ScaleObs` the integer gateway
/// supplying its scale factor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observable {
    /// Address of the resolving gateway.
    pub address: String,
}

impl Observable {
    /// An observable resolved by the gateway at `address`.
    pub fn at(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_index_round_trip() {
        for currency in CURRENCIES {
            assert_eq!(Currency::from_index(currency.index()), Ok(currency));
        }
    }

    #[test]
    fn test_currency_index_out_of_range() {
        assert_eq!(
            Currency::from_index(6),
            Err(ValueError::CurrencyIndexOutOfRange(6))
        );
        assert_eq!(
            Currency::from_index(u8::MAX),
            Err(ValueError::CurrencyIndexOutOfRange(u8::MAX))
        );
    }

    #[test]
    fn test_currency_code_round_trip() {
        for currency in CURRENCIES {
            assert_eq!(currency.as_str().parse(), Ok(currency));
        }
    }

    #[test]
    fn test_currency_unknown_code() {
        assert_eq!(
            "XAU".parse::<Currency>(),
            Err(ValueError::UnknownCurrency("XAU".to_string()))
        );
        // Codes are case-sensitive.
        assert!("usd".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Sgd.to_string(), "SGD");
    }

    #[test]
    fn test_observable_display() {
        let obs = Observable::at("0x7f2e");
        assert_eq!(obs.to_string(), "0x7f2e");
        assert_eq!(obs.address, "0x7f2e");
    }
}
