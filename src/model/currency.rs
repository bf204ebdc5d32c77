//! Supported currency codes.

use serde::{Deserialize, Serialize};

/// The currencies the billing API accepts.
///
/// Serialized as the ISO 4217 code (`USD`, `EUR`, ...). Amounts themselves
/// always travel as integer minor-unit counts next to one of these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollars.
    Usd,
    /// Australian dollars.
    Aud,
    /// Canadian dollars.
    Cad,
    /// Euros.
    Eur,
    /// British pounds.
    Gbp,
    /// Czech korunas.
    Czk,
    /// Danish krones.
    Dkk,
    /// Hungarian forints.
    Huf,
    /// Norwegian krones.
    Nok,
    /// New Zealand dollars.
    Nzd,
    /// Polish zloty.
    Pln,
    /// Singapore dollars.
    Sgd,
    /// Swedish kronas.
    Sek,
    /// Swiss francs.
    Chf,
    /// South African rand.
    Zar,
}

impl Currency {
    /// The ISO 4217 code as it appears on the wire.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Czk => "CZK",
            Self::Dkk => "DKK",
            Self::Huf => "HUF",
            Self::Nok => "NOK",
            Self::Nzd => "NZD",
            Self::Pln => "PLN",
            Self::Sgd => "SGD",
            Self::Sek => "SEK",
            Self::Chf => "CHF",
            Self::Zar => "ZAR",
        }
    }

    /// Looks a currency up by its ISO 4217 code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Self::Usd),
            "AUD" => Some(Self::Aud),
            "CAD" => Some(Self::Cad),
            "EUR" => Some(Self::Eur),
            "GBP" => Some(Self::Gbp),
            "CZK" => Some(Self::Czk),
            "DKK" => Some(Self::Dkk),
            "HUF" => Some(Self::Huf),
            "NOK" => Some(Self::Nok),
            "NZD" => Some(Self::Nzd),
            "PLN" => Some(Self::Pln),
            "SGD" => Some(Self::Sgd),
            "SEK" => Some(Self::Sek),
            "CHF" => Some(Self::Chf),
            "ZAR" => Some(Self::Zar),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
