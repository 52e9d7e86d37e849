//! ATM reference data and search types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use finch_shared::types::AtmId;

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// ATM network affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtmNetwork {
    /// Allpoint surcharge-free network.
    Allpoint,
    /// MoneyPass surcharge-free network.
    MoneyPass,
    /// Visa Plus network.
    VisaPlus,
    /// Mastercard Cirrus network.
    Cirrus,
}

/// Services an ATM offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtmService {
    /// Cash withdrawal.
    CashWithdrawal,
    /// Cash deposit.
    CashDeposit,
    /// Check deposit.
    CheckDeposit,
    /// Balance inquiry.
    BalanceInquiry,
    /// Account-to-account transfers.
    Transfers,
}

/// Static record for one physical ATM. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmLocation {
    /// ATM ID.
    pub id: AtmId,
    /// Display name (usually the host business).
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// ZIP code.
    pub zip: String,
    /// Geographic position.
    pub position: Coordinates,
    /// Network affiliation.
    pub network: AtmNetwork,
    /// Services offered at this ATM.
    pub services: HashSet<AtmService>,
}

/// Conjunctive search filter for the ATM locator.
///
/// All present constraints must hold: text match AND network membership
/// AND service containment. Empty collections mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtmFilter {
    /// Case-insensitive substring matched against name, address, city,
    /// and zip. `None` or empty means no text constraint.
    pub query: Option<String>,
    /// Accepted networks. Empty means any network.
    pub networks: HashSet<AtmNetwork>,
    /// Required services. Every listed service must be offered.
    pub services: HashSet<AtmService>,
}

/// An ATM paired with its distance from the search origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAtm {
    /// The ATM record.
    pub atm: AtmLocation,
    /// Great-circle distance from the origin, in miles.
    pub distance_miles: f64,
}
