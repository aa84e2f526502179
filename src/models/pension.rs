//! Private pension projection result models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single year entry in a pension projection.
///
/// Each entry is recomputed independently from the closed-form annuity
/// formula rather than accumulated incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionYear {
    /// The age the saver will have at the end of this projection year.
    pub year: u32,
    /// Projected balance at the end of this year.
    pub balance: Decimal,
    /// Total contributions deposited up to the end of this year.
    pub cumulative_contribution: Decimal,
    /// Accumulated yield (balance minus contributions) up to this year.
    pub cumulative_yield: Decimal,
}

/// The result of a private pension projection.
///
/// Holds the closed-form final balance together with the eagerly computed
/// year-by-year projection; immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionProjection {
    /// Unique identifier for this simulation.
    pub id: Uuid,
    /// The monthly contribution amount.
    pub monthly_contribution: Decimal,
    /// The contribution duration in years.
    pub duration_years: u32,
    /// The annual yield rate in percent (e.g., 8 for 8% a year).
    pub annual_rate: Decimal,
    /// The projected balance at the end of the full duration.
    pub final_balance: Decimal,
    /// One entry per elapsed year, from year 1 to the full duration.
    pub projection: Vec<ProjectionYear>,
    /// When this simulation was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pension_projection_round_trip() {
        let projection = PensionProjection {
            id: Uuid::new_v4(),
            monthly_contribution: Decimal::from_str("500").unwrap(),
            duration_years: 2,
            annual_rate: Decimal::from_str("8").unwrap(),
            final_balance: Decimal::from_str("12999.93").unwrap(),
            projection: vec![ProjectionYear {
                year: 31,
                balance: Decimal::from_str("6224.99").unwrap(),
                cumulative_contribution: Decimal::from_str("6000").unwrap(),
                cumulative_yield: Decimal::from_str("224.99").unwrap(),
            }],
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&projection).unwrap();
        let deserialized: PensionProjection = serde_json::from_str(&json).unwrap();
        assert_eq!(projection, deserialized);
    }
}
