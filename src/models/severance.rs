//! Severance (rescisão trabalhista) result models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The way the employment contract was terminated.
///
/// Each variant unlocks a different combination of severance components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationType {
    /// Dismissal without cause (demissão sem justa causa).
    WithoutCause,
    /// Resignation by the employee (pedido de demissão).
    Resignation,
    /// Dismissal with cause (demissão por justa causa).
    JustCause,
    /// Termination by mutual agreement (acordo, CLT art. 484-A).
    MutualAgreement,
}

/// The named monetary components of a severance statement.
///
/// `total` is always the sum of all other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceAmounts {
    /// Prior notice pay (aviso prévio).
    pub notice: Decimal,
    /// Pay for accrued, unused vacation days plus the constitutional third.
    pub vacation_due: Decimal,
    /// Pro-rata vacation for the incomplete tenure year, plus the third.
    pub vacation_pro_rata: Decimal,
    /// Pro-rata thirteenth salary for the incomplete tenure year.
    pub thirteenth_pro_rata: Decimal,
    /// FGTS balance released to the employee.
    pub severance_fund: Decimal,
    /// Employer penalty on the FGTS balance.
    pub fund_penalty: Decimal,
    /// Sum of all components above.
    pub total: Decimal,
}

impl SeveranceAmounts {
    /// Sum of all non-total components.
    pub fn component_sum(&self) -> Decimal {
        self.notice
            + self.vacation_due
            + self.vacation_pro_rata
            + self.thirteenth_pro_rata
            + self.severance_fund
            + self.fund_penalty
    }
}

/// The result of a severance calculation.
///
/// Echoes the inputs alongside the computed amounts; immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveranceStatement {
    /// Unique identifier for this simulation.
    pub id: Uuid,
    /// The current monthly wage.
    pub wage: Decimal,
    /// Tenure at the company in whole months.
    pub tenure_months: u32,
    /// Accrued, unused vacation days.
    pub unused_vacation_days: u32,
    /// How the contract was terminated.
    pub termination_type: TerminationType,
    /// The computed monetary components.
    pub amounts: SeveranceAmounts,
    /// When this simulation was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_termination_type_serialization() {
        assert_eq!(
            serde_json::to_string(&TerminationType::WithoutCause).unwrap(),
            "\"without_cause\""
        );
        assert_eq!(
            serde_json::to_string(&TerminationType::Resignation).unwrap(),
            "\"resignation\""
        );
        assert_eq!(
            serde_json::to_string(&TerminationType::JustCause).unwrap(),
            "\"just_cause\""
        );
        assert_eq!(
            serde_json::to_string(&TerminationType::MutualAgreement).unwrap(),
            "\"mutual_agreement\""
        );
    }

    #[test]
    fn test_component_sum() {
        let amounts = SeveranceAmounts {
            notice: dec("4200"),
            vacation_due: dec("0"),
            vacation_pro_rata: dec("2333.33"),
            thirteenth_pro_rata: dec("1750"),
            severance_fund: dec("8400"),
            fund_penalty: dec("3360"),
            total: dec("20043.33"),
        };
        assert_eq!(amounts.component_sum(), dec("20043.33"));
    }

    #[test]
    fn test_severance_statement_round_trip() {
        let statement = SeveranceStatement {
            id: Uuid::new_v4(),
            wage: dec("3500"),
            tenure_months: 30,
            unused_vacation_days: 0,
            termination_type: TerminationType::WithoutCause,
            amounts: SeveranceAmounts {
                notice: dec("4200"),
                vacation_due: Decimal::ZERO,
                vacation_pro_rata: dec("2333.33"),
                thirteenth_pro_rata: dec("1750"),
                severance_fund: dec("8400"),
                fund_penalty: dec("3360"),
                total: dec("20043.33"),
            },
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&statement).unwrap();
        let deserialized: SeveranceStatement = serde_json::from_str(&json).unwrap();
        assert_eq!(statement, deserialized);
    }
}
