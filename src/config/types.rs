//! Configuration types for the statutory rule tables.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML rule files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the loaded rule set.
///
/// Identifies which legislation and table year the rule files describe.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesetMetadata {
    /// The legislation code (e.g., "EC103-2019").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the tables.
    pub version: String,
    /// URL to the official documentation.
    pub source_url: String,
}

/// Minimum retirement ages by gender.
#[derive(Debug, Clone, Deserialize)]
pub struct MinimumRetirementAge {
    /// Minimum retirement age for men.
    pub male: u32,
    /// Minimum retirement age for women.
    pub female: u32,
}

/// INSS retirement rules loaded from `inss.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct InssRules {
    /// The maximum wage base a benefit can be computed on (teto do INSS).
    pub benefit_ceiling: Decimal,
    /// The current national minimum wage.
    pub minimum_wage: Decimal,
    /// Minimum retirement age per gender.
    pub minimum_retirement_age: MinimumRetirementAge,
    /// Minimum contribution years required for eligibility.
    pub minimum_contribution_years: u32,
    /// The base benefit factor applied at the minimum contribution time (0.6).
    pub base_benefit_factor: Decimal,
    /// Additional factor per contribution year beyond the minimum (0.02).
    pub additional_factor_per_year: Decimal,
}

/// Prior notice (aviso prévio) parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeRules {
    /// Base number of notice days.
    pub base_days: u32,
    /// Additional notice days per complete year of tenure.
    pub additional_days_per_year: u32,
    /// Maximum number of notice days.
    pub max_days: u32,
}

/// FGTS (severance fund) parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct FgtsRules {
    /// Monthly employer deposit rate on the wage (0.08).
    pub deposit_rate: Decimal,
    /// Employer penalty on the fund balance for dismissal without cause (0.40).
    pub dismissal_penalty_rate: Decimal,
    /// Fraction of the balance released on mutual agreement (0.80).
    pub agreement_release_fraction: Decimal,
    /// Penalty fraction on the balance for mutual agreement (0.20).
    pub agreement_penalty_fraction: Decimal,
}

/// CLT severance rules loaded from `labour.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LabourRules {
    /// Prior notice parameters.
    pub notice: NoticeRules,
    /// FGTS parameters.
    pub fgts: FgtsRules,
}

/// The complete rule configuration loaded from a rule directory.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    metadata: RulesetMetadata,
    inss: InssRules,
    labour: LabourRules,
}

impl RuleConfig {
    /// Creates a new RuleConfig from its component parts.
    pub fn new(metadata: RulesetMetadata, inss: InssRules, labour: LabourRules) -> Self {
        Self {
            metadata,
            inss,
            labour,
        }
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RulesetMetadata {
        &self.metadata
    }

    /// Returns the INSS retirement rules.
    pub fn inss(&self) -> &InssRules {
        &self.inss
    }

    /// Returns the CLT severance rules.
    pub fn labour(&self) -> &LabourRules {
        &self.labour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_inss_rules_from_yaml() {
        let yaml = r#"
benefit_ceiling: 7786.02
minimum_wage: 1412.00
minimum_retirement_age:
  male: 65
  female: 62
minimum_contribution_years: 15
base_benefit_factor: 0.6
additional_factor_per_year: 0.02
"#;
        let rules: InssRules = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules.benefit_ceiling, Decimal::from_str("7786.02").unwrap());
        assert_eq!(rules.minimum_retirement_age.male, 65);
        assert_eq!(rules.minimum_retirement_age.female, 62);
        assert_eq!(rules.minimum_contribution_years, 15);
    }

    #[test]
    fn test_deserialize_labour_rules_from_yaml() {
        let yaml = r#"
notice:
  base_days: 30
  additional_days_per_year: 3
  max_days: 90
fgts:
  deposit_rate: 0.08
  dismissal_penalty_rate: 0.40
  agreement_release_fraction: 0.80
  agreement_penalty_fraction: 0.20
"#;
        let rules: LabourRules = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules.notice.base_days, 30);
        assert_eq!(rules.notice.max_days, 90);
        assert_eq!(rules.fgts.deposit_rate, Decimal::from_str("0.08").unwrap());
    }
}
