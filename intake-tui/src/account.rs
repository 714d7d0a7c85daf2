//! The account application record and its validation schema.

use std::collections::BTreeSet;

use formwork::validation::{Schema, ValidationReport, rules};
use serde::Serialize;

/// Field names, shared by the schema, the form, and the serialized
/// record.
pub mod field {
    pub const FULL_NAME: &str = "fullName";
    pub const INITIAL_INVESTMENT: &str = "initialInvestment";
    pub const INVESTMENT_RISK: &str = "investmentRisk";
    pub const COMMENT: &str = "commentAboutInvestmentRisk";
    pub const DEPENDENTS: &str = "dependents";
    pub const TERMS: &str = "acceptedTermsAndConditions";
}

/// How much risk the applicant is willing to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// All levels, in the order they are offered.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    /// The label shown next to the option.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High - Super Risky",
            RiskLevel::Medium => "Medium - Risky",
            RiskLevel::Low => "Low - Safe",
        }
    }
}

/// Everything the new-account form collects.
///
/// `initial_investment` is `None` while the amount field is empty or
/// unparsable. `dependents` uses `-1` as the "nothing selected yet"
/// sentinel; it is a valid transient state but never a valid submission
/// value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDetails {
    pub full_name: String,
    pub initial_investment: Option<f64>,
    pub investment_risk: BTreeSet<RiskLevel>,
    pub comment_about_investment_risk: String,
    pub dependents: i32,
    pub accepted_terms_and_conditions: bool,
}

impl Default for InvestmentDetails {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            initial_investment: Some(0.0),
            investment_risk: BTreeSet::new(),
            comment_about_investment_risk: String::new(),
            dependents: -1,
            accepted_terms_and_conditions: false,
        }
    }
}

impl InvestmentDetails {
    /// Check if the record passes every constraint.
    pub fn is_submit_eligible(&self) -> bool {
        validate(self).is_valid()
    }
}

fn schema() -> Schema<InvestmentDetails> {
    Schema::new()
        .field(field::FULL_NAME, |d: &InvestmentDetails| {
            rules::text(&d.full_name)
                .required()
                .min_chars(2)
                .max_chars(100)
                .finish()
        })
        .field(field::INITIAL_INVESTMENT, |d| {
            rules::amount(d.initial_investment)
                .required()
                .at_least(100.0)
                .finish()
        })
        .field(field::INVESTMENT_RISK, |d| {
            rules::choices(d.investment_risk.len()).at_least_one().finish()
        })
        .field(field::COMMENT, |d| {
            // Required-ness of the comment depends on the risk set: a
            // High pick demands an explanation, otherwise the comment is
            // optional but still bounded when present.
            let comment = rules::text(&d.comment_about_investment_risk);
            let comment = if d.investment_risk.contains(&RiskLevel::High) {
                comment.required()
            } else {
                comment.optional()
            };
            comment.min_chars(20).max_chars(100).finish()
        })
        .field(field::DEPENDENTS, |d| {
            rules::count(d.dependents).selected().within(0, 5).finish()
        })
        .field(field::TERMS, |d| {
            rules::consent(d.accepted_terms_and_conditions)
                .must_accept()
                .finish()
        })
}

/// Validate the record, producing one error per failing field.
pub fn validate(details: &InvestmentDetails) -> ValidationReport {
    schema().validate(details)
}

#[cfg(test)]
mod tests {
    use formwork::validation::ValidationError;

    use super::*;

    /// A record that satisfies every constraint.
    fn valid_details() -> InvestmentDetails {
        InvestmentDetails {
            full_name: "Jane Doe".into(),
            initial_investment: Some(500.0),
            investment_risk: BTreeSet::from([RiskLevel::Low]),
            comment_about_investment_risk: String::new(),
            dependents: 2,
            accepted_terms_and_conditions: true,
        }
    }

    #[test]
    fn test_valid_record_is_submit_eligible() {
        let details = valid_details();
        assert!(validate(&details).is_valid());
        assert!(details.is_submit_eligible());
    }

    #[test]
    fn test_defaults_fail_every_field_except_comment() {
        let report = validate(&InvestmentDetails::default());

        assert_eq!(
            report.error_for(field::FULL_NAME),
            Some(&ValidationError::Required)
        );
        assert_eq!(
            report.error_for(field::INITIAL_INVESTMENT),
            Some(&ValidationError::TooSmall { min: 100.0 })
        );
        assert_eq!(
            report.error_for(field::INVESTMENT_RISK),
            Some(&ValidationError::Required)
        );
        // No risk selected, so the empty comment is fine.
        assert_eq!(report.error_for(field::COMMENT), None);
        assert_eq!(
            report.error_for(field::DEPENDENTS),
            Some(&ValidationError::Required)
        );
        assert_eq!(
            report.error_for(field::TERMS),
            Some(&ValidationError::MustAccept)
        );
    }

    #[test]
    fn test_full_name_bounds() {
        let mut details = valid_details();

        details.full_name = "J".into();
        assert_eq!(
            validate(&details).error_for(field::FULL_NAME),
            Some(&ValidationError::TooShort { min: 2 })
        );

        details.full_name = "x".repeat(101);
        assert_eq!(
            validate(&details).error_for(field::FULL_NAME),
            Some(&ValidationError::TooLong { max: 100 })
        );

        details.full_name = "x".repeat(100);
        assert_eq!(validate(&details).error_for(field::FULL_NAME), None);
    }

    #[test]
    fn test_initial_investment_unset_is_required() {
        let mut details = valid_details();
        details.initial_investment = None;
        assert_eq!(
            validate(&details).error_for(field::INITIAL_INVESTMENT),
            Some(&ValidationError::Required)
        );

        details.initial_investment = Some(100.0);
        assert_eq!(validate(&details).error_for(field::INITIAL_INVESTMENT), None);
    }

    #[test]
    fn test_high_risk_requires_comment() {
        let mut details = valid_details();
        details.investment_risk = BTreeSet::from([RiskLevel::High, RiskLevel::Low]);

        // Empty comment: required.
        assert_eq!(
            validate(&details).error_for(field::COMMENT),
            Some(&ValidationError::Required)
        );

        // Short comment: too short.
        details.comment_about_investment_risk = "too short".into();
        assert_eq!(
            validate(&details).error_for(field::COMMENT),
            Some(&ValidationError::TooShort { min: 20 })
        );

        // A proper explanation passes.
        details.comment_about_investment_risk =
            "I understand the risk and accept possible losses.".into();
        assert_eq!(validate(&details).error_for(field::COMMENT), None);
    }

    #[test]
    fn test_comment_optional_without_high_risk() {
        let mut details = valid_details();
        details.investment_risk = BTreeSet::from([RiskLevel::Medium]);
        details.comment_about_investment_risk = String::new();
        assert_eq!(validate(&details).error_for(field::COMMENT), None);

        // When present it is still bounded.
        details.comment_about_investment_risk = "short".into();
        assert_eq!(
            validate(&details).error_for(field::COMMENT),
            Some(&ValidationError::TooShort { min: 20 })
        );

        details.comment_about_investment_risk = "x".repeat(101);
        assert_eq!(
            validate(&details).error_for(field::COMMENT),
            Some(&ValidationError::TooLong { max: 100 })
        );
    }

    #[test]
    fn test_dropping_high_risk_clears_comment_requirement() {
        let mut details = valid_details();
        details.comment_about_investment_risk = String::new();

        details.investment_risk = BTreeSet::from([RiskLevel::High]);
        assert!(validate(&details).error_for(field::COMMENT).is_some());

        details.investment_risk.clear();
        // The risk set itself now errors, but the comment no longer does.
        let report = validate(&details);
        assert_eq!(report.error_for(field::COMMENT), None);
        assert_eq!(
            report.error_for(field::INVESTMENT_RISK),
            Some(&ValidationError::Required)
        );
    }

    #[test]
    fn test_dependents_sentinel_and_range() {
        let mut details = valid_details();

        details.dependents = -1;
        assert_eq!(
            validate(&details).error_for(field::DEPENDENTS),
            Some(&ValidationError::Required)
        );

        details.dependents = 6;
        assert_eq!(
            validate(&details).error_for(field::DEPENDENTS),
            Some(&ValidationError::OutOfRange { min: 0, max: 5 })
        );

        details.dependents = 3;
        assert_eq!(validate(&details).error_for(field::DEPENDENTS), None);
    }

    #[test]
    fn test_record_serializes_with_camel_case_names() {
        let json = serde_json::to_value(valid_details()).expect("record serializes");

        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["initialInvestment"], 500.0);
        assert_eq!(json["investmentRisk"][0], "Low");
        assert_eq!(json["dependents"], 2);
        assert_eq!(json["acceptedTermsAndConditions"], true);
    }
}
