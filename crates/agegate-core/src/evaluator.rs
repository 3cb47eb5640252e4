//! Age Decision Evaluator
//!
//! Pure decision function: (birthdate, country code, reference time) →
//! (computed age, routing outcome). No I/O; deterministic given the same
//! inputs.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use agegate_types::{AgeGateResult, CountryCode, NextStep, SubjectId};

use crate::config::PolicyConfig;
use crate::error::{GateError, GateResult};

/// Evaluate an age-gate submission.
///
/// The country code is validated and normalized but does not currently vary
/// the threshold: every jurisdiction resolves through the policy table,
/// which defaults all entries to one value.
pub fn evaluate(
    subject_id: SubjectId,
    birthdate: NaiveDate,
    country_code: &str,
    now: DateTime<Utc>,
    policy: &PolicyConfig,
) -> GateResult<AgeGateResult> {
    let country = CountryCode::parse(country_code)?;

    let today = now.date_naive();
    if birthdate > today {
        return Err(GateError::BirthdateInFuture);
    }

    let age = age_in_whole_years(birthdate, today);
    let next_step = if age >= policy.threshold_for(country) {
        NextStep::DirectAccess
    } else {
        NextStep::ParentConsentRequired
    };

    Ok(AgeGateResult {
        subject_id,
        calculated_age: age,
        next_step,
        evaluated_at: now,
    })
}

/// Whole calendar years between `birthdate` and `on`.
///
/// The birthday must have occurred: a birthdate of 2012-03-15 evaluated on
/// 2025-03-14 yields 12, not 13. Callers ensure `birthdate <= on`.
pub fn age_in_whole_years(birthdate: NaiveDate, on: NaiveDate) -> u32 {
    let mut age = on.year() - birthdate.year();
    if (on.month(), on.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        date(y, m, d).and_hms_opt(12, 0, 0).unwrap().and_utc()
    }

    fn eval(
        birthdate: NaiveDate,
        country: &str,
        now: DateTime<Utc>,
    ) -> GateResult<AgeGateResult> {
        evaluate(
            SubjectId::new(),
            birthdate,
            country,
            now,
            &PolicyConfig::default(),
        )
    }

    #[test]
    fn test_boundary_day_before_birthday() {
        let result = eval(date(2012, 3, 15), "US", at(2025, 3, 14)).unwrap();
        assert_eq!(result.calculated_age, 12);
        assert_eq!(result.next_step, NextStep::ParentConsentRequired);
    }

    #[test]
    fn test_boundary_on_birthday() {
        let result = eval(date(2012, 3, 15), "US", at(2025, 3, 15)).unwrap();
        assert_eq!(result.calculated_age, 13);
        assert_eq!(result.next_step, NextStep::DirectAccess);
    }

    #[test]
    fn test_young_subject_requires_consent() {
        let result = eval(date(2015, 6, 1), "US", at(2025, 6, 2)).unwrap();
        assert_eq!(result.calculated_age, 10);
        assert_eq!(result.next_step, NextStep::ParentConsentRequired);
    }

    #[test]
    fn test_future_birthdate_rejected() {
        let err = eval(date(2026, 1, 1), "US", at(2025, 3, 15)).unwrap_err();
        assert!(matches!(err, GateError::BirthdateInFuture));
    }

    #[test]
    fn test_birthdate_today_is_age_zero() {
        let result = eval(date(2025, 3, 15), "US", at(2025, 3, 15)).unwrap();
        assert_eq!(result.calculated_age, 0);
        assert_eq!(result.next_step, NextStep::ParentConsentRequired);
    }

    #[test]
    fn test_malformed_country_codes_rejected() {
        for code in ["U", "USA", "U1", "", "12"] {
            let err = eval(date(2010, 1, 1), code, at(2025, 3, 15)).unwrap_err();
            assert!(
                matches!(err, GateError::InvalidCountryCode(_)),
                "expected rejection for {code:?}"
            );
        }
    }

    #[test]
    fn test_country_code_case_insensitive() {
        assert!(eval(date(2010, 1, 1), "us", at(2025, 3, 15)).is_ok());
        assert!(eval(date(2010, 1, 1), "Us", at(2025, 3, 15)).is_ok());
    }

    #[test]
    fn test_country_does_not_alter_default_threshold() {
        let a = eval(date(2012, 3, 15), "US", at(2025, 3, 14)).unwrap();
        let b = eval(date(2012, 3, 15), "DE", at(2025, 3, 14)).unwrap();
        assert_eq!(a.next_step, b.next_step);
        assert_eq!(a.calculated_age, b.calculated_age);
    }

    #[test]
    fn test_per_country_threshold_seam() {
        let mut policy = PolicyConfig::default();
        policy.country_thresholds.insert("KR".to_string(), 14);

        let subject = SubjectId::new();
        let now = at(2025, 3, 15);
        let birthdate = date(2012, 3, 15); // exactly 13

        let kr = evaluate(subject, birthdate, "KR", now, &policy).unwrap();
        assert_eq!(kr.next_step, NextStep::ParentConsentRequired);

        let us = evaluate(subject, birthdate, "US", now, &policy).unwrap();
        assert_eq!(us.next_step, NextStep::DirectAccess);
    }

    #[test]
    fn test_deterministic() {
        let now = at(2025, 3, 15);
        let a = eval(date(2012, 3, 15), "US", now).unwrap();
        let b = eval(date(2012, 3, 15), "US", now).unwrap();
        assert_eq!(a.calculated_age, b.calculated_age);
        assert_eq!(a.next_step, b.next_step);
        assert_eq!(a.evaluated_at, b.evaluated_at);
    }

    #[test]
    fn test_leap_day_birthday() {
        // Feb 29 birthday counts as occurred on Mar 1 in common years
        assert_eq!(age_in_whole_years(date(2012, 2, 29), date(2025, 2, 28)), 12);
        assert_eq!(age_in_whole_years(date(2012, 2, 29), date(2025, 3, 1)), 13);
    }
}
