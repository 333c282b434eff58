//! Field-level validation rules for employees.

use chrono::{Datelike, NaiveDate, Utc};

use super::{Employee, ValidEmployee, ValidationResult};

/// Youngest allowed age in whole years.
pub const MIN_AGE: i32 = 14;
/// Oldest allowed age in whole years.
pub const MAX_AGE: i32 = 120;

/// Validates candidate employees.
///
/// Every rule is evaluated independently so a single pass reports all problems.
/// Age is computed against `today`, which defaults to the current UTC date.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeValidator {
    today: Option<NaiveDate>,
}

impl EmployeeValidator {
    /// Creates a validator that computes ages against the current date.
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Creates a validator pinned to a fixed date.
    pub fn as_of(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    /// Validates a new employee.
    ///
    /// # Returns
    /// - `ValidationResult::Valid` - Wraps a `ValidEmployee` copying every field
    /// - `ValidationResult::Invalid` - Every violated rule, in rule order
    pub fn validate(&self, candidate: Employee) -> ValidationResult {
        let errors = self.field_errors(&candidate);

        Self::finish(candidate, errors)
    }

    /// Validates an employee that is expected to exist already.
    ///
    /// Applies the same rules as `validate`, and additionally requires an id.
    pub fn validate_existing(&self, candidate: Employee) -> ValidationResult {
        let mut errors = Vec::new();
        if candidate.id.is_none() {
            errors.push("Id is required".to_string());
        }
        errors.extend(self.field_errors(&candidate));

        Self::finish(candidate, errors)
    }

    fn field_errors(&self, candidate: &Employee) -> Vec<String> {
        let mut errors = Vec::new();

        if candidate.first_name.trim().is_empty() {
            errors.push("Firstname is required".to_string());
        }
        if candidate.last_name.trim().is_empty() {
            errors.push("Lastname is required".to_string());
        }
        if candidate.last_name.chars().any(char::is_whitespace) {
            errors.push("Lastname cannot contain whitespace".to_string());
        }

        let age = age_on(candidate.birthdate, self.today());
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            errors.push(format!(
                "Error in birthdate. Age is outside range {}-{}",
                MIN_AGE, MAX_AGE
            ));
        }

        errors
    }

    fn finish(candidate: Employee, errors: Vec<String>) -> ValidationResult {
        if !errors.is_empty() {
            return ValidationResult::Invalid(errors);
        }

        ValidationResult::Valid(ValidEmployee {
            id: candidate.id,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            birthdate: candidate.birthdate,
            office_id: candidate.office_id,
        })
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Default for EmployeeValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Age in whole years on `today`: one less than the year difference until the
/// birthday has been reached this year. Negative for birth dates in the future.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age - 1
    } else {
        age
    }
}
