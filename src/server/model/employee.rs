//! Employee domain models.
//!
//! `Employee` is the unvalidated candidate built from a request body or read back
//! from the database. `ValidEmployee` carries the same fields but can only be
//! produced by [`validation::EmployeeValidator`], so holding one proves the rules ran.

pub mod validation;

use chrono::NaiveDate;

use crate::model::employee::{EmployeeDto, NewEmployeeDto};

/// Candidate employee, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Database identifier; `None` for employees that have not been inserted.
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: NaiveDate,
    /// Office the employee is assigned to.
    pub office_id: i32,
}

impl Employee {
    /// Converts an entity model to an employee domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Employee` - The converted domain model, always carrying its id
    pub fn from_entity(entity: entity::employee::Model) -> Self {
        Self {
            id: Some(entity.id),
            first_name: entity.first_name,
            last_name: entity.last_name,
            birthdate: entity.birthdate,
            office_id: entity.office_id,
        }
    }

    /// Builds a candidate from an update payload.
    pub fn from_dto(dto: EmployeeDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            birthdate: dto.birthdate,
            office_id: dto.office_id,
        }
    }

    /// Builds a candidate from a create payload; the id is left for the database.
    pub fn from_new_dto(dto: NewEmployeeDto) -> Self {
        Self {
            id: None,
            first_name: dto.first_name,
            last_name: dto.last_name,
            birthdate: dto.birthdate,
            office_id: dto.office_id,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            birthdate: self.birthdate,
            office_id: self.office_id,
        }
    }
}

/// Employee that passed every validation rule and is safe to persist.
///
/// Fields are private and there is no public constructor; see
/// [`validation::EmployeeValidator`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEmployee {
    id: Option<i32>,
    first_name: String,
    last_name: String,
    birthdate: NaiveDate,
    office_id: i32,
}

impl ValidEmployee {
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn office_id(&self) -> i32 {
        self.office_id
    }
}

/// Outcome of validating a candidate employee.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Every rule passed.
    Valid(ValidEmployee),
    /// At least one rule failed; messages are in rule order and never empty.
    Invalid(Vec<String>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Validation messages, empty when valid.
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn into_result(self) -> Result<ValidEmployee, Vec<String>> {
        match self {
            Self::Valid(employee) => Ok(employee),
            Self::Invalid(errors) => Err(errors),
        }
    }
}
