use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Employee as returned by `GET` and accepted by `PUT`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    #[schema(value_type = String, format = Date, example = "1990-01-01")]
    pub birthdate: NaiveDate,
    pub office_id: i32,
}

/// Employee payload accepted by `POST`; the id is assigned by the database.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployeeDto {
    pub first_name: String,
    pub last_name: String,
    #[schema(value_type = String, format = Date, example = "1990-01-01")]
    pub birthdate: NaiveDate,
    pub office_id: i32,
}
