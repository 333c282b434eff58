use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Problem details body returned for invalid operations and unexpected failures.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ProblemDto {
    pub title: String,
    pub status: u16,
    pub detail: String,
}
