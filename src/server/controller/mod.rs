//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs to domain models, call the service
//! layer, and convert results back to DTOs. Error mapping to status codes happens in
//! `AppError`, never in the handlers themselves.

pub mod employee;

#[cfg(test)]
mod test;
