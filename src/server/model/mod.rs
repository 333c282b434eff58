//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Validation lives next to the
//! employee model so that only the validator can mint a `ValidEmployee`.

pub mod employee;
