//! SeaORM entity models for the employee registry schema.

pub mod employee;
pub mod office;
pub mod prelude;
