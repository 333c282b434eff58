//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for each domain in the application.
//! They use SeaORM entity models internally and return domain models, keeping the
//! entity types out of the service and controller layers. All queries, inserts,
//! updates, and deletes are performed through these repositories.

pub mod employee;

#[cfg(test)]
mod test;
