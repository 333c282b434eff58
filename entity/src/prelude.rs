pub use super::employee::Entity as Employee;
pub use super::office::Entity as Office;
