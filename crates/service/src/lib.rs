//! Service layer providing the customer write rules on top of models.
//! - Separates business logic from data access behind `CustomerRepository`.
//! - Validation runs before any write; duplicate checks run against the store.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod customer;
#[cfg(test)]
pub mod test_support;
