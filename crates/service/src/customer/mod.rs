//! Customer module: validation, store abstraction and write service.
//!
//! Data flows raw `CustomerInput` -> `validation` -> `CustomerService` -> `CustomerRepository`.

pub mod domain;
pub mod validation;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CustomerService;
