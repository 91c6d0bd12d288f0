use thiserror::Error;

use crate::customer::domain::DuplicateConflict;
use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Duplicate(DuplicateConflict),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Duplicate(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound => ServiceError::not_found("customer"),
            ModelError::UniqueViolation(msg) => match DuplicateConflict::from_index_message(&msg) {
                Some(conflict) => ServiceError::Duplicate(conflict),
                None => ServiceError::Db(msg),
            },
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_on_email_index_becomes_duplicate() {
        let msg = format!("duplicate key value violates unique constraint \"{}\"", models::customer::UNIQ_EMAIL);
        let err = ServiceError::from(ModelError::UniqueViolation(msg));
        assert!(matches!(err, ServiceError::Duplicate(DuplicateConflict::Email)));
        assert_eq!(err.code(), 1002);
    }

    #[test]
    fn unknown_unique_violation_stays_db_error() {
        let err = ServiceError::from(ModelError::UniqueViolation("customer_pkey".into()));
        assert!(matches!(err, ServiceError::Db(_)));
    }

    #[test]
    fn codes_are_stable_per_variant() {
        assert_eq!(ServiceError::Duplicate(DuplicateConflict::Mobile).code(), 1002);
        assert_eq!(ServiceError::not_found("customer").code(), 1003);
        assert_eq!(ServiceError::Db("down".into()).code(), 1200);
    }

    #[test]
    fn missing_row_maps_to_customer_not_found() {
        let err = ServiceError::from(ModelError::NotFound);
        assert_eq!(err.to_string(), "customer not found");
    }
}
