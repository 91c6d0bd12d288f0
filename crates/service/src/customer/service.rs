use std::sync::Arc;

use common::metrics::record_write;
use tracing::{info, instrument, warn};

use super::domain::{Customer, CustomerFields, DeleteOutcome, DuplicateConflict};
use super::repository::CustomerRepository;
use super::validation::ValidCustomer;
use crate::errors::ServiceError;

/// Customer write service: duplicate checks against the store, then the write.
///
/// The existence checks and the save are separate store calls, so two racing
/// writers can both pass the checks. The store's own uniqueness guarantee on
/// `save` turns the loser into `ServiceError::Duplicate` instead of a second row.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Customer>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Create a customer whose mobile number and email are both unused.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, domain::CustomerInput, repository::mock::InMemoryCustomerRepository, validation};
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::new()));
    /// let input = CustomerInput {
    ///     first_name: Some("Jon".into()), last_name: Some("Doe".into()),
    ///     date_of_birth: Some("1994-01-01".into()), mobile_no: Some("9998887776".into()),
    ///     address_line_one: Some("12 Oak".into()), address_line_two: Some("Apt 4".into()),
    ///     age: Some(30), gender: Some(0), email: Some("jon@x.com".into()), id: None,
    /// };
    /// let valid = validation::validate(&input).unwrap();
    /// let created = tokio_test::block_on(svc.create(valid)).unwrap();
    /// assert_eq!(created.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(mobile_no = %input.fields().mobile_no, email = %input.fields().email))]
    pub async fn create(&self, input: ValidCustomer) -> Result<Customer, ServiceError> {
        let fields = input.into_fields();
        if let Some(conflict) = self.conflict(&fields, None).await? {
            return Err(self.rejected("create", conflict));
        }

        let written = fields.clone();
        let created = match self.repo.save(None, fields).await {
            Ok(c) => c,
            Err(e) => return Err(self.failed("create", e, &written, None).await),
        };
        record_write("create", "created");
        info!(id = created.id, "customer_created");
        Ok(created)
    }

    /// Overwrite every field of customer `id`.
    ///
    /// Uniqueness is checked against every *other* customer, so keeping the
    /// current mobile number or email is never a conflict.
    #[instrument(skip(self, input), fields(id = id, mobile_no = %input.fields().mobile_no, email = %input.fields().email))]
    pub async fn update(&self, id: i64, input: ValidCustomer) -> Result<Customer, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            record_write("update", "not_found");
            warn!(id, "update of unknown customer");
            return Err(ServiceError::not_found("customer"));
        }

        let fields = input.into_fields();
        if let Some(conflict) = self.conflict(&fields, Some(id)).await? {
            return Err(self.rejected("update", conflict));
        }

        let written = fields.clone();
        let updated = match self.repo.save(Some(id), fields).await {
            Ok(c) => c,
            Err(e) => return Err(self.failed("update", e, &written, Some(id)).await),
        };
        record_write("update", "updated");
        info!(id, "customer_updated");
        Ok(updated)
    }

    /// Remove customer `id`; an unknown id yields `DeleteOutcome::NotFound`, not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            record_write("delete", "not_found");
            return Ok(DeleteOutcome::NotFound);
        }
        self.repo.delete_by_id(id).await?;
        record_write("delete", "deleted");
        info!(id, "customer_deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Both existence checks, against every customer or every customer but `exclude`.
    async fn conflict(&self, fields: &CustomerFields, exclude: Option<i64>) -> Result<Option<DuplicateConflict>, ServiceError> {
        let (mobile_taken, email_taken) = match exclude {
            None => (
                self.repo.exists_by_mobile_no(&fields.mobile_no).await?,
                self.repo.exists_by_email(&fields.email).await?,
            ),
            Some(id) => (
                self.repo.exists_by_mobile_no_excluding(&fields.mobile_no, id).await?,
                self.repo.exists_by_email_excluding(&fields.email, id).await?,
            ),
        };
        Ok(DuplicateConflict::from_flags(mobile_taken, email_taken))
    }

    fn rejected(&self, op: &str, conflict: DuplicateConflict) -> ServiceError {
        record_write(op, "duplicate");
        info!(reason = conflict.reason(), "customer write rejected");
        ServiceError::Duplicate(conflict)
    }

    async fn failed(&self, op: &str, e: ServiceError, fields: &CustomerFields, exclude: Option<i64>) -> ServiceError {
        match e {
            ServiceError::Duplicate(reported) => {
                // A unique index names only the first column it rejects; re-check both.
                let conflict = match self.conflict(fields, exclude).await {
                    Ok(Some(c)) => c,
                    _ => reported,
                };
                warn!(reason = conflict.reason(), "store rejected write after clean duplicate check");
                self.rejected(op, conflict)
            }
            ServiceError::NotFound(msg) => {
                record_write(op, "not_found");
                ServiceError::NotFound(msg)
            }
            other => {
                record_write(op, "error");
                other
            }
        }
    }
}
