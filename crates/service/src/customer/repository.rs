use async_trait::async_trait;

use super::domain::{Customer, CustomerFields};
use crate::errors::ServiceError;

/// Persistence contract for customer rows.
///
/// Each call is atomic on its own; nothing spans a whole check-then-write
/// sequence. Implementations should still refuse duplicate mobile numbers or
/// emails on `save` with `ServiceError::Duplicate`, which is what closes the
/// gap between a clean existence check and the write.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers ordered by id.
    async fn find_all(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn exists_by_mobile_no(&self, mobile_no: &str) -> Result<bool, ServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;
    /// Whether a customer other than `id` holds `mobile_no`.
    async fn exists_by_mobile_no_excluding(&self, mobile_no: &str, id: i64) -> Result<bool, ServiceError>;
    /// Whether a customer other than `id` holds `email`.
    async fn exists_by_email_excluding(&self, email: &str, id: i64) -> Result<bool, ServiceError>;
    /// Insert when `id` is `None` (the store assigns the id), otherwise overwrite row `id`.
    async fn save(&self, id: Option<i64>, fields: CustomerFields) -> Result<Customer, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// In-memory repository for tests, doc examples and running without a database.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;

    use tokio::sync::RwLock;

    use crate::customer::domain::DuplicateConflict;

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i64, Customer>,
        last_id: i64,
    }

    impl Table {
        fn holds(&self, pick: impl Fn(&Customer) -> bool, exclude: Option<i64>) -> bool {
            self.rows.values().any(|c| Some(c.id) != exclude && pick(c))
        }
    }

    #[derive(Default)]
    pub struct InMemoryCustomerRepository {
        table: RwLock<Table>,
    }

    impl InMemoryCustomerRepository {
        pub fn new() -> Self { Self::default() }

        pub async fn len(&self) -> usize { self.table.read().await.rows.len() }
    }

    #[async_trait]
    impl CustomerRepository for InMemoryCustomerRepository {
        async fn find_all(&self) -> Result<Vec<Customer>, ServiceError> {
            let t = self.table.read().await;
            Ok(t.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError> {
            Ok(self.table.read().await.rows.get(&id).cloned())
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.read().await.rows.contains_key(&id))
        }

        async fn exists_by_mobile_no(&self, mobile_no: &str) -> Result<bool, ServiceError> {
            Ok(self.table.read().await.holds(|c| c.mobile_no == mobile_no, None))
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
            Ok(self.table.read().await.holds(|c| c.email == email, None))
        }

        async fn exists_by_mobile_no_excluding(&self, mobile_no: &str, id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.read().await.holds(|c| c.mobile_no == mobile_no, Some(id)))
        }

        async fn exists_by_email_excluding(&self, email: &str, id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.read().await.holds(|c| c.email == email, Some(id)))
        }

        async fn save(&self, id: Option<i64>, fields: CustomerFields) -> Result<Customer, ServiceError> {
            let mut t = self.table.write().await;
            // Same guarantee as the unique indexes of the SQL schema.
            let mobile_taken = t.holds(|c| c.mobile_no == fields.mobile_no, id);
            let email_taken = t.holds(|c| c.email == fields.email, id);
            if let Some(conflict) = DuplicateConflict::from_flags(mobile_taken, email_taken) {
                return Err(ServiceError::Duplicate(conflict));
            }
            let id = match id {
                Some(id) if t.rows.contains_key(&id) => id,
                Some(_) => return Err(ServiceError::not_found("customer")),
                None => {
                    t.last_id += 1;
                    t.last_id
                }
            };
            let customer = fields.into_model(id);
            t.rows.insert(id, customer.clone());
            Ok(customer)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.table.write().await.rows.remove(&id);
            Ok(())
        }
    }
}
