use sea_orm::DatabaseConnection;

use crate::customer::domain::{Customer, CustomerFields};
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;
use models::customer;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(customer::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError> {
        Ok(customer::find_by_id(&self.db, id).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(customer::exists_by_id(&self.db, id).await?)
    }

    async fn exists_by_mobile_no(&self, mobile_no: &str) -> Result<bool, ServiceError> {
        Ok(customer::exists_by_mobile_no(&self.db, mobile_no, None).await?)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(customer::exists_by_email(&self.db, email, None).await?)
    }

    async fn exists_by_mobile_no_excluding(&self, mobile_no: &str, id: i64) -> Result<bool, ServiceError> {
        Ok(customer::exists_by_mobile_no(&self.db, mobile_no, Some(id)).await?)
    }

    async fn exists_by_email_excluding(&self, email: &str, id: i64) -> Result<bool, ServiceError> {
        Ok(customer::exists_by_email(&self.db, email, Some(id)).await?)
    }

    async fn save(&self, id: Option<i64>, fields: CustomerFields) -> Result<Customer, ServiceError> {
        // Unique-index violations arrive here as `ServiceError::Duplicate`.
        Ok(customer::save(&self.db, id, fields).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        customer::delete_by_id(&self.db, id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{domain::CustomerInput, service::CustomerService, validation};
    use crate::test_support::get_db;
    use std::sync::Arc;

    fn input(n: u128) -> CustomerInput {
        CustomerInput {
            first_name: Some("Jon".into()),
            last_name: Some("Doe".into()),
            date_of_birth: Some("1994-01-01".into()),
            mobile_no: Some(format!("{:010}", n)),
            address_line_one: Some("12 Oak".into()),
            address_line_two: Some("Apt 4".into()),
            age: Some(30),
            gender: Some(0),
            email: Some(format!("s{}@x.com", n)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn customer_crud_service_on_postgres() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let Ok(db) = get_db().await else { return Ok(()) };
        let svc = CustomerService::new(Arc::new(SeaOrmCustomerRepository { db }));

        let n = uuid::Uuid::new_v4().as_u128() % 10_000_000_000;
        let valid = validation::validate(&input(n)).map_err(|e| anyhow::anyhow!("{e}"))?;
        let created = svc.create(valid.clone()).await?;
        assert_eq!(CustomerFields::from(created.clone()), valid.clone().into_fields());

        let again = svc.create(valid.clone()).await.unwrap_err();
        assert_eq!(again.to_string(), "mobile and email already exist");

        let updated = svc.update(created.id, valid).await?;
        assert_eq!(updated.id, created.id);

        let outcome = svc.delete(created.id).await?;
        assert_eq!(outcome.message(), "Data deleted.");
        assert!(svc.get(created.id).await?.is_none());
        Ok(())
    }
}
