//! Unique indexes backing the one-customer-per-mobile and one-customer-per-email rules.
//!
//! Index names are matched by the store when translating unique violations.
use sea_orm_migration::prelude::*;

pub const UNIQ_MOBILE_NO: &str = "uniq_customer_mobile_no";
pub const UNIQ_EMAIL: &str = "uniq_customer_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(UNIQ_MOBILE_NO)
                    .table(Customer::Table)
                    .col(Customer::MobileNo)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQ_EMAIL)
                    .table(Customer::Table)
                    .col(Customer::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(UNIQ_MOBILE_NO).table(Customer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name(UNIQ_EMAIL).table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, MobileNo, Email }
