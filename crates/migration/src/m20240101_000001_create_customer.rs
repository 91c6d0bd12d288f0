//! Create `customer` table.
//!
//! One row per registered customer; `id` is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customer::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Customer::FirstName, 30).not_null())
                    .col(string_len(Customer::LastName, 30).not_null())
                    .col(date(Customer::DateOfBirth).not_null())
                    .col(string_len(Customer::MobileNo, 17).not_null())
                    .col(string_len(Customer::AddressLineOne, 70).not_null())
                    .col(string_len(Customer::AddressLineTwo, 70).not_null())
                    .col(integer(Customer::Age).not_null())
                    .col(small_integer(Customer::Gender).not_null())
                    .col(string_len(Customer::Email, 50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    MobileNo,
    AddressLineOne,
    AddressLineTwo,
    Age,
    Gender,
    Email,
}
