use sea_orm::{
    entity::prelude::*, ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Names of the unique indexes on `mobile_no` and `email`.
pub use migration::{UNIQ_EMAIL, UNIQ_MOBILE_NO};

/// A stored customer row. Serialized in the camelCase wire shape.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub mobile_no: String,
    pub address_line_one: String,
    pub address_line_two: String,
    pub age: i32,
    pub gender: i16,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Every mutable column of a customer; what a create or update writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub mobile_no: String,
    pub address_line_one: String,
    pub address_line_two: String,
    pub age: i32,
    pub gender: i16,
    pub email: String,
}

impl CustomerFields {
    pub fn into_model(self, id: i64) -> Model {
        Model {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            mobile_no: self.mobile_no,
            address_line_one: self.address_line_one,
            address_line_two: self.address_line_two,
            age: self.age,
            gender: self.gender,
            email: self.email,
        }
    }

    /// `None` leaves the id for the database to assign.
    pub fn into_active_model(self, id: Option<i64>) -> ActiveModel {
        ActiveModel {
            id: id.map_or(NotSet, Set),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            date_of_birth: Set(self.date_of_birth),
            mobile_no: Set(self.mobile_no),
            address_line_one: Set(self.address_line_one),
            address_line_two: Set(self.address_line_two),
            age: Set(self.age),
            gender: Set(self.gender),
            email: Set(self.email),
        }
    }
}

impl From<Model> for CustomerFields {
    fn from(m: Model) -> Self {
        Self {
            first_name: m.first_name,
            last_name: m.last_name,
            date_of_birth: m.date_of_birth,
            mobile_no: m.mobile_no,
            address_line_one: m.address_line_one,
            address_line_two: m.address_line_two,
            age: m.age,
            gender: m.gender,
            email: m.email,
        }
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await?;
    Ok(rows)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    let found = Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Whether some row other than `exclude` holds `value` in `column`.
async fn exists_with(
    db: &DatabaseConnection,
    column: Column,
    value: &str,
    exclude: Option<i64>,
) -> Result<bool, ModelError> {
    let mut q = Entity::find().filter(column.eq(value));
    if let Some(id) = exclude {
        q = q.filter(Column::Id.ne(id));
    }
    let n = q.count(db).await?;
    Ok(n > 0)
}

pub async fn exists_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let n = Entity::find().filter(Column::Id.eq(id)).count(db).await?;
    Ok(n > 0)
}

pub async fn exists_by_mobile_no(db: &DatabaseConnection, mobile_no: &str, exclude: Option<i64>) -> Result<bool, ModelError> {
    exists_with(db, Column::MobileNo, mobile_no, exclude).await
}

pub async fn exists_by_email(db: &DatabaseConnection, email: &str, exclude: Option<i64>) -> Result<bool, ModelError> {
    exists_with(db, Column::Email, email, exclude).await
}

/// Insert when `id` is `None`, otherwise overwrite every column of row `id`.
pub async fn save(db: &DatabaseConnection, id: Option<i64>, fields: CustomerFields) -> Result<Model, ModelError> {
    let am = fields.into_active_model(id);
    let saved = match id {
        None => am.insert(db).await?,
        Some(_) => am.update(db).await?,
    };
    Ok(saved)
}

/// Returns whether a row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
