use crate::customer;
use crate::errors::ModelError;
use anyhow::Result;

use super::{setup_test_db, unique_fields};

/// Test customer insert, read, overwrite and delete
#[tokio::test]
async fn test_customer_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    // Create
    let fields = unique_fields()?;
    let created = customer::save(&db, None, fields.clone()).await?;
    assert!(created.id > 0);
    assert_eq!(customer::CustomerFields::from(created.clone()), fields);

    // Read
    let found = customer::find_by_id(&db, created.id).await?;
    assert_eq!(found.as_ref(), Some(&created));
    assert!(customer::exists_by_id(&db, created.id).await?);
    let all = customer::find_all(&db).await?;
    assert!(all.iter().any(|c| c.id == created.id));
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    // Update
    let mut changed = fields.clone();
    changed.first_name = "Jane".into();
    let updated = customer::save(&db, Some(created.id), changed).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Jane");

    // Delete
    assert!(customer::delete_by_id(&db, created.id).await?);
    assert!(!customer::delete_by_id(&db, created.id).await?);
    assert!(customer::find_by_id(&db, created.id).await?.is_none());
    Ok(())
}

/// Existence checks honour the excluded id
#[tokio::test]
async fn test_exists_excluding_self() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let fields = unique_fields()?;
    let created = customer::save(&db, None, fields.clone()).await?;

    assert!(customer::exists_by_mobile_no(&db, &fields.mobile_no, None).await?);
    assert!(customer::exists_by_email(&db, &fields.email, None).await?);
    assert!(!customer::exists_by_mobile_no(&db, &fields.mobile_no, Some(created.id)).await?);
    assert!(!customer::exists_by_email(&db, &fields.email, Some(created.id)).await?);

    customer::delete_by_id(&db, created.id).await?;
    Ok(())
}

/// Unique indexes reject a second row with the same email
#[tokio::test]
async fn test_unique_index_violation_is_reported() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let first = unique_fields()?;
    let created = customer::save(&db, None, first.clone()).await?;

    let mut second = unique_fields()?;
    second.email = first.email.clone();
    let err = customer::save(&db, None, second).await.unwrap_err();
    match err {
        ModelError::UniqueViolation(msg) => assert!(msg.contains(migration::UNIQ_EMAIL)),
        other => panic!("unexpected error: {other:?}"),
    }

    customer::delete_by_id(&db, created.id).await?;
    Ok(())
}

/// Overwriting a missing row reports not found
#[tokio::test]
async fn test_update_missing_row() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let err = customer::save(&db, Some(i64::MAX), unique_fields()?).await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound));
    Ok(())
}
