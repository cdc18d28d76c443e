use super::*;

/// Tests finding an existing drink.
///
/// Expected: Ok(Some) with matching row
#[tokio::test]
async fn finds_existing_drink() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drink::create_drink_with_title(db, "Flat White").await?;

    let repo = DrinkRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests finding a drink that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_drink() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DrinkRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
