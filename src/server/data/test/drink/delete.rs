use super::*;

/// Tests deleting a drink by ID.
///
/// Expected: Ok(true) with drink removed
#[tokio::test]
async fn deletes_drink_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drink::create_drink(db).await?;

    let repo = DrinkRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted);

    // Verify drink no longer exists
    let db_drink = entity::prelude::Drink::find_by_id(created.id).one(db).await?;
    assert!(db_drink.is_none());

    Ok(())
}

/// Tests deleting a drink that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_drink() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DrinkRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that deleting one drink leaves the others.
///
/// Expected: Ok(true) with remaining drink intact
#[tokio::test]
async fn leaves_other_drinks_intact() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::drink::create_drink(db).await?;
    let kept = factory::drink::create_drink(db).await?;

    let repo = DrinkRepository::new(db);
    repo.delete(doomed.id).await?;

    assert_eq!(entity::prelude::Drink::find().count(db).await?, 1);
    assert!(repo.find_by_id(kept.id).await?.is_some());

    Ok(())
}
