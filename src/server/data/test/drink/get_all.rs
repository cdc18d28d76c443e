use super::*;

/// Tests listing drinks from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_drinks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DrinkRepository::new(db);
    let drinks = repo.get_all().await?;

    assert!(drinks.is_empty());

    Ok(())
}

/// Tests that listing returns every drink ordered by id.
///
/// Expected: Ok with drinks in insertion order
#[tokio::test]
async fn returns_all_drinks_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::drink::create_drink_with_title(db, "Americano").await?;
    let second = factory::drink::create_drink_with_title(db, "Cortado").await?;
    let third = factory::drink::create_drink_with_title(db, "Mocha").await?;

    let repo = DrinkRepository::new(db);
    let drinks = repo.get_all().await?;

    let ids: Vec<i32> = drinks.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that listing fails when the table doesn't exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DrinkRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_err());

    Ok(())
}
