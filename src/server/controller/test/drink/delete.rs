use super::*;

fn delete(drink_id: impl std::fmt::Display) -> Request<Body> {
    empty_body(with_permissions(
        request(Method::DELETE, &format!("/drinks/{}", drink_id)),
        &["delete:drinks"],
    ))
}

/// Tests deleting an existing drink.
///
/// Expected: 200 echoing the id, the drink is gone from the listing, a second delete is 404
#[tokio::test]
async fn deletes_drink() {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drink = factory::drink::create_drink(db).await.unwrap();
    let kept = factory::drink::create_drink(db).await.unwrap();

    let response = send(db, delete(drink.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"success": true, "delete": drink.id}));

    let listing = send(db, empty_body(request(Method::GET, "/drinks"))).await;
    let ids: Vec<i64> = listing.body["drinks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![kept.id as i64]);

    let again = send(db, delete(drink.id)).await;

    assert_error(&again, StatusCode::NOT_FOUND, json!(404), "Resource not found");
}

/// Tests deleting a drink id that doesn't exist.
///
/// Expected: 404 "Resource not found"
#[tokio::test]
async fn missing_drink_is_not_found() {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(db, delete(7)).await;

    assert_error(&response, StatusCode::NOT_FOUND, json!(404), "Resource not found");
}

/// Tests a drink id that isn't an integer.
///
/// Expected: 422
#[tokio::test]
async fn non_integer_id_is_unprocessable() {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(db, delete("water")).await;

    assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, json!(422), "unprocessable");
}

/// Tests that a store failure on delete is unprocessable.
///
/// Expected: 422 "unprocessable"
#[tokio::test]
async fn store_failure_is_unprocessable() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(db, delete(1)).await;

    assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, json!(422), "unprocessable");
}

/// Tests a token lacking delete:drinks.
///
/// Expected: 403 and the drink still stored
#[tokio::test]
async fn rejects_token_without_delete_permission() {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drink = factory::drink::create_drink(db).await.unwrap();

    let response = send(
        db,
        empty_body(with_permissions(
            request(Method::DELETE, &format!("/drinks/{}", drink.id)),
            &["patch:drinks"],
        )),
    )
    .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(drink_count(db).await, 1);
}

/// Tests a header that isn't a bearer token.
///
/// Expected: 401 invalid_header naming the wrong part
#[tokio::test]
async fn rejects_non_bearer_header() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(
        db,
        empty_body(
            request(Method::DELETE, "/drinks/1").header(AUTHORIZATION, "Token abc.def.ghi"),
        ),
    )
    .await;

    assert_error(
        &response,
        StatusCode::UNAUTHORIZED,
        json!("invalid_header"),
        "Authorization header must start with \"Bearer\".",
    );
}
