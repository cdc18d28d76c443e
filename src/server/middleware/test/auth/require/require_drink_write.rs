use super::*;

/// Tests each write permission is granted by exactly its own permission string.
///
/// Expected: Ok for the matching permission, PermissionDenied for the others
#[test]
fn each_write_permission_is_independent() {
    let verifier = verifier();
    let cases = [
        (Permission::CreateDrink, "post:drinks"),
        (Permission::UpdateDrink, "patch:drinks"),
        (Permission::DeleteDrink, "delete:drinks"),
    ];

    for (permission, granted) in cases {
        let token = token_with(&[granted]).unwrap();
        let headers = headers_with(&bearer(&token));
        let guard = AuthGuard::new(&verifier, &headers);

        for (other, _) in cases {
            let result = guard.require(&[other]);
            if other == permission {
                assert!(result.is_ok(), "{} should grant {:?}", granted, other);
            } else {
                assert!(
                    matches!(
                        result,
                        Err(AppError::AuthErr(AuthError::PermissionDenied(_)))
                    ),
                    "{} should not grant {:?}",
                    granted,
                    other
                );
            }
        }
    }
}

/// Tests the permission strings match what the issuer puts in tokens.
///
/// Expected: exact string values
#[test]
fn permission_strings_match_issuer_values() {
    assert_eq!(Permission::ViewDrinkDetail.as_str(), "get:drinks-detail");
    assert_eq!(Permission::CreateDrink.as_str(), "post:drinks");
    assert_eq!(Permission::UpdateDrink.as_str(), "patch:drinks");
    assert_eq!(Permission::DeleteDrink.as_str(), "delete:drinks");
}
