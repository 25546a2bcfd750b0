use bookstack::middleware::auth::AuthUser;
use bookstack::middleware::role::{check_role, parse_role_from_string};
use bookstack::modules::auth::model::Claims;
use bookstack::modules::users::model::UserRole;

fn create_test_auth_user(role: &str) -> AuthUser {
    let claims = Claims {
        sub: "00000000-0000-0000-0000-000000000000".to_string(),
        email: "test@example.com".to_string(),
        role: role.to_string(),
        exp: 9999999999,
        iat: 1234567890,
    };
    AuthUser(claims)
}

#[test]
fn test_check_role_exact_match() {
    let auth_user = create_test_auth_user("admin");
    assert!(check_role(&auth_user, UserRole::Admin).is_ok());

    let auth_user = create_test_auth_user("member");
    assert!(check_role(&auth_user, UserRole::Member).is_ok());
}

#[test]
fn test_check_role_no_match() {
    let auth_user = create_test_auth_user("member");
    assert!(check_role(&auth_user, UserRole::Admin).is_err());

    let auth_user = create_test_auth_user("admin");
    assert!(check_role(&auth_user, UserRole::Member).is_err());
}

#[test]
fn test_check_role_invalid_role_string() {
    let auth_user = create_test_auth_user("superuser");
    assert!(check_role(&auth_user, UserRole::Admin).is_err());
}

#[test]
fn test_parse_role_from_string() {
    assert!(matches!(
        parse_role_from_string("admin"),
        Ok(UserRole::Admin)
    ));
    assert!(matches!(
        parse_role_from_string("member"),
        Ok(UserRole::Member)
    ));
    assert!(parse_role_from_string("invalid").is_err());
}

#[test]
fn test_is_admin_helper() {
    assert!(create_test_auth_user("admin").is_admin());
    assert!(!create_test_auth_user("member").is_admin());
    assert!(!create_test_auth_user("superuser").is_admin());
}
