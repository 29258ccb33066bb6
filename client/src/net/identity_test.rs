use super::*;

#[test]
fn demo_credentials_accept_the_demo_pair() {
    let user = DemoCredentials::default().verify("admin@test.com", "123456").unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "Administrador");
    assert_eq!(user.email, "admin@test.com");
}

#[test]
fn demo_credentials_reject_wrong_password() {
    let result = DemoCredentials::default().verify("admin@test.com", "654321");
    assert_eq!(result, Err(AuthError::InvalidCredentials));
}

#[test]
fn demo_credentials_reject_unknown_email() {
    let result = DemoCredentials::default().verify("someone@test.com", "123456");
    assert_eq!(result, Err(AuthError::InvalidCredentials));
}

#[test]
fn demo_credentials_compare_email_exactly() {
    let result = DemoCredentials::default().verify("ADMIN@test.com", "123456");
    assert_eq!(result, Err(AuthError::InvalidCredentials));
}

#[test]
fn custom_credentials_resolve_their_own_user() {
    let user = User { id: "7".to_owned(), name: "Op".to_owned(), email: "op@plant.com".to_owned() };
    let verifier = DemoCredentials::new("op@plant.com", "pw", user.clone());
    assert_eq!(verifier.verify("op@plant.com", "pw"), Ok(user));
}
