use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::config::AuthSettings;
use crate::net::identity::{CredentialVerifier, DemoCredentials};
use crate::net::types::User;
use crate::util::session_store::SessionStore;
use crate::util::storage::MemoryStorage;

#[test]
fn validate_login_input_accepts_filled_fields() {
    assert_eq!(
        validate_login_input("admin@test.com", "123456"),
        Ok(Credentials { email: "admin@test.com".to_owned(), password: "123456".to_owned() })
    );
}

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  admin@test.com ", " 123456 "),
        Ok(Credentials { email: "admin@test.com".to_owned(), password: " 123456 ".to_owned() })
    );
}

#[test]
fn validate_login_input_rejects_empty_email() {
    assert_eq!(validate_login_input("", "123456"), Err(LoginError::Validation));
}

#[test]
fn validate_login_input_rejects_blank_fields() {
    assert_eq!(validate_login_input("   ", "123456"), Err(LoginError::Validation));
    assert_eq!(validate_login_input("admin@test.com", ""), Err(LoginError::Validation));
    assert_eq!(validate_login_input("admin@test.com", "  "), Err(LoginError::Validation));
}

#[test]
fn validation_message_is_user_facing() {
    assert_eq!(LoginError::Validation.to_string(), "Por favor, preencha todos os campos.");
}

#[test]
fn auth_failures_surface_verbatim() {
    assert_eq!(LoginError::from(AuthError::InvalidCredentials).to_string(), "Credenciais inválidas");
}

#[test]
fn demo_hint_names_the_demo_account() {
    assert_eq!(demo_hint(), "Demo: admin@test.com / 123456");
}

// =============================================================================
// LoginForm
// =============================================================================

#[derive(Default)]
struct CountingVerifier {
    calls: AtomicUsize,
}

impl CredentialVerifier for CountingVerifier {
    fn verify(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DemoCredentials::default().verify(email, password)
    }
}

/// Drive one submit the way `LoginPage` does: only credentials returned by
/// `begin_submit` reach the auth context.
fn submit(form: &mut LoginForm, verifier: &Arc<CountingVerifier>) -> (Option<Result<User, AuthError>>, AuthState) {
    let ctx = AuthContext::new(
        SessionStore::new(Arc::new(MemoryStorage::new())),
        verifier.clone(),
        AuthSettings::immediate(),
    );
    let state = RefCell::new(AuthState::default());
    block_on(ctx.hydrate(&state));
    let outcome = form
        .begin_submit()
        .map(|c| block_on(ctx.login(&state, &c.email, &c.password)));
    (outcome, state.into_inner())
}

fn filled(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned(), ..LoginForm::default() }
}

#[test]
fn empty_email_never_reaches_auth_context() {
    let verifier = Arc::new(CountingVerifier::default());
    let mut form = filled("", "123456");

    let (outcome, state) = submit(&mut form, &verifier);

    assert!(outcome.is_none());
    assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    assert!(!state.loading);
    assert_eq!(
        form.feedback,
        Some((NoticeKind::Error, "Por favor, preencha todos os campos.".to_owned()))
    );
    assert_eq!(form.email, "");
    assert_eq!(form.password, "123456");
    assert!(!form.busy);
}

#[test]
fn valid_submit_reaches_auth_context_once() {
    let verifier = Arc::new(CountingVerifier::default());
    let mut form = filled(" admin@test.com ", "123456");

    let (outcome, state) = submit(&mut form, &verifier);

    assert!(matches!(outcome, Some(Ok(_))));
    assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    assert!(state.is_authenticated());
    assert!(form.busy);
    assert_eq!(form.feedback, None);
}

#[test]
fn begin_submit_while_busy_is_ignored() {
    let mut form = filled("admin@test.com", "123456");
    form.busy = true;
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form.feedback, None);
}

#[test]
fn begin_submit_clears_previous_error() {
    let mut form = filled("admin@test.com", "");
    assert_eq!(form.begin_submit(), None);
    assert!(form.feedback.is_some());

    form.password = "123456".to_owned();
    assert!(form.begin_submit().is_some());
    assert_eq!(form.feedback, None);
}

#[test]
fn succeed_shows_success_message_and_keeps_inputs_disabled() {
    let mut form = filled("admin@test.com", "123456");
    form.begin_submit();
    form.succeed();
    assert_eq!(form.feedback, Some((NoticeKind::Success, "Login realizado com sucesso!".to_owned())));
    assert!(form.busy);
}

#[test]
fn fail_shows_error_verbatim_and_keeps_typed_values() {
    let mut form = filled("admin@test.com", "wrong");
    form.remember = true;
    form.begin_submit();
    form.fail(&LoginError::from(AuthError::InvalidCredentials));

    assert_eq!(form.feedback, Some((NoticeKind::Error, "Credenciais inválidas".to_owned())));
    assert!(!form.busy);
    assert_eq!(form.email, "admin@test.com");
    assert_eq!(form.password, "wrong");
    assert!(form.remember);
}
