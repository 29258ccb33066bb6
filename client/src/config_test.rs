use super::*;

#[test]
fn default_settings_match_browser_timings() {
    let settings = AuthSettings::default();
    assert_eq!(settings.login_delay, Duration::from_millis(1500));
    assert_eq!(settings.redirect_delay, Duration::from_millis(1000));
}

#[test]
fn immediate_settings_have_no_delays() {
    let settings = AuthSettings::immediate();
    assert!(settings.login_delay.is_zero());
    assert!(settings.redirect_delay.is_zero());
}

#[test]
fn notice_timings_are_independent_of_auth_settings() {
    assert_eq!(NOTICE_TTL, Duration::from_millis(3000));
    assert_eq!(SSO_FEEDBACK_DELAY, Duration::from_millis(1500));
    assert!(SSO_FEEDBACK_DELAY < NOTICE_TTL);
}

#[test]
fn storage_keys_are_distinct() {
    assert_ne!(TOKEN_KEY, USER_KEY);
}
