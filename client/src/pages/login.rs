//! Login page with the demo email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Input is validated here before `AuthContext::login` is
//! called. While a submit is running the page raises `NavState::hold` so the
//! route guard leaves the form on screen; the page navigates on its own once
//! the success message has been shown.
//!
//! DESIGN
//! ======
//! Form state lives in one `LoginForm` value. Its transitions are plain
//! methods so the submit rules are testable without a browser; the component
//! only wires them to events and to the async login task.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::sso_buttons::SsoButtons;
use crate::config::{APP_DESCRIPTION, APP_NAME, DEMO_EMAIL, DEMO_PASSWORD};
use crate::state::auth::AuthState;
use crate::state::nav::NavState;
use crate::state::notice::NoticeKind;
use crate::util::auth::{AuthContext, AuthError};
use crate::util::task::MountFlag;

const SUCCESS_MESSAGE: &str = "Login realizado com sucesso!";

/// Failure surfaced by the login form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Por favor, preencha todos os campos.")]
    Validation,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Validated form input. Lives only for one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Check that both fields are filled. The email is trimmed; the password is
/// passed through untouched.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, LoginError> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(LoginError::Validation);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Everything the login form shows or edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// "Lembrar-me". Sessions persist either way; kept for the form layout.
    pub remember: bool,
    pub busy: bool,
    pub feedback: Option<(NoticeKind, String)>,
    pub show_hint: bool,
}

impl LoginForm {
    /// Start a submit.
    ///
    /// Returns the credentials to hand to `AuthContext::login`, or `None`
    /// when nothing should be sent: a submit is already running, or the
    /// input failed validation (the message is set, typed values are kept).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.busy {
            return None;
        }
        match validate_login_input(&self.email, &self.password) {
            Ok(credentials) => {
                self.busy = true;
                self.feedback = None;
                Some(credentials)
            }
            Err(e) => {
                self.feedback = Some((NoticeKind::Error, e.to_string()));
                None
            }
        }
    }

    /// Record a successful login. Inputs stay disabled until navigation.
    pub fn succeed(&mut self) {
        self.feedback = Some((NoticeKind::Success, SUCCESS_MESSAGE.to_owned()));
    }

    /// Record a failed login and re-enable the inputs.
    pub fn fail(&mut self, error: &LoginError) {
        self.feedback = Some((NoticeKind::Error, error.to_string()));
        self.busy = false;
    }
}

fn demo_hint() -> String {
    format!("Demo: {DEMO_EMAIL} / {DEMO_PASSWORD}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let ctx = expect_context::<AuthContext>();

    let form = RwSignal::new(LoginForm::default());
    let busy = move || form.with(|f| f.busy);

    let alive = MountFlag::for_current_owner();
    on_cleanup(move || {
        let _ = nav.try_update(|n| n.hold = false);
    });

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        nav.update(|n| n.hold = true);

        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            let alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = ctx.login(&auth, &credentials.email, &credentials.password).await;
                if !alive.is_mounted() {
                    return;
                }
                match outcome {
                    Ok(_) => {
                        form.update(LoginForm::succeed);
                        crate::util::task::sleep(ctx.settings().redirect_delay).await;
                        if !alive.is_mounted() {
                            return;
                        }
                        let remembered = nav.try_update(NavState::take_return).flatten();
                        let target = crate::util::guard::return_target(remembered.as_deref());
                        navigate(
                            &target,
                            leptos_router::NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(e) => {
                        form.update(|f| f.fail(&LoginError::from(e)));
                        nav.update(|n| n.hold = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ctx, &alive, auth, credentials);
        }
    };

    let on_forgot_password = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        form.update(|f| f.show_hint = true);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__brand">{APP_NAME}</div>
                <h1>"Bem-vindo de volta"</h1>
                <p class="login-card__subtitle">
                    "Faça login para acessar sua plataforma de " {APP_DESCRIPTION}
                </p>
                <p class="login-card__demo">{demo_hint()}</p>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label" for="email">
                        "Email ou Usuário"
                    </label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="seu.email@empresa.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        disabled=busy
                    />
                    <label class="login-form__label" for="password">
                        "Senha"
                    </label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Digite sua senha"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        disabled=busy
                    />
                    <div class="login-form__options">
                        <label class="login-form__remember" for="remember">
                            <input
                                id="remember"
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.remember)
                                on:change=move |ev| form.update(|f| f.remember = event_target_checked(&ev))
                                disabled=busy
                            />
                            "Lembrar-me"
                        </label>
                        <a href="#" class="login-form__forgot" on:click=on_forgot_password>
                            "Esqueci minha senha"
                        </a>
                    </div>
                    <Show when=move || form.with(|f| f.show_hint)>
                        <p class="login-message login-message--hint">{demo_hint()}</p>
                    </Show>
                    <button
                        class="login-button"
                        class=("login-button--loading", busy)
                        type="submit"
                        disabled=busy
                    >
                        {move || if busy() { "Entrando..." } else { "Entrar na Plataforma" }}
                    </button>
                </form>

                {move || {
                    form.with(|f| f.feedback.clone())
                        .map(|(kind, message)| {
                            view! {
                                <p class=format!("login-message {}", kind.class()) role="alert">
                                    {message}
                                </p>
                            }
                        })
                }}

                <div class="login-divider">
                    <span>"ou continue com"</span>
                </div>
                <SsoButtons/>

                <p class="login-footer">
                    "Ao fazer login, você concorda com nossos " <a href="#">"Termos de Uso"</a> " e "
                    <a href="#">"Política de Privacidade"</a>
                </p>
            </div>
        </div>
    }
}
