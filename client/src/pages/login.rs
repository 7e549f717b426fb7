//! Role-selectable sign-in page for students, guides and admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page keeps one `LoginState` in a signal. DOM events become
//! `LoginEvent`s, `dispatch` applies them through `LoginState::transition`,
//! and any resulting `LoginEffect` is executed here: `Send` spawns the HTTP
//! call and feeds its outcome back, `Navigate` leaves the page.
//!
//! The outcome is applied with `try_update`, so a response that lands after
//! the page is disposed is dropped instead of touching freed state.
//!
//! Before hydration the form is plain HTML. It posts to the login endpoint
//! and its submit button is disabled, so credentials never reach a query
//! string.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use portal_auth::{
    Field, LOGIN_ENDPOINT, LoginEffect, LoginEvent, LoginState, RESET_PASSWORD_PATH, Role,
};

fn role_tab_class(active: bool) -> &'static str {
    if active { "role-tab role-tab--active" } else { "role-tab" }
}

fn role_icon_class(role: Role) -> &'static str {
    match role {
        Role::Student => "role-tab__icon role-tab__icon--student",
        Role::Guide => "role-tab__icon role-tab__icon--guide",
        Role::Admin => "role-tab__icon role-tab__icon--admin",
    }
}

fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

fn visibility_toggle_label(visible: bool) -> &'static str {
    if visible { "Hide password" } else { "Show password" }
}

fn submit_label(loading: bool) -> &'static str {
    if loading { "Signing in..." } else { "Sign in to Portal" }
}

/// Apply `event` to the page state and run whatever effect it produces.
fn dispatch(state: RwSignal<LoginState>, event: LoginEvent) {
    let effect = state
        .try_update(|current| {
            let (next, effect) = current.transition(event);
            *current = next;
            effect
        })
        .flatten();
    if let Some(effect) = effect {
        run_effect(state, effect);
    }
}

fn run_effect(state: RwSignal<LoginState>, effect: LoginEffect) {
    match effect {
        LoginEffect::Send(pending) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::login(&pending.request).await;
                dispatch(state, LoginEvent::settled(pending.attempt, outcome));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (state, pending);
        }
        LoginEffect::Navigate(path) => crate::util::navigate::redirect(&path),
    }
}

#[component]
pub fn LoginView() -> impl IntoView {
    let state = RwSignal::new(LoginState::default());
    // Effects only run in the browser, so the server-rendered submit button
    // stays disabled until hydration attaches `on_submit`.
    let interactive = RwSignal::new(false);
    Effect::new(move || interactive.set(true));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(state, LoginEvent::Submit);
    };

    let role_tabs = Role::ALL
        .into_iter()
        .map(move |role| {
            view! {
                <button
                    type="button"
                    class=move || role_tab_class(state.with(|s| s.role == role))
                    on:click=move |_| dispatch(state, LoginEvent::SelectRole(role))
                >
                    <span class={role_icon_class(role)}></span>
                    {role.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__badge"></div>
                <div class="login-card__header">
                    <h1>"Internship Portal"</h1>
                    <p class="login-card__subtitle">
                        "Welcome to your internship management system"
                        <span class="login-card__tagline">"Connect. Learn. Grow."</span>
                    </p>
                </div>

                <div class="role-tabs">{role_tabs}</div>

                <Show when=move || state.with(|s| s.error.is_some())>
                    <div class="login-error" role="alert">
                        {move || state.with(|s| s.error.clone().unwrap_or_default())}
                    </div>
                </Show>

                <form class="login-form" method="post" action=LOGIN_ENDPOINT on:submit=on_submit>
                    <div class="login-field">
                        <label class="login-label" for="username">
                            "Username " <span class="login-label__required">"*"</span>
                        </label>
                        <input
                            id="username"
                            class="login-input"
                            type="text"
                            name={Field::Username.name()}
                            required
                            placeholder=move || state.with(|s| s.role.username_placeholder())
                            prop:value=move || state.with(|s| s.credentials.username.clone())
                            on:input=move |ev| {
                                dispatch(state, LoginEvent::Edit(Field::Username, event_target_value(&ev)));
                            }
                        />
                    </div>

                    <div class="login-field">
                        <label class="login-label" for="password">
                            "Password " <span class="login-label__required">"*"</span>
                        </label>
                        <div class="login-password">
                            <input
                                id="password"
                                class="login-input login-input--password"
                                type=move || password_input_type(state.with(|s| s.password_visible))
                                name={Field::Password.name()}
                                required
                                placeholder="••••••••"
                                prop:value=move || state.with(|s| s.credentials.password.clone())
                                on:input=move |ev| {
                                    dispatch(state, LoginEvent::Edit(Field::Password, event_target_value(&ev)));
                                }
                            />
                            <button
                                type="button"
                                class="login-password__toggle"
                                aria-label=move || visibility_toggle_label(state.with(|s| s.password_visible))
                                on:click=move |_| dispatch(state, LoginEvent::TogglePasswordVisibility)
                            >
                                {move || if state.with(|s| s.password_visible) { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        <div class="login-field__links">
                            <a href=RESET_PASSWORD_PATH class="login-link">"Reset password"</a>
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="login-button"
                        disabled=move || !interactive.get() || state.with(|s| !s.can_submit())
                    >
                        {move || submit_label(state.with(LoginState::loading))}
                    </button>
                </form>

                <p class="login-card__guidance">{move || state.with(|s| s.role.guidance())}</p>
            </div>
        </div>
    }
}
