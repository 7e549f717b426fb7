use super::*;

use leptos::prelude::*;

fn render_page() -> String {
    view! { <LoginView/> }.to_html()
}

/// The opening tag that starts with `prefix`.
fn opening_tag<'a>(html: &'a str, prefix: &str) -> &'a str {
    let start = html.find(prefix).unwrap_or_else(|| panic!("{prefix} not rendered in {html}"));
    let rest = &html[start..];
    &rest[..=rest.find('>').unwrap()]
}

#[test]
fn active_role_tab_is_highlighted() {
    assert_eq!(role_tab_class(true), "role-tab role-tab--active");
    assert_eq!(role_tab_class(false), "role-tab");
}

#[test]
fn each_role_has_its_own_icon_class() {
    let classes: Vec<_> = Role::ALL.into_iter().map(role_icon_class).collect();
    assert_eq!(classes.len(), 3);
    for (role, class) in Role::ALL.into_iter().zip(&classes) {
        assert!(class.ends_with(role.as_str()), "{class} should end with {role}");
    }
}

#[test]
fn password_input_masks_unless_visible() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}

#[test]
fn toggling_twice_renders_masked_input_again() {
    let state = LoginState::default();
    let (state, _) = state.transition(LoginEvent::Edit(Field::Password, "secret".to_owned()));
    let (state, _) = state.transition(LoginEvent::TogglePasswordVisibility);
    assert_eq!(password_input_type(state.password_visible), "text");
    let (state, _) = state.transition(LoginEvent::TogglePasswordVisibility);
    assert_eq!(password_input_type(state.password_visible), "password");
    assert_eq!(state.credentials.password, "secret");
}

#[test]
fn toggle_label_describes_next_action() {
    assert_eq!(visibility_toggle_label(false), "Show password");
    assert_eq!(visibility_toggle_label(true), "Hide password");
}

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(false), "Sign in to Portal");
    assert_eq!(submit_label(true), "Signing in...");
}

#[test]
fn submit_control_disabled_while_pending() {
    let state = LoginState::default();
    let (state, _) = state.transition(LoginEvent::Edit(Field::Username, "student".to_owned()));
    let (state, _) = state.transition(LoginEvent::Edit(Field::Password, "secret".to_owned()));
    assert!(state.can_submit());
    let (state, effect) = state.transition(LoginEvent::Submit);
    assert!(matches!(effect, Some(LoginEffect::Send(_))));
    assert!(!state.can_submit());
    assert_eq!(submit_label(state.loading()), "Signing in...");
}

#[test]
fn placeholder_and_guidance_follow_selected_role() {
    let guidance: Vec<_> = Role::ALL
        .into_iter()
        .map(|role| {
            let (state, _) = LoginState::default().transition(LoginEvent::SelectRole(role));
            assert_eq!(state.role.username_placeholder(), role.as_str());
            state.role.guidance()
        })
        .collect();
    assert_ne!(guidance[0], guidance[1]);
    assert_ne!(guidance[1], guidance[2]);
    assert_ne!(guidance[0], guidance[2]);
}

// =============================================================================
// server render
// =============================================================================

#[test]
fn server_rendered_form_posts_to_login_endpoint() {
    let html = render_page();
    let form = opening_tag(&html, "<form");
    assert!(form.contains(r#"method="post""#), "{form}");
    assert!(form.contains(r#"action="/api/auth/login""#), "{form}");
}

#[test]
fn server_rendered_submit_is_disabled_until_hydrated() {
    let html = render_page();
    let button = opening_tag(&html, r#"<button type="submit""#);
    assert!(button.contains("disabled"), "{button}");
}

#[test]
fn server_render_shows_student_defaults() {
    let html = render_page();
    let username = opening_tag(&html, r#"<input id="username""#);
    assert!(username.contains(r#"placeholder="student""#), "{username}");
    assert!(username.contains(" required"), "{username}");

    let password = opening_tag(&html, r#"<input id="password""#);
    assert!(password.contains(r#"type="password""#), "{password}");
    assert!(password.contains(" required"), "{password}");

    assert!(html.contains(r#"href="/reset-password""#));
    assert!(html.contains(Role::Student.guidance()));
    assert!(!html.contains("login-error"));
}
