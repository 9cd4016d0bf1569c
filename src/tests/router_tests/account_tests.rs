use crate::router::handle;
use crate::tests::utils::{
    body_string, cookie_value, flash, get, location, post_form, sign_in, test_state,
};

#[test]
fn login_sets_session_and_redirects_to_dashboard() {
    let state = test_state();
    let resp = handle(
        post_form(
            "/auth/login",
            None,
            &[("email", "  Ana@Example.com "), ("name", "Ana")],
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), Some("/dashboard"));
    assert_eq!(flash(&resp).unwrap().message, "Welcome, Ana!");

    let token = cookie_value(&resp, "session").unwrap();
    let user = state.sessions.get(&token).unwrap().unwrap();
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.points, 150);
    assert!(!user.is_admin);
}

#[test]
fn login_without_name_uses_email_local_part() {
    let state = test_state();
    let token = sign_in(&state, "jo@example.com", "");
    assert_eq!(state.sessions.get(&token).unwrap().unwrap().name, "jo");
}

#[test]
fn invalid_email_rerenders_sign_in_page() {
    let state = test_state();
    let resp = handle(
        post_form("/auth/login", None, &[("email", "not-an-email"), ("name", "Ana")]),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 422);
    assert!(cookie_value(&resp, "session").is_none());
    let body = body_string(resp);
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("not-an-email"));
}

#[test]
fn auth_page_redirects_signed_in_users() {
    let state = test_state();
    let body = body_string(handle(get("/auth", None), &state).unwrap());
    assert!(body.contains("Welcome to ReWear"));

    let token = sign_in(&state, "ana@example.com", "Ana");
    let resp = handle(get("/auth", Some(&token)), &state).unwrap();
    assert_eq!(location(&resp), Some("/dashboard"));
}

#[test]
fn logout_ends_the_session() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let resp = handle(post_form("/auth/logout", Some(&token), &[]), &state).unwrap();
    assert_eq!(location(&resp), Some("/"));
    assert_eq!(cookie_value(&resp, "session").as_deref(), Some(""));
    assert!(state.sessions.get(&token).unwrap().is_none());

    let resp = handle(get("/dashboard", Some(&token)), &state).unwrap();
    assert_eq!(location(&resp), Some("/auth"));
}

#[test]
fn dashboard_requires_sign_in() {
    let state = test_state();
    let resp = handle(get("/dashboard", None), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), Some("/auth"));
}

#[test]
fn dashboard_greets_user_and_lists_items() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let body = body_string(handle(get("/dashboard", Some(&token)), &state).unwrap());
    assert!(body.contains("Welcome back, Ana!"));
    assert!(body.contains("Vintage Band T-Shirt"));

    let body = body_string(handle(get("/dashboard?tab=swaps", Some(&token)), &state).unwrap());
    assert!(body.contains("Swap with"));
}

#[test]
fn profile_signed_out_prompts_for_login() {
    let state = test_state();
    let resp = handle(get("/profile", None), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Please log in to view your profile."));
}

#[test]
fn profile_edit_saves_changes() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let body = body_string(handle(get("/profile?edit=1", Some(&token)), &state).unwrap());
    assert!(body.contains("action=\"/profile\""));

    let resp = handle(
        post_form(
            "/profile",
            Some(&token),
            &[
                ("name", "Ana Silva"),
                ("phone", "555-0100"),
                ("location", "Lisbon"),
                ("bio", "Thrift lover"),
            ],
        ),
        &state,
    )
    .unwrap();
    assert_eq!(location(&resp), Some("/profile"));
    assert_eq!(flash(&resp).unwrap().message, "Profile updated");

    let user = state.sessions.get(&token).unwrap().unwrap();
    assert_eq!(user.name, "Ana Silva");
    assert_eq!(user.profile.location, "Lisbon");
}

#[test]
fn profile_rejects_empty_name() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let resp = handle(
        post_form("/profile", Some(&token), &[("name", "  "), ("bio", "kept")]),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Name cannot be empty"));
    assert_eq!(state.sessions.get(&token).unwrap().unwrap().name, "Ana");
}

#[test]
fn shown_flash_is_cleared() {
    let state = test_state();
    let req = http::Request::builder()
        .uri("/")
        .header("Cookie", "flash=success%3AHello")
        .body(astra::Body::empty())
        .unwrap();

    let resp = handle(req, &state).unwrap();
    assert_eq!(cookie_value(&resp, "flash").as_deref(), Some(""));
    assert!(body_string(resp).contains("Hello"));
}
