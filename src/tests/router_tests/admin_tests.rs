use crate::router::handle;
use crate::tests::utils::{
    body_string, flash, get, location, post_form, sign_in, sign_in_admin, test_state,
};

#[test]
fn admin_page_redirects_non_admins() {
    let state = test_state();
    let resp = handle(get("/admin", None), &state).unwrap();
    assert_eq!(location(&resp), Some("/"));

    let token = sign_in(&state, "ana@example.com", "Ana");
    let resp = handle(get("/admin", Some(&token)), &state).unwrap();
    assert_eq!(location(&resp), Some("/"));

    let resp = handle(post_form("/admin/items/1/approve", Some(&token), &[]), &state).unwrap();
    assert_eq!(location(&resp), Some("/"));
    assert_eq!(state.moderation.lock().unwrap().pending().count(), 2);
}

#[test]
fn admin_page_shows_queue_and_stats() {
    let state = test_state();
    let token = sign_in_admin(&state);

    let resp = handle(get("/admin", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("Pending Approvals (2)"));
    assert!(body.contains("Designer Handbag"));
    assert!(body.contains("1247"));

    let body = body_string(handle(get("/admin?tab=reported", Some(&token)), &state).unwrap());
    assert!(body.contains("Questionable Item"));
}

#[test]
fn approving_removes_from_pending() {
    let state = test_state();
    let token = sign_in_admin(&state);

    let resp = handle(post_form("/admin/items/1/approve", Some(&token), &[]), &state).unwrap();
    assert_eq!(location(&resp), Some("/admin"));
    assert_eq!(flash(&resp).unwrap().message, "Item approved successfully");

    let body = body_string(handle(get("/admin", Some(&token)), &state).unwrap());
    assert!(body.contains("Pending Approvals (1)"));
    assert!(!body.contains("Designer Handbag"));
}

#[test]
fn rejecting_removes_from_pending() {
    let state = test_state();
    let token = sign_in_admin(&state);

    let resp = handle(post_form("/admin/items/2/reject", Some(&token), &[]), &state).unwrap();
    assert_eq!(flash(&resp).unwrap().message, "Item rejected and user notified");
    assert!(state.moderation.lock().unwrap().pending().all(|s| s.id != 2));

    match handle(post_form("/admin/items/2/reject", Some(&token), &[]), &state) {
        Err(err) => assert_eq!(err.status(), 404),
        Ok(resp) => panic!("already decided, got {}", resp.status()),
    }
}

#[test]
fn removing_a_report() {
    let state = test_state();
    let token = sign_in_admin(&state);

    let resp = handle(post_form("/admin/reports/3/remove", Some(&token), &[]), &state).unwrap();
    assert_eq!(location(&resp), Some("/admin?tab=reported"));
    assert_eq!(flash(&resp).unwrap().message, "Reported item removed");
    assert!(state.moderation.lock().unwrap().reports().is_empty());
}
