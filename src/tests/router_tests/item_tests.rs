use crate::router::handle;
use crate::tests::utils::{body_string, flash, get, location, post_form, sign_in, test_state};

#[test]
fn item_page_shows_details_and_gallery() {
    let state = test_state();
    let resp = handle(get("/item/1?image=2", None), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Vintage Denim Jacket"));
    assert!(body.contains("Sarah M."));
    assert!(body.contains("Posted Jan 10, 2024"));
    assert!(body.contains("Redeem with 75 Points"));
}

#[test]
fn missing_item_is_not_found() {
    let state = test_state();
    for uri in ["/item/99", "/item/abc"] {
        match handle(get(uri, None), &state) {
            Err(err) => assert_eq!(err.status(), 404, "{uri}"),
            Ok(resp) => panic!("{uri}: expected 404, got {}", resp.status()),
        }
    }
}

#[test]
fn unavailable_item_hides_actions() {
    let state = test_state();
    let body = body_string(handle(get("/item/5", None), &state).unwrap());

    assert!(body.contains("This item is no longer available"));
    assert!(!body.contains("Request Swap"));
}

#[test]
fn anonymous_actions_redirect_to_sign_in() {
    let state = test_state();
    for action in ["swap", "redeem", "like"] {
        let resp = handle(post_form(&format!("/item/1/{action}"), None, &[]), &state).unwrap();
        assert_eq!(resp.status(), 303);
        assert_eq!(location(&resp), Some("/auth"), "{action}");
    }
}

#[test]
fn swap_request_names_the_owner() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let resp = handle(post_form("/item/1/swap", Some(&token), &[]), &state).unwrap();
    assert_eq!(location(&resp), Some("/item/1"));
    assert_eq!(flash(&resp).unwrap().message, "Swap request sent to Sarah M.");
}

#[test]
fn redeeming_deducts_points() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let resp = handle(post_form("/item/2/redeem", Some(&token), &[]), &state).unwrap();
    assert_eq!(flash(&resp).unwrap().message, "Item redeemed successfully!");
    assert_eq!(state.sessions.get(&token).unwrap().unwrap().points, 30);
}

#[test]
fn insufficient_points_leave_the_balance_alone() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");
    handle(post_form("/item/2/redeem", Some(&token), &[]), &state).unwrap();

    let resp = handle(post_form("/item/4/redeem", Some(&token), &[]), &state).unwrap();
    assert_eq!(
        flash(&resp).unwrap().message,
        "Insufficient points. You need 60 more points."
    );
    assert_eq!(state.sessions.get(&token).unwrap().unwrap().points, 30);

    let body = body_string(handle(get("/item/4", Some(&token)), &state).unwrap());
    assert!(body.contains("You need 60 more points to redeem this item."));
}

#[test]
fn unavailable_item_cannot_be_redeemed() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let resp = handle(post_form("/item/5/redeem", Some(&token), &[]), &state).unwrap();
    assert_eq!(flash(&resp).unwrap().message, "This item is no longer available");
    assert_eq!(state.sessions.get(&token).unwrap().unwrap().points, 150);
}

#[test]
fn like_toggles_favorite() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let resp = handle(post_form("/item/3/like", Some(&token), &[]), &state).unwrap();
    assert_eq!(flash(&resp).unwrap().message, "Added to favorites");
    let body = body_string(handle(get("/item/3", Some(&token)), &state).unwrap());
    assert!(body.contains("Remove from Favorites"));

    let resp = handle(post_form("/item/3/like", Some(&token), &[]), &state).unwrap();
    assert_eq!(flash(&resp).unwrap().message, "Removed from favorites");
    assert!(!state.sessions.get(&token).unwrap().unwrap().favorites.contains(&3));
}
