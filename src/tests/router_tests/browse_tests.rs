use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};
use astra::Body;
use http::Request;

#[test]
fn home_page_shows_featured_items() {
    let state = test_state();
    let resp = handle(get("/", None), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Vintage Denim Jacket"));
    assert!(!body.contains("Cotton T-Shirt"), "only the first four are featured");
}

#[test]
fn browse_without_filters_lists_everything() {
    let state = test_state();
    let body = body_string(handle(get("/browse", None), &state).unwrap());

    assert!(body.contains("Showing 6 items"));
    assert_eq!(body.matches("data-listing-id=").count(), 6);
}

#[test]
fn browse_filters_by_query_and_category() {
    let state = test_state();
    let resp = handle(get("/browse?q=sweater&category=Knitwear", None), &state).unwrap();

    let body = body_string(resp);
    assert!(body.contains("Showing 1 items"));
    assert!(body.contains("Cozy Wool Sweater"));
    assert!(!body.contains("Vintage Denim Jacket"));
}

#[test]
fn browse_condition_filter_is_exact() {
    let state = test_state();
    let body = body_string(handle(get("/browse?condition=Good", None), &state).unwrap());

    assert!(body.contains("Showing 2 items"));
    assert!(body.contains("Classic White Sneakers"));
    assert!(body.contains("Cotton T-Shirt"));
}

#[test]
fn browse_with_no_matches_shows_empty_state() {
    let state = test_state();
    let body = body_string(handle(get("/browse?q=tuxedo", None), &state).unwrap());

    assert!(body.contains("Showing 0 items"));
    assert!(body.contains("No items found"));
    assert!(body.contains("Clear filters"));
}

#[test]
fn unknown_category_is_a_bad_request() {
    let state = test_state();
    match handle(get("/browse?category=Spacesuits", None), &state) {
        Err(err) => assert_eq!(err.status(), 400),
        Ok(resp) => panic!("expected an error, got {}", resp.status()),
    }
}

#[test]
fn list_view_shows_the_same_listings() {
    let state = test_state();
    let grid = body_string(handle(get("/browse?q=denim&view=grid", None), &state).unwrap());
    let list = body_string(handle(get("/browse?q=denim&view=list", None), &state).unwrap());

    assert!(grid.contains("listing-grid"));
    assert!(list.contains("listing-list"));
    assert!(grid.contains("Showing 1 items"));
    assert!(list.contains("Showing 1 items"));
}

#[test]
fn htmx_requests_get_the_results_fragment() {
    let state = test_state();
    let req = Request::builder()
        .uri("/browse?category=Footwear")
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();

    let body = body_string(handle(req, &state).unwrap());
    assert!(body.contains("Classic White Sneakers"));
    assert!(!body.contains("<html"), "fragment must not include the layout");
}

#[test]
fn results_route_returns_a_fragment() {
    let state = test_state();
    let body = body_string(handle(get("/browse/results?q=dress", None), &state).unwrap());

    assert!(body.contains("Designer Summer Dress"));
    assert!(!body.contains("<html"));
}

#[test]
fn api_returns_filtered_listings_as_json() {
    let state = test_state();
    let resp = handle(get("/api/listings?condition=Excellent", None), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let ids: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn unknown_route_renders_not_found_page() {
    let state = test_state();
    let resp = handle(get("/nowhere", None), &state).unwrap();

    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Oops! Page not found"));
}
