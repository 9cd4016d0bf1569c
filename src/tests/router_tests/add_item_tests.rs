use crate::router::handle;
use crate::tests::utils::{
    body_string, flash, get, location, post_multipart, sign_in, test_state, Part,
};

const PNG: &[u8] = b"\x89PNG fake pixels";

fn complete_fields() -> Vec<Part<'static>> {
    vec![
        Part::text("title", "Wool Coat"),
        Part::text("description", "Warm camel coat, barely worn"),
        Part::text("category", "Outerwear"),
        Part::text("condition", "Very Good"),
        Part::text("size", "M"),
        Part::text("tags", "wool, winter"),
    ]
}

#[test]
fn form_requires_sign_in() {
    let state = test_state();
    let resp = handle(get("/add-item", None), &state).unwrap();
    assert_eq!(location(&resp), Some("/auth"));
}

#[test]
fn form_renders_for_signed_in_user() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let body = body_string(handle(get("/add-item", Some(&token)), &state).unwrap());
    assert!(body.contains("List a New Item"));
    assert!(body.contains("Up to 5 photos"));
}

#[test]
fn submission_without_images_is_rejected() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let resp = handle(
        post_multipart("/add-item", Some(&token), &complete_fields()),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Please add at least one image"));
    assert!(body.contains("Wool Coat"), "typed values are kept");
}

#[test]
fn too_many_images_are_rejected() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let mut parts = complete_fields();
    for name in ["1.png", "2.png", "3.png", "4.png", "5.png", "6.png"] {
        parts.push(Part::image(name, PNG));
    }

    let resp = handle(post_multipart("/add-item", Some(&token), &parts), &state).unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("You can upload up to 5 photos"));
}

#[test]
fn picked_file_count_is_checked_before_reading_images() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let mut parts = complete_fields();
    for name in ["1.png", "2.png", "3.png", "4.png"] {
        parts.push(Part::image(name, PNG));
    }
    for name in ["notes.txt", "care.txt"] {
        parts.push(Part {
            name: "images",
            filename: Some(name),
            content_type: "text/plain",
            data: b"hand wash only",
        });
    }

    let resp = handle(post_multipart("/add-item", Some(&token), &parts), &state).unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("You can upload up to 5 photos"));
    assert_eq!(state.moderation.lock().unwrap().pending().count(), 2);
}

#[test]
fn missing_required_fields_are_rejected() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let parts = vec![
        Part::text("title", "Wool Coat"),
        Part::image("coat.png", PNG),
    ];
    let resp = handle(post_multipart("/add-item", Some(&token), &parts), &state).unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Please fill in all required fields"));
}

#[test]
fn valid_submission_enters_the_moderation_queue() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let mut parts = complete_fields();
    parts.push(Part::image("front.png", PNG));
    parts.push(Part::image("back.png", PNG));

    let resp = handle(post_multipart("/add-item", Some(&token), &parts), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), Some("/dashboard"));
    assert_eq!(
        flash(&resp).unwrap().message,
        "Item listed successfully! Awaiting admin approval."
    );

    let user = state.sessions.get(&token).unwrap().unwrap();
    assert_eq!(user.submissions.len(), 1);

    {
        let queue = state.moderation.lock().unwrap();
        let submission = queue.get(user.submissions[0]).unwrap();
        assert_eq!(submission.title, "Wool Coat");
        assert_eq!(submission.submitter, "Ana");
        assert_eq!(submission.images.len(), 2);
        assert!(submission.images[0].starts_with("data:image/png;base64,"));
        assert_eq!(submission.tags, vec!["wool", "winter"]);
        assert_eq!(queue.pending().count(), 3);
    }

    let body = body_string(handle(get("/dashboard", Some(&token)), &state).unwrap());
    assert!(body.contains("Wool Coat"));
    assert!(body.contains("Points pending review"));
}

#[test]
fn preview_returns_thumbnails_in_selection_order() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let parts = [
        Part::image("first.png", PNG),
        Part::image("second.png", PNG),
        Part::image("third.png", PNG),
    ];
    let resp = handle(
        post_multipart("/add-item/preview", Some(&token), &parts),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let first = body.find("first.png").unwrap();
    let second = body.find("second.png").unwrap();
    let third = body.find("third.png").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn preview_reads_at_most_one_file_past_the_limit() {
    let state = test_state();
    let token = sign_in(&state, "ana@example.com", "Ana");

    let names: Vec<String> = (0..40).map(|i| format!("photo{i}.png")).collect();
    let parts: Vec<Part<'_>> = names.iter().map(|n| Part::image(n, PNG)).collect();

    let resp = handle(
        post_multipart("/add-item/preview", Some(&token), &parts),
        &state,
    )
    .unwrap();

    let body = body_string(resp);
    assert_eq!(body.matches("data-index=").count(), 6);
    assert!(body.contains("You can upload up to 5 photos"));
    assert!(!body.contains("photo6.png"));
}

#[test]
fn preview_requires_sign_in() {
    let state = test_state();
    let parts = [Part::image("first.png", PNG)];
    match handle(post_multipart("/add-item/preview", None, &parts), &state) {
        Err(err) => assert_eq!(err.status(), 401),
        Ok(resp) => panic!("expected 401, got {}", resp.status()),
    }
}
