use crate::domain::submission::{SubmissionError, SubmissionForm, ValidSubmission};
use crate::errors::ServerError;
use crate::handlers::{redirect_with_toast, today, Ctx};
use crate::notify::Toast;
use crate::request::{header, read_body};
use crate::responses::{html_response, redirect, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{self, AddItemVm};
use crate::uploads::{boundary, parse_multipart, read_previews, MultipartForm};
use astra::Request;
use tracing::info;

pub fn form(state: &AppState, ctx: &Ctx) -> ResultResp {
    if ctx.signed_in().is_none() {
        return redirect("/auth");
    }

    let form = SubmissionForm::default();
    let vm = AddItemVm {
        form: &form,
        max_images: state.config.max_images,
    };
    ctx.page(pages::add_item_page(ctx.chrome(), &vm))
}

pub fn create(req: &mut Request, state: &AppState, ctx: &Ctx) -> ResultResp {
    let Some((token, user)) = ctx.signed_in() else {
        return redirect("/auth");
    };

    let multipart = read_multipart(req)?;
    let form = SubmissionForm::from_fields(
        multipart
            .fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );
    let max_images = state.config.max_images;
    let files = multipart.files_named("images");

    let checked = if files.len() > max_images {
        Err(SubmissionError::TooManyImages(max_images))
    } else {
        let previews = read_previews(&files);
        form
            .validate(previews.len(), max_images)
            .map(|valid| (valid, previews))
    };

    let (valid, previews) = match checked {
        Ok(checked) => checked,
        Err(e) => {
            let toast = Toast::error(e.to_string());
            let vm = AddItemVm {
                form: &form,
                max_images,
            };
            return ctx.page_with_status(422, pages::add_item_page(ctx.chrome_with(&toast), &vm));
        }
    };

    let title = valid.title.clone();
    let images = previews.into_iter().map(|p| p.data_url).collect();
    let id = enqueue(state, token, valid, images)?
        .ok_or_else(|| ServerError::Unauthorized("session expired".into()))?;

    info!(submission = id, %title, submitter = %user.email, "Item submitted for review");
    redirect_with_toast(
        "/dashboard",
        Toast::success("Item listed successfully! Awaiting admin approval."),
    )
}

/// Queue the submission and link it to the session user in one step.
/// `None` when the session is gone, in which case nothing is queued.
fn enqueue(
    state: &AppState,
    token: &str,
    item: ValidSubmission,
    images: Vec<String>,
) -> Result<Option<u32>, ServerError> {
    // lock order: moderation, then sessions
    let mut queue = state.moderation.lock()?;
    state.sessions.update(token, |user| {
        let id = queue.submit(item, images, &user.name, &today());
        user.submissions.push(id);
        id
    })
}

/// Thumbnails for the photos picked so far.
pub fn preview(req: &mut Request, state: &AppState, ctx: &Ctx) -> ResultResp {
    if ctx.signed_in().is_none() {
        return Err(ServerError::Unauthorized("sign in to upload photos".into()));
    }

    let max_images = state.config.max_images;
    let files = read_multipart(req)?.files_named("images");
    // one past the limit is enough to show the over-limit notice
    let previews = read_previews(&files[..files.len().min(max_images + 1)]);
    html_response(pages::image_previews(&previews, max_images))
}

fn read_multipart(req: &mut Request) -> Result<MultipartForm, ServerError> {
    let content_type = header(req, "Content-Type")
        .ok_or_else(|| ServerError::BadRequest("missing content type".into()))?;
    let boundary = boundary(content_type)?;
    let body = read_body(req)?;
    parse_multipart(&body, &boundary)
}
