use crate::auth::sessions::{display_name, normalize_email};
use crate::domain::profile::ProfileUpdate;
use crate::domain::User;
use crate::errors::ServerError;
use crate::handlers::{redirect_with_toast, Ctx, SESSION_COOKIE};
use crate::notify::Toast;
use crate::request::{parse_query, parse_urlencoded, read_body};
use crate::responses::{redirect, redirect_with, ResultResp};
use crate::seed::{self, OwnedItem};
use crate::state::AppState;
use crate::templates::pages::{self, DashboardVm, ProfileVm};
use astra::Request;
use tracing::info;

/// Shown for submissions that arrived without a usable photo.
const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

pub fn auth_page(ctx: &Ctx) -> ResultResp {
    if ctx.user.is_some() {
        return redirect("/dashboard");
    }
    ctx.page(pages::auth_page(ctx.chrome(), "", ""))
}

pub fn login(req: &mut Request, state: &AppState, ctx: &Ctx) -> ResultResp {
    let form = parse_urlencoded(&read_body(req)?);
    let raw_email = form.get("email").map(String::as_str).unwrap_or_default();
    let raw_name = form.get("name").map(String::as_str).unwrap_or_default();

    let Some(email) = normalize_email(raw_email) else {
        let toast = Toast::error("Please enter a valid email address");
        return ctx.page_with_status(
            422,
            pages::auth_page(ctx.chrome_with(&toast), raw_email, raw_name),
        );
    };

    if let Some(old) = &ctx.session {
        state.sessions.remove(old)?;
    }

    let is_admin = email == state.config.admin_email;
    let name = display_name(raw_name, &email);
    let user = User::new(name.clone(), email, state.config.starting_points, is_admin);
    info!(email = %user.email, is_admin, "User signed in");

    let token = state.sessions.create(user)?;
    redirect_with(
        "/dashboard",
        &[
            session_cookie(&token),
            Toast::success(format!("Welcome, {name}!")).to_cookie(),
        ],
    )
}

pub fn logout(state: &AppState, ctx: &Ctx) -> ResultResp {
    if let Some(token) = &ctx.session {
        state.sessions.remove(token)?;
    }

    redirect_with(
        "/",
        &[
            format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
            Toast::success("You have been signed out").to_cookie(),
        ],
    )
}

fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn dashboard(req: &Request, state: &AppState, ctx: &Ctx) -> ResultResp {
    let Some((_, user)) = ctx.signed_in() else {
        return redirect("/auth");
    };

    let mut items = seed::owned_items();
    {
        let queue = state.moderation.lock()?;
        items.extend(
            user.submissions
                .iter()
                .filter_map(|id| queue.get(*id))
                .map(|s| OwnedItem {
                    title: s.title.clone(),
                    image_url: s
                        .images
                        .first()
                        .cloned()
                        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                    status: s.status,
                    views: 0,
                    likes: 0,
                    points: s.points,
                }),
        );
    }

    let query = parse_query(req);
    let tab = match query.get("tab").map(String::as_str) {
        Some("swaps") => "swaps",
        _ => "items",
    };

    let vm = DashboardVm {
        user,
        items,
        swaps: seed::ACTIVE_SWAPS,
        tab,
    };
    ctx.page(pages::dashboard_page(ctx.chrome(), &vm))
}

pub fn profile(req: &Request, ctx: &Ctx) -> ResultResp {
    let Some((_, user)) = ctx.signed_in() else {
        return ctx.page(pages::profile_signed_out_page(ctx.chrome()));
    };

    let editing = parse_query(req).get("edit").is_some_and(|v| v == "1");
    ctx.page(pages::profile_page(ctx.chrome(), &ProfileVm::new(user, editing)))
}

pub fn save_profile(req: &mut Request, state: &AppState, ctx: &Ctx) -> ResultResp {
    let Some((token, user)) = ctx.signed_in() else {
        return redirect("/auth");
    };

    let mut form = parse_urlencoded(&read_body(req)?);
    let mut take = |key: &str| form.remove(key).unwrap_or_default();
    let update = ProfileUpdate {
        name: take("name"),
        phone: take("phone"),
        location: take("location"),
        bio: take("bio"),
    };

    let submitted = update.clone();
    let outcome = state
        .sessions
        .update(token, |u| update.apply(&mut u.name, &mut u.profile))?
        .ok_or_else(|| ServerError::Unauthorized("session expired".into()))?;

    match outcome {
        Ok(()) => redirect_with_toast("/profile", Toast::success("Profile updated")),
        Err(e) => {
            let toast = Toast::error(e.to_string());
            let vm = ProfileVm {
                user,
                editing: true,
                form: submitted,
            };
            ctx.page_with_status(422, pages::profile_page(ctx.chrome_with(&toast), &vm))
        }
    }
}
