use crate::domain::moderation::ModerationError;
use crate::errors::ServerError;
use crate::handlers::{redirect_with_toast, Ctx};
use crate::notify::Toast;
use crate::request::parse_query;
use crate::responses::{redirect, ResultResp};
use crate::seed;
use crate::state::AppState;
use crate::templates::pages::{self, AdminVm};
use astra::Request;
use tracing::{info, warn};

pub fn page(req: &Request, state: &AppState, ctx: &Ctx) -> ResultResp {
    if !ctx.is_admin() {
        return redirect("/");
    }

    let tab = match parse_query(req).get("tab").map(String::as_str) {
        Some("reported") => "reported",
        Some("users") => "users",
        _ => "pending",
    };

    let vm = {
        let queue = state.moderation.lock()?;
        AdminVm {
            stats: queue.stats(seed::TOTAL_USERS),
            pending: queue.pending().cloned().collect(),
            reports: queue.reports().to_vec(),
            tab,
        }
    };
    ctx.page(pages::admin_page(ctx.chrome(), &vm))
}

pub fn approve(id: u32, state: &AppState, ctx: &Ctx) -> ResultResp {
    if !ctx.is_admin() {
        return redirect("/");
    }

    let title = state
        .moderation
        .lock()?
        .approve(id)
        .map(|s| s.title.clone())
        .map_err(not_found)?;

    info!(submission = id, %title, "Submission approved");
    redirect_with_toast("/admin", Toast::success("Item approved successfully"))
}

pub fn reject(id: u32, state: &AppState, ctx: &Ctx) -> ResultResp {
    if !ctx.is_admin() {
        return redirect("/");
    }

    let title = state
        .moderation
        .lock()?
        .reject(id)
        .map(|s| s.title.clone())
        .map_err(not_found)?;

    info!(submission = id, %title, "Submission rejected");
    redirect_with_toast("/admin", Toast::success("Item rejected and user notified"))
}

pub fn remove_report(id: u32, state: &AppState, ctx: &Ctx) -> ResultResp {
    if !ctx.is_admin() {
        return redirect("/");
    }

    let report = state
        .moderation
        .lock()?
        .remove_report(id)
        .map_err(not_found)?;

    info!(report = id, title = %report.title, "Reported item removed");
    redirect_with_toast(
        "/admin?tab=reported",
        Toast::success("Reported item removed"),
    )
}

fn not_found(err: ModerationError) -> ServerError {
    warn!(%err, "Moderation action on missing entry");
    ServerError::NotFound
}
