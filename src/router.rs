use crate::handlers::{account, admin, browse, item, parse_id, submit, Ctx};
use crate::responses::ResultResp;
use crate::state::AppState;
use crate::templates::pages;
use astra::Request;
use tracing::debug;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    let result = dispatch(req, state, &method, &path);
    match &result {
        Ok(resp) => debug!(%method, %path, status = resp.status().as_u16(), "Handled request"),
        Err(err) => debug!(%method, %path, status = err.status(), %err, "Request failed"),
    }
    result
}

fn dispatch(mut req: Request, state: &AppState, method: &str, path: &str) -> ResultResp {
    let ctx = Ctx::load(&req, state)?;
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", [""]) => browse::home(&req, &ctx),
        ("GET", ["browse"]) => browse::browse(&req, &ctx),
        ("GET", ["browse", "results"]) => browse::browse_results(&req),
        ("GET", ["api", "listings"]) => browse::api_listings(&req),

        ("GET", ["item", id]) => item::show(parse_id(id)?, &req, &ctx),
        ("POST", ["item", id, "swap"]) => item::request_swap(parse_id(id)?, &ctx),
        ("POST", ["item", id, "redeem"]) => item::redeem(parse_id(id)?, state, &ctx),
        ("POST", ["item", id, "like"]) => item::toggle_like(parse_id(id)?, state, &ctx),

        ("GET", ["auth"]) => account::auth_page(&ctx),
        ("POST", ["auth", "login"]) => account::login(&mut req, state, &ctx),
        ("POST", ["auth", "logout"]) => account::logout(state, &ctx),
        ("GET", ["dashboard"]) => account::dashboard(&req, state, &ctx),
        ("GET", ["profile"]) => account::profile(&req, &ctx),
        ("POST", ["profile"]) => account::save_profile(&mut req, state, &ctx),

        ("GET", ["add-item"]) => submit::form(state, &ctx),
        ("POST", ["add-item"]) => submit::create(&mut req, state, &ctx),
        ("POST", ["add-item", "preview"]) => submit::preview(&mut req, state, &ctx),

        ("GET", ["admin"]) => admin::page(&req, state, &ctx),
        ("POST", ["admin", "items", id, "approve"]) => admin::approve(parse_id(id)?, state, &ctx),
        ("POST", ["admin", "items", id, "reject"]) => admin::reject(parse_id(id)?, state, &ctx),
        ("POST", ["admin", "reports", id, "remove"]) => {
            admin::remove_report(parse_id(id)?, state, &ctx)
        }

        _ => ctx.page_with_status(404, pages::not_found_page(ctx.chrome(), path)),
    }
}
