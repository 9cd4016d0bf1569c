use crate::domain::BrowseState;
use crate::handlers::Ctx;
use crate::request::{is_htmx, parse_query};
use crate::responses::{html_response, json_response, ResultResp};
use crate::seed;
use crate::templates::pages;
use astra::Request;
use tracing::debug;

pub fn home(req: &Request, ctx: &Ctx) -> ResultResp {
    let slide = parse_query(req)
        .get("slide")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    ctx.page(pages::home_page(ctx.chrome(), seed::featured(), slide))
}

pub fn browse(req: &Request, ctx: &Ctx) -> ResultResp {
    let state = BrowseState::from_params(&parse_query(req))?;
    let result = state.filter.apply(seed::LISTINGS);
    debug!(query = %state.filter.query, matches = result.len(), "Filtered catalog");

    if is_htmx(req) {
        return html_response(pages::browse_results(&state, &result));
    }
    ctx.page(pages::browse_page(ctx.chrome(), &state, &result))
}

/// Results fragment only, for htmx swaps and direct fetches alike.
pub fn browse_results(req: &Request) -> ResultResp {
    let state = BrowseState::from_params(&parse_query(req))?;
    let result = state.filter.apply(seed::LISTINGS);
    html_response(pages::browse_results(&state, &result))
}

pub fn api_listings(req: &Request) -> ResultResp {
    let state = BrowseState::from_params(&parse_query(req))?;
    let result = state.filter.apply(seed::LISTINGS);
    json_response(&result.items)
}
