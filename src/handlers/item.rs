use crate::domain::item::Gallery;
use crate::domain::redemption::{redeem as redeem_points, shortfall, Redemption};
use crate::errors::ServerError;
use crate::handlers::{redirect_with_toast, Ctx};
use crate::notify::Toast;
use crate::request::parse_query;
use crate::responses::{redirect, ResultResp};
use crate::seed;
use crate::state::AppState;
use crate::templates::pages::{self, ItemVm};
use astra::Request;
use tracing::info;

pub fn show(id: u32, req: &Request, ctx: &Ctx) -> ResultResp {
    let detail = seed::item_detail(id).ok_or(ServerError::NotFound)?;
    let requested = parse_query(req)
        .get("image")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let vm = ItemVm {
        gallery: Gallery::new(detail.images.len(), requested),
        is_liked: ctx.user.as_ref().is_some_and(|u| u.favorites.contains(&id)),
        shortfall: ctx
            .user
            .as_ref()
            .and_then(|u| shortfall(u.points, detail.listing.points)),
        detail: &detail,
    };

    ctx.page(pages::item_page(ctx.chrome(), &vm))
}

pub fn request_swap(id: u32, ctx: &Ctx) -> ResultResp {
    let detail = seed::item_detail(id).ok_or(ServerError::NotFound)?;
    let Some((_, user)) = ctx.signed_in() else {
        return redirect("/auth");
    };

    info!(item = id, requester = %user.email, "Swap requested");
    redirect_with_toast(
        &format!("/item/{id}"),
        Toast::success(format!("Swap request sent to {}", detail.owner.name)),
    )
}

pub fn redeem(id: u32, state: &AppState, ctx: &Ctx) -> ResultResp {
    let detail = seed::item_detail(id).ok_or(ServerError::NotFound)?;
    let Some((token, _)) = ctx.signed_in() else {
        return redirect("/auth");
    };
    let back = format!("/item/{id}");

    if !detail.is_available {
        return redirect_with_toast(&back, Toast::error("This item is no longer available"));
    }

    let price = detail.listing.points;
    let Some(outcome) = state
        .sessions
        .update(token, |user| redeem_points(&mut user.points, price))?
    else {
        return redirect("/auth");
    };

    match outcome {
        Redemption::Redeemed { remaining } => {
            info!(item = id, remaining, "Item redeemed");
            redirect_with_toast(&back, Toast::success("Item redeemed successfully!"))
        }
        Redemption::Insufficient { shortfall } => redirect_with_toast(
            &back,
            Toast::error(format!(
                "Insufficient points. You need {shortfall} more points."
            )),
        ),
    }
}

pub fn toggle_like(id: u32, state: &AppState, ctx: &Ctx) -> ResultResp {
    seed::listing(id).ok_or(ServerError::NotFound)?;
    let Some((token, _)) = ctx.signed_in() else {
        return redirect("/auth");
    };

    let Some(liked) = state.sessions.update(token, |user| user.toggle_favorite(id))? else {
        return redirect("/auth");
    };

    let message = if liked {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };
    redirect_with_toast(&format!("/item/{id}"), Toast::success(message))
}
