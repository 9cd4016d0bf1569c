use crate::domain::Listing;
use crate::templates::components::badge;
use maud::{html, Markup};

pub fn points_badge(points: u32) -> Markup {
    html! {
        span class="points" { "★ " (points) }
    }
}

fn meta(listing: &Listing) -> Markup {
    html! {
        div class="listing-meta" {
            span { "Size: " (listing.size) }
            span { (listing.location) }
        }
    }
}

/// Grid layout: image on top, details below.
pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        a href=(format!("/item/{}", listing.id)) class="listing-link" {
            article class="card listing-card" data-listing-id=(listing.id) {
                div class="listing-image" {
                    img src=(listing.image_url) alt=(listing.title) loading="lazy";
                }
                div class="card-body" {
                    div class="listing-head" {
                        h3 class="truncate" { (listing.title) }
                        (points_badge(listing.points))
                    }
                    div class="listing-badges" {
                        (badge("secondary", listing.category.label()))
                        (badge("outline", listing.condition.label()))
                    }
                    (meta(listing))
                }
            }
        }
    }
}

/// List layout: thumbnail at the side.
pub fn listing_row(listing: &Listing) -> Markup {
    html! {
        a href=(format!("/item/{}", listing.id)) class="listing-link" {
            article class="card listing-row" data-listing-id=(listing.id) {
                img class="thumb" src=(listing.image_url) alt=(listing.title) loading="lazy";
                div class="listing-body" {
                    div class="listing-head" {
                        h3 { (listing.title) }
                        (points_badge(listing.points))
                    }
                    div class="listing-badges" {
                        (badge("secondary", listing.category.label()))
                        (badge("outline", listing.condition.label()))
                    }
                    (meta(listing))
                }
            }
        }
    }
}
