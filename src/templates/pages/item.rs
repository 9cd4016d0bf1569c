use crate::domain::item::{display_date, Gallery, ItemDetail};
use crate::domain::user::initials;
use crate::templates::components::badge;
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct ItemVm<'a> {
    pub detail: &'a ItemDetail,
    pub gallery: Gallery,
    pub is_liked: bool,
    /// Points the viewer is missing, when signed in and short.
    pub shortfall: Option<u32>,
}

pub fn item_page(chrome: Chrome<'_>, vm: &ItemVm<'_>) -> Markup {
    let item = vm.detail;
    let listing = item.listing;
    let base = format!("/item/{}", listing.id);
    let current = item.images[vm.gallery.index()];

    desktop_layout(
        listing.title,
        chrome,
        html! {
            main class="container" {
                a href="/browse" class="btn ghost" { "← Back" }

                div class="grid cols-2 item" {
                    section class="gallery" {
                        div class="gallery-main" {
                            img src=(current) alt=(listing.title);

                            @if vm.gallery.has_many() {
                                a class="gallery-prev" href=(format!("{base}?image={}", vm.gallery.prev())) aria-label="Previous image" { "‹" }
                                a class="gallery-next" href=(format!("{base}?image={}", vm.gallery.next())) aria-label="Next image" { "›" }
                            }

                            form class="like" method="post" action=(format!("{base}/like")) {
                                button type="submit" aria-pressed=(if vm.is_liked { "true" } else { "false" }) {
                                    @if vm.is_liked { "♥" } @else { "♡" }
                                }
                            }
                        }

                        @if vm.gallery.has_many() {
                            div class="gallery-thumbs" {
                                @for (i, image) in item.images.iter().enumerate() {
                                    a href=(format!("{base}?image={i}")) class=[(i == vm.gallery.index()).then_some("active")] {
                                        img src=(image) alt=(format!("{} {}", listing.title, i + 1));
                                    }
                                }
                            }
                        }
                    }

                    section class="details" {
                        div class="item-head" {
                            div {
                                h1 { (listing.title) }
                                p class="muted" {
                                    (item.views) " views · " (item.likes) " likes · Posted " (display_date(item.posted))
                                }
                            }
                            div class="item-price" {
                                span class="points big" { "★ " (listing.points) } " pts"
                                @if item.is_available {
                                    (badge("green", "Available"))
                                } @else {
                                    (badge("secondary", "Not Available"))
                                }
                            }
                        }

                        div class="listing-badges" {
                            (badge("outline", listing.category.label()))
                            (badge("outline", &format!("Size {}", listing.size)))
                            (badge("outline", listing.condition.label()))
                            (badge("outline", item.brand))
                        }
                        div class="tags" {
                            @for tag in item.tags {
                                (badge("secondary small", &format!("#{tag}")))
                            }
                        }

                        h3 { "Description" }
                        p { (item.description) }

                        div class="card owner" {
                            span class="avatar" { (initials(item.owner.name)) }
                            div {
                                h4 { (item.owner.name) }
                                p class="muted" {
                                    "★ " (item.owner.rating) " · " (item.owner.swaps_completed) " successful swaps"
                                }
                                p class="muted small" { "Member since " (display_date(item.owner.joined)) }
                            }
                        }

                        @if item.is_available {
                            div class="actions" {
                                form method="post" action=(format!("{base}/swap")) {
                                    button type="submit" class="btn primary wide" { "Request Swap" }
                                }
                                form method="post" action=(format!("{base}/redeem")) {
                                    button type="submit" class="btn outline wide" {
                                        "Redeem with " (listing.points) " Points"
                                    }
                                }
                                form method="post" action=(format!("{base}/like")) {
                                    button type="submit" class="btn outline" {
                                        @if vm.is_liked { "Remove from Favorites" } @else { "Save to Favorites" }
                                    }
                                }
                            }
                        } @else {
                            div class="unavailable" {
                                p { "This item is no longer available" }
                                a href="/browse" class="btn outline" { "Browse Other Items" }
                            }
                        }

                        @if let Some(missing) = vm.shortfall {
                            div class="notice warning" {
                                p {
                                    "You need " (missing) " more points to redeem this item. "
                                    "List more items to earn points!"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
