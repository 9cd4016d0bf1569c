use crate::domain::item::display_date;
use crate::domain::moderation::Status;
use crate::domain::User;
use crate::seed::{OwnedItem, Swap};
use crate::templates::components::{badge, stat_card, tabs, Stat};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub user: &'a User,
    pub items: Vec<OwnedItem>,
    pub swaps: &'a [Swap],
    /// "items" or "swaps".
    pub tab: &'a str,
}

pub fn dashboard_page(chrome: Chrome<'_>, vm: &DashboardVm<'_>) -> Markup {
    let stats = [
        Stat {
            label: "Total Points",
            value: vm.user.points.to_string(),
            tone: "green",
        },
        Stat {
            label: "Items Listed",
            value: vm.items.len().to_string(),
            tone: "blue",
        },
        Stat {
            label: "Successful Swaps",
            value: "3".to_string(),
            tone: "purple",
        },
        Stat {
            label: "Profile Views",
            value: "47".to_string(),
            tone: "orange",
        },
    ];

    desktop_layout(
        "Dashboard",
        chrome,
        html! {
            main class="container" {
                div class="page-head" {
                    h1 { "Welcome back, " (vm.user.name) "!" }
                    p { "Manage your items, track swaps, and grow your sustainable wardrobe." }
                }

                div class="grid cols-4" {
                    @for stat in &stats {
                        (stat_card(stat))
                    }
                }

                (tabs("/dashboard", vm.tab, &[
                    ("items", "My Items".to_string()),
                    ("swaps", "Active Swaps".to_string()),
                ]))

                @if vm.tab == "swaps" {
                    (swaps_panel(vm.swaps))
                } @else {
                    (items_panel(&vm.items))
                }
            }
        },
    )
}

fn items_panel(items: &[OwnedItem]) -> Markup {
    html! {
        section class="tab-panel" {
            div class="panel-head" {
                h2 { "Your Listed Items" }
                a href="/add-item" class="btn primary" { "+ Add Item" }
            }

            @for item in items {
                div class="card listing-row" {
                    img class="thumb" src=(item.image_url) alt=(item.title);
                    div class="listing-body" {
                        div class="listing-head" {
                            h3 { (item.title) }
                            @if item.status == Status::Approved {
                                (badge("green", item.status.label()))
                            } @else {
                                (badge("secondary", item.status.label()))
                            }
                        }
                        p class="muted" {
                            (item.views) " views · " (item.likes) " likes · "
                            @match item.points {
                                Some(points) => { (points) " pts" }
                                None => "Points pending review",
                            }
                        }
                    }
                }
            }
        }
    }
}

fn swaps_panel(swaps: &[Swap]) -> Markup {
    html! {
        section class="tab-panel" {
            h2 { "Active Swaps" }
            @if swaps.is_empty() {
                p class="muted" { "No active swaps yet." }
            }
            @for swap in swaps {
                div class="card swap" {
                    div {
                        h3 { "Swap with " (swap.other_user) }
                        p { (swap.my_item) " ⇄ " (swap.their_item) }
                        p class="muted small" { (display_date(swap.date)) }
                    }
                    (badge("secondary", swap.status))
                }
            }
        }
    }
}
