use crate::domain::catalog::FilterResult;
use crate::domain::{BrowseState, Category, Condition, Selection, ViewMode};
use crate::templates::components::{listing_card, listing_row};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn browse_page(chrome: Chrome<'_>, state: &BrowseState, result: &FilterResult<'_>) -> Markup {
    desktop_layout(
        "Browse Items",
        chrome,
        html! {
            main class="container" {
                div class="page-head" {
                    h1 { "Browse Items" }
                    p { "Discover amazing pre-loved items from our community" }
                }

                (filter_bar(state))

                div id="results" {
                    (browse_results(state, result))
                }
            }
        },
    )
}

fn filter_bar(state: &BrowseState) -> Markup {
    let filter = &state.filter;

    html! {
        form
            class="card filters"
            action="/browse"
            method="get"
            hx-get="/browse/results"
            hx-target="#results"
            hx-trigger="input changed delay:300ms from:input, change from:select"
            hx-push-url="true"
        {
            input
                type="search"
                name="q"
                placeholder="Search items..."
                value=(filter.query)
                aria-label="Search items";

            select name="category" aria-label="Category" {
                option value="all" selected[filter.category.is_any()] { "All Categories" }
                @for category in Category::ALL {
                    option value=(category.label()) selected[filter.category == Selection::Only(category)] {
                        (category.label())
                    }
                }
            }

            select name="condition" aria-label="Condition" {
                option value="all" selected[filter.condition.is_any()] { "All Conditions" }
                @for condition in Condition::ALL {
                    option value=(condition.label()) selected[filter.condition == Selection::Only(condition)] {
                        (condition.label())
                    }
                }
            }

            input type="hidden" name="view" value=(state.view.as_str());
            noscript { button type="submit" { "Apply" } }
        }
    }
}

/// Count, layout toggle and the listings. Swapped in by htmx on filter
/// changes, so it must not depend on anything outside `#results`.
pub fn browse_results(state: &BrowseState, result: &FilterResult<'_>) -> Markup {
    html! {
        div class="results-head" {
            p class="results-count" { "Showing " (result.len()) " items" }
            div class="view-toggle" {
                @for view in [ViewMode::Grid, ViewMode::List] {
                    a
                        href=(format!("/browse?{}", state.query_with_view(view)))
                        class=(if state.view == view { "btn small" } else { "btn small outline" })
                        aria-pressed=(if state.view == view { "true" } else { "false" })
                    {
                        @match view {
                            ViewMode::Grid => "Grid",
                            ViewMode::List => "List",
                        }
                    }
                }
            }
        }

        @if result.is_empty() {
            div class="empty-state" {
                h3 { "No items found" }
                p { "Try adjusting your search criteria or browse all items" }
                @if result.was_filtered() {
                    a href="/browse" class="btn outline" { "Clear filters" }
                }
            }
        } @else {
            @match state.view {
                ViewMode::Grid => {
                    div class="listing-grid" {
                        @for listing in result.iter() {
                            (listing_card(listing))
                        }
                    }
                }
                ViewMode::List => {
                    div class="listing-list" {
                        @for listing in result.iter() {
                            (listing_row(listing))
                        }
                    }
                }
            }
        }
    }
}
