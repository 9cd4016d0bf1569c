// templates/pages/home.rs

use crate::domain::item::Gallery;
use crate::domain::Listing;
use crate::templates::{
    components::{card, listing_card},
    desktop_layout, Chrome,
};
use maud::{html, Markup};

pub fn home_page(chrome: Chrome<'_>, featured: &[Listing], slide: usize) -> Markup {
    let carousel = Gallery::new(featured.len(), slide);
    let signed_in = chrome.user.is_some();

    desktop_layout(
        "Home",
        chrome,
        html! {
            main class="container" {
                section class="hero" {
                    span class="badge green" { "Sustainable Fashion Community" }
                    h1 { "Give Your Clothes a " span class="accent" { "Second Life" } }
                    p class="lead" {
                        "Swap, share, and discover pre-loved fashion. Earn points for every \
                         item you list and redeem them for pieces you love."
                    }
                    div class="cta" {
                        @if signed_in {
                            a href="/browse" class="btn primary" { "Start Swapping" }
                            a href="/add-item" class="btn outline" { "List an Item" }
                        } @else {
                            a href="/auth" class="btn primary" { "Start Swapping" }
                            a href="/browse" class="btn outline" { "Browse Items" }
                        }
                    }
                }

                section class="how-it-works" {
                    h2 { "How ReWear Works" }
                    div class="grid cols-3" {
                        (card("Join the Community", html! {
                            p { "Sign up and receive starter points to begin your journey." }
                        }))
                        (card("List Your Items", html! {
                            p { "Upload photos of clothes you no longer wear and earn points once approved." }
                        }))
                        (card("Swap & Redeem", html! {
                            p { "Request swaps with other members or redeem items with your points." }
                        }))
                    }
                }

                @if let Some(current) = featured.get(carousel.index()) {
                    section class="featured" {
                        h2 { "Featured Items" }
                        div class="carousel" {
                            @if carousel.has_many() {
                                a class="carousel-prev" href=(format!("/?slide={}", carousel.prev())) aria-label="Previous" { "‹" }
                            }
                            (listing_card(current))
                            @if carousel.has_many() {
                                a class="carousel-next" href=(format!("/?slide={}", carousel.next())) aria-label="Next" { "›" }
                            }
                        }
                        div class="carousel-dots" {
                            @for (i, _) in featured.iter().enumerate() {
                                a href=(format!("/?slide={i}")) class=[(i == carousel.index()).then_some("active")] {}
                            }
                        }
                        a href="/browse" class="btn outline" { "View All Items" }
                    }
                }
            }
        },
    )
}
