use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn not_found_page(chrome: Chrome<'_>, path: &str) -> Markup {
    desktop_layout(
        "Page not found",
        chrome,
        html! {
            main class="container narrow center" {
                h1 { "404" }
                p class="lead" { "Oops! Page not found" }
                p class="muted" { code { (path) } }
                a href="/" class="btn primary" { "Return to Home" }
            }
        },
    )
}
