use crate::templates::{desktop_layout, sign_in_form, Chrome};
use maud::{html, Markup};

pub fn auth_page(chrome: Chrome<'_>, email: &str, name: &str) -> Markup {
    desktop_layout(
        "Sign in",
        chrome,
        html! {
            main class="container narrow" {
                h1 { "Welcome to ReWear" }
                p class="lead" {
                    "Sign in or create an account to start swapping."
                }

                (sign_in_form(email, name))
            }
        },
    )
}
