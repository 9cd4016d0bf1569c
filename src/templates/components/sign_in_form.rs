use maud::{html, Markup};

/// Demo sign-in: no password, the email alone identifies the account.
pub fn sign_in_form(email: &str, name: &str) -> Markup {
    html! {
        div class="email-cta-wrapper" {
            form method="post" action="/auth/login" class="email-cta" {
                label for="name" { "Name" }
                input
                    type="text"
                    id="name"
                    name="name"
                    placeholder="Your name"
                    autocomplete="name"
                    value=(name);

                label for="email" { "Email address" }
                input
                    type="email"
                    id="email"
                    name="email"
                    placeholder="you@domain.com"
                    autocomplete="email"
                    value=(email)
                    required;

                button type="submit" class="primary" { "Continue" }

                p class="microcopy" {
                    "New here? Signing in creates your account with starter points."
                }
            }
        }
    }
}
