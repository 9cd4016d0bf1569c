use maud::{html, Markup};

pub mod card;
pub mod listing;
pub mod sign_in_form;
pub mod toast;

pub use card::{card, stat_card, Stat};
pub use listing::{listing_card, listing_row};
pub use sign_in_form::sign_in_form;
pub use toast::toast;

pub fn badge(class: &str, label: &str) -> Markup {
    html! {
        span class=(format!("badge {class}")) { (label) }
    }
}

/// Segmented tab bar; each tab is a plain link carrying `?tab=`.
pub fn tabs(base: &str, active: &str, entries: &[(&str, String)]) -> Markup {
    html! {
        nav class="tabs" role="tablist" {
            @for (key, label) in entries {
                a
                    href=(format!("{base}?tab={key}"))
                    role="tab"
                    aria-selected=(if *key == active { "true" } else { "false" })
                    class=[(*key == active).then_some("active")]
                { (label) }
            }
        }
    }
}
