use crate::notify::Toast;
use maud::{html, Markup};

pub fn toast(toast: &Toast) -> Markup {
    html! {
        div class=(toast.css_class()) role="status" aria-live="polite" {
            (toast.message)
        }
    }
}
