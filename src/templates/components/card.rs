use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// One headline number on the dashboard, profile and admin pages.
pub struct Stat {
    pub label: &'static str,
    pub value: String,
    pub tone: &'static str,
}

pub fn stat_card(stat: &Stat) -> Markup {
    html! {
        div class="card stat" {
            p class="stat-label" { (stat.label) }
            p class=(format!("stat-value {}", stat.tone)) { (stat.value) }
        }
    }
}
