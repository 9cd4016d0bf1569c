use crate::domain::User;
use crate::notify::Toast;
use crate::templates::components::toast;
use maud::{html, Markup, DOCTYPE};

/// Per-request parts of the page frame: who is signed in, the one-shot
/// toast, and the current path for highlighting the active nav link.
#[derive(Clone, Copy, Default)]
pub struct Chrome<'a> {
    pub user: Option<&'a User>,
    pub toast: Option<&'a Toast>,
    pub path: &'a str,
}

pub fn desktop_layout(title: &str, chrome: Chrome<'_>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · ReWear" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                (navigation(chrome))
                div id="toasts" {
                    @if let Some(t) = chrome.toast {
                        (toast(t))
                    }
                }
                (content)
            }
        }
    }
}

fn nav_link(chrome: Chrome<'_>, href: &str, label: &str) -> Markup {
    html! {
        li {
            a href=(href) class=[(chrome.path == href).then_some("active")] { (label) }
        }
    }
}

fn navigation(chrome: Chrome<'_>) -> Markup {
    html! {
        header class="flex items-center justify-between px-6 py-3 shadow" {
            a href="/" class="brand" {
                svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="#16a34a"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="icon icon-tabler icon-tabler-recycle"
                {
                    path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                    path d="M12 17l-2 2l2 2" {}
                    path d="M10 19h9a2 2 0 0 0 1.75 -2.75l-.55 -1" {}
                    path d="M8.536 11l-.732 -2.732l-2.732 .732" {}
                    path d="M7.804 8.268l-4.5 7.794a2 2 0 0 0 1.506 2.89l1.141 .024" {}
                    path d="M15.464 11l2.732 .732l.732 -2.732" {}
                    path d="M18.196 11.732l-4.5 -7.794a2 2 0 0 0 -3.256 -.14l-.591 .976" {}
                }
                h3 { "ReWear" }
            }
            nav {
                ul {
                    (nav_link(chrome, "/", "Home"))
                    (nav_link(chrome, "/browse", "Browse"))
                    (nav_link(chrome, "/add-item", "List an Item"))
                    @if chrome.user.is_some_and(|u| u.is_admin) {
                        (nav_link(chrome, "/admin", "Admin"))
                    }
                }
            }

            @match chrome.user {
                Some(user) => {
                    div class="account" {
                        span class="points-badge" { (user.points) " pts" }
                        details class="account-menu" {
                            summary {
                                span class="avatar" { (user.initials()) }
                                span { (user.name) }
                            }
                            ul {
                                li { a href="/profile" { "Profile" } }
                                li { a href="/dashboard" { "Dashboard" } }
                                li { a href="/add-item" { "Add Item" } }
                                li {
                                    form action="/auth/logout" method="post" {
                                        button type="submit" class="link" { "Log out" }
                                    }
                                }
                            }
                        }
                    }
                }
                None => {
                    div class="account" {
                        a href="/auth" class="text-base font-medium" { "Sign In" }
                        a href="/auth" class="btn primary" { "Join Now" }
                    }
                }
            }
        }
    }
}
