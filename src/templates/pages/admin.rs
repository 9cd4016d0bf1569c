use crate::domain::item::display_date;
use crate::domain::moderation::{Report, Severity, Stats, Submission};
use crate::domain::submission::ESTIMATED_POINTS;
use crate::templates::components::{badge, card, stat_card, tabs, Stat};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct AdminVm<'a> {
    pub stats: Stats,
    pub pending: Vec<Submission>,
    pub reports: Vec<Report>,
    /// "pending", "reported" or "users".
    pub tab: &'a str,
}

pub fn admin_page(chrome: Chrome<'_>, vm: &AdminVm<'_>) -> Markup {
    let stats = [
        Stat {
            label: "Pending Approvals",
            value: vm.stats.pending.to_string(),
            tone: "orange",
        },
        Stat {
            label: "Total Users",
            value: vm.stats.total_users.to_string(),
            tone: "blue",
        },
        Stat {
            label: "Reported Items",
            value: vm.stats.reported.to_string(),
            tone: "red",
        },
        Stat {
            label: "This Month's Growth",
            value: vm.stats.growth.to_string(),
            tone: "green",
        },
    ];

    desktop_layout(
        "Admin Dashboard",
        chrome,
        html! {
            main class="container" {
                div class="page-head" {
                    h1 { "Admin Dashboard" }
                    p { "Manage items, moderate content, and oversee the ReWear community" }
                }

                div class="grid cols-4" {
                    @for stat in &stats {
                        (stat_card(stat))
                    }
                }

                (tabs("/admin", vm.tab, &[
                    ("pending", format!("Pending Approvals ({})", vm.pending.len())),
                    ("reported", format!("Reported Items ({})", vm.reports.len())),
                    ("users", "User Management".to_string()),
                ]))

                @match vm.tab {
                    "reported" => (reported_panel(&vm.reports)),
                    "users" => (users_panel(vm.stats.total_users)),
                    _ => (pending_panel(&vm.pending)),
                }
            }
        },
    )
}

fn pending_panel(pending: &[Submission]) -> Markup {
    html! {
        section class="tab-panel" {
            @if pending.is_empty() {
                p class="muted" { "Nothing waiting for review." }
            }
            @for item in pending {
                div class="card listing-row" data-submission-id=(item.id) {
                    @if let Some(cover) = item.images.first() {
                        img class="thumb" src=(cover) alt=(item.title);
                    }
                    div class="listing-body" {
                        div class="listing-head" {
                            div {
                                h3 { (item.title) }
                                p class="muted small" { "by " (item.submitter) }
                            }
                            div class="right" {
                                p class="points" {
                                    @match item.points {
                                        Some(points) => { (points) " pts" }
                                        None => { (ESTIMATED_POINTS.0) "-" (ESTIMATED_POINTS.1) " pts (est.)" }
                                    }
                                }
                                (badge("secondary", item.condition.label()))
                            }
                        }
                        p class="muted small" {
                            (badge("outline", item.category.label()))
                            " Submitted " (display_date(&item.submitted))
                        }
                        p class="clamp-2" { (item.description) }
                        @if !item.tags.is_empty() {
                            div class="tags" {
                                @for tag in &item.tags {
                                    (badge("secondary small", &format!("#{tag}")))
                                }
                            }
                        }
                        div class="row" {
                            form method="post" action=(format!("/admin/items/{}/approve", item.id)) {
                                button type="submit" class="btn primary" { "✓ Approve" }
                            }
                            form method="post" action=(format!("/admin/items/{}/reject", item.id)) {
                                button type="submit" class="btn destructive" { "✕ Reject" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn reported_panel(reports: &[Report]) -> Markup {
    html! {
        section class="tab-panel" {
            @if reports.is_empty() {
                p class="muted" { "No open reports." }
            }
            @for report in reports {
                div class="card report" data-report-id=(report.id) {
                    div {
                        h3 { (report.title) }
                        p class="muted small" { "Posted by " (report.poster) }
                        div class="row" {
                            @let severity = report.severity();
                            @match severity {
                                Severity::High => (badge("destructive", &format!("{} Priority", severity.label()))),
                                _ => (badge("secondary", &format!("{} Priority", severity.label()))),
                            }
                            span class="small" { (report.count) " reports" }
                            span class="small" { "Reason: " (report.reason) }
                        }
                    }
                    form method="post" action=(format!("/admin/reports/{}/remove", report.id)) {
                        button type="submit" class="btn destructive" { "Remove" }
                    }
                }
            }
        }
    }
}

fn users_panel(total_users: u32) -> Markup {
    card(
        "User Management",
        html! {
            div class="stack" {
                div class="row split bordered" {
                    div {
                        h4 { "Active Users" }
                        p class="muted small" { (total_users) " registered users" }
                    }
                }
                div class="row split bordered" {
                    div {
                        h4 { "Suspended Users" }
                        p class="muted small" { "12 temporarily suspended" }
                    }
                }
                div class="row split bordered" {
                    div {
                        h4 { "User Reports" }
                        p class="muted small" { "3 pending user reports" }
                    }
                }
            }
        },
    )
}
