use crate::domain::profile::ProfileUpdate;
use crate::domain::User;
use crate::seed::{ACHIEVEMENTS, RECENT_ACTIVITY};
use crate::templates::components::{badge, card, stat_card, Stat};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct ProfileVm<'a> {
    pub user: &'a User,
    pub editing: bool,
    /// Values shown in the edit form; the user's own values unless a
    /// rejected save is being redisplayed.
    pub form: ProfileUpdate,
}

impl<'a> ProfileVm<'a> {
    pub fn new(user: &'a User, editing: bool) -> Self {
        Self {
            user,
            editing,
            form: ProfileUpdate {
                name: user.name.clone(),
                phone: user.profile.phone.clone(),
                location: user.profile.location.clone(),
                bio: user.profile.bio.clone(),
            },
        }
    }
}

pub fn profile_signed_out_page(chrome: Chrome<'_>) -> Markup {
    desktop_layout(
        "My Profile",
        chrome,
        html! {
            main class="container" {
                p { "Please log in to view your profile." }
                a href="/auth" class="btn primary" { "Sign In" }
            }
        },
    )
}

pub fn profile_page(chrome: Chrome<'_>, vm: &ProfileVm<'_>) -> Markup {
    let stats = [
        Stat {
            label: "Total Points",
            value: vm.user.points.to_string(),
            tone: "green",
        },
        Stat {
            label: "Items Listed",
            value: "12".to_string(),
            tone: "blue",
        },
        Stat {
            label: "Successful Swaps",
            value: "8".to_string(),
            tone: "purple",
        },
        Stat {
            label: "Member Since",
            value: "Jan 2024".to_string(),
            tone: "orange",
        },
    ];

    desktop_layout(
        "My Profile",
        chrome,
        html! {
            main class="container" {
                div class="page-head split" {
                    div {
                        h1 { "My Profile" }
                        p { "Manage your account settings and view your activity" }
                    }
                    @if !vm.editing {
                        a href="/profile?edit=1" class="btn primary" { "Edit Profile" }
                    }
                }

                div class="grid cols-3" {
                    div class="col" {
                        @if vm.editing {
                            (edit_form(vm))
                        } @else {
                            (details(vm.user))
                        }
                        (card("Preferences", html! {
                            p { strong { "Style: " } (vm.user.profile.preferences.style) }
                            div class="tags" {
                                @for c in &vm.user.profile.preferences.categories {
                                    (badge("secondary", c))
                                }
                            }
                            div class="tags" {
                                @for s in &vm.user.profile.preferences.sizes {
                                    (badge("outline", &format!("Size {s}")))
                                }
                            }
                        }))
                    }

                    div class="col span-2" {
                        div class="grid cols-2" {
                            @for stat in &stats {
                                (stat_card(stat))
                            }
                        }

                        (card("Recent Activity", html! {
                            ul class="activity" {
                                @for activity in RECENT_ACTIVITY {
                                    li {
                                        span { (activity.description) }
                                        span class="muted small" { (activity.when) }
                                    }
                                }
                            }
                        }))

                        (card("Achievements", html! {
                            div class="grid cols-2" {
                                @for a in ACHIEVEMENTS {
                                    div class=(if a.earned { "achievement earned" } else { "achievement" }) {
                                        h4 { (a.title) }
                                        p class="small" { (a.description) }
                                        @if a.earned {
                                            (badge("green", "Earned"))
                                        }
                                    }
                                }
                            }
                        }))
                    }
                }
            }
        },
    )
}

fn details(user: &User) -> Markup {
    card(
        "Profile Information",
        html! {
            div class="avatar large" { (user.initials()) }
            dl {
                dt { "Name" } dd { (user.name) }
                dt { "Email" } dd { (user.email) }
                dt { "Phone" } dd { (user.profile.phone) }
                dt { "Location" } dd { (user.profile.location) }
                dt { "Bio" } dd { (user.profile.bio) }
            }
        },
    )
}

fn edit_form(vm: &ProfileVm<'_>) -> Markup {
    card(
        "Profile Information",
        html! {
            form method="post" action="/profile" class="stack" {
                label for="name" { "Name" }
                input id="name" name="name" value=(vm.form.name) required;

                label for="email" { "Email" }
                p class="muted" { (vm.user.email) }

                label for="phone" { "Phone" }
                input id="phone" name="phone" value=(vm.form.phone);

                label for="location" { "Location" }
                input id="location" name="location" value=(vm.form.location);

                label for="bio" { "Bio" }
                textarea id="bio" name="bio" rows="3" { (vm.form.bio) }

                div class="row" {
                    button type="submit" class="btn primary" { "Save" }
                    a href="/profile" class="btn outline" { "Cancel" }
                }
            }
        },
    )
}
