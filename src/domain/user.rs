// src/domain/user.rs

use crate::domain::profile::Profile;
use std::collections::HashSet;

/// The signed-in user attached to a session. Lives only in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub points: u32,
    pub is_admin: bool,
    /// Listing ids saved to favorites.
    pub favorites: HashSet<u32>,
    /// Ids of moderation-queue submissions made by this user.
    pub submissions: Vec<u32>,
    pub profile: Profile,
}

impl User {
    pub fn new(name: String, email: String, points: u32, is_admin: bool) -> Self {
        Self {
            name,
            email,
            points,
            is_admin,
            favorites: HashSet::new(),
            submissions: Vec::new(),
            profile: Profile::default(),
        }
    }

    /// Adds or removes `listing_id` from favorites. Returns true when it is
    /// now a favorite.
    pub fn toggle_favorite(&mut self, listing_id: u32) -> bool {
        if self.favorites.remove(&listing_id) {
            false
        } else {
            self.favorites.insert(listing_id);
            true
        }
    }

    /// Initials for the avatar fallback, e.g. "Sarah M." -> "SM".
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}
