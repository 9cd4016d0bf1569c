// src/domain/item.rs

use crate::domain::listing::Listing;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct Owner {
    pub name: &'static str,
    pub rating: f32,
    pub swaps_completed: u32,
    /// ISO date, e.g. "2023-06-15".
    pub joined: &'static str,
}

/// Everything the item page shows beyond the catalog card.
#[derive(Debug)]
pub struct ItemDetail {
    pub listing: &'static Listing,
    pub description: &'static str,
    /// Gallery images, first one is the cover. Never empty.
    pub images: &'static [&'static str],
    pub brand: &'static str,
    pub tags: &'static [&'static str],
    pub owner: Owner,
    pub is_available: bool,
    pub views: u32,
    pub likes: u32,
    /// ISO date, e.g. "2024-01-10".
    pub posted: &'static str,
}

/// Position within an item's image gallery. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    /// `requested` wraps modulo `len`; a gallery always has one image.
    pub fn new(len: usize, requested: usize) -> Self {
        let len = len.max(1);
        Self {
            len,
            index: requested % len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&self) -> usize {
        (self.index + 1) % self.len
    }

    pub fn prev(&self) -> usize {
        (self.index + self.len - 1) % self.len
    }

    pub fn has_many(&self) -> bool {
        self.len > 1
    }
}

/// Render an ISO date as "Jan 10, 2024". Unparseable input is shown as-is.
pub fn display_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}
