// src/domain/catalog.rs

//! Catalog filtering for the Browse view.
//!
//! A [`CatalogFilter`] is a plain value rebuilt from the request on every
//! change. Applying it is pure: it borrows the listing collection, never
//! mutates it, and returns the matching listings in source order.

use crate::domain::listing::{Category, Condition, Listing};
use crate::errors::ServerError;
use std::collections::HashMap;

/// Either no restriction on a field, or an exact value it must equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    Any,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }
}

impl<T: std::str::FromStr> Selection<T> {
    /// `"all"`, empty and missing values mean no restriction.
    fn parse(raw: Option<&str>) -> Result<Self, T::Err> {
        match raw {
            None | Some("") | Some("all") => Ok(Selection::Any),
            Some(value) => value.parse().map(Selection::Only),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub query: String,
    pub category: Selection<Category>,
    pub condition: Selection<Condition>,
}

impl CatalogFilter {
    /// Case-insensitive title search plus exact category and condition.
    pub fn matches(&self, listing: &Listing) -> bool {
        listing.title.to_lowercase().contains(&self.query.to_lowercase())
            && self.category.admits(&listing.category)
            && self.condition.admits(&listing.condition)
    }

    /// The matching subsequence of `listings`, source order preserved.
    pub fn apply<'a, I>(&self, listings: I) -> FilterResult<'a>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let items = listings
            .into_iter()
            .filter(|listing| self.matches(listing))
            .collect();

        FilterResult {
            items,
            filtered: self.is_active(),
        }
    }

    /// True when any predicate restricts the catalog.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.category.is_any() || !self.condition.is_any()
    }
}

/// Outcome of a filter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult<'a> {
    pub items: Vec<&'a Listing>,
    filtered: bool,
}

impl<'a> FilterResult<'a> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Zero matches. Rendered as the "No items found" state, never as an
    /// empty grid.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the filter that produced this result restricted anything.
    pub fn was_filtered(&self) -> bool {
        self.filtered
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Listing> + '_ {
        self.items.iter().copied()
    }
}

/// Presentation layout for browse results. Has no bearing on filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    fn parse(raw: Option<&str>) -> Result<Self, ServerError> {
        match raw {
            None | Some("") | Some("grid") => Ok(ViewMode::Grid),
            Some("list") => Ok(ViewMode::List),
            Some(other) => Err(ServerError::BadRequest(format!("unknown view '{other}'"))),
        }
    }
}

/// Everything the Browse view is parameterised by.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseState {
    pub filter: CatalogFilter,
    pub view: ViewMode,
}

impl BrowseState {
    /// Build from decoded query parameters `q`, `category`, `condition`, `view`.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let get = |key: &str| params.get(key).map(String::as_str);

        let category = Selection::parse(get("category"))
            .map_err(|e| ServerError::BadRequest(format!("category: {e}")))?;
        let condition = Selection::parse(get("condition"))
            .map_err(|e| ServerError::BadRequest(format!("condition: {e}")))?;

        Ok(Self {
            filter: CatalogFilter {
                query: get("q").unwrap_or_default().to_string(),
                category,
                condition,
            },
            view: ViewMode::parse(get("view"))?,
        })
    }

    /// Query string reproducing this state with a different view mode.
    pub fn query_with_view(&self, view: ViewMode) -> String {
        let mut out = url::form_urlencoded::Serializer::new(String::new());
        if !self.filter.query.is_empty() {
            out.append_pair("q", &self.filter.query);
        }
        if let Selection::Only(category) = self.filter.category {
            out.append_pair("category", category.label());
        }
        if let Selection::Only(condition) = self.filter.condition {
            out.append_pair("condition", condition.label());
        }
        out.append_pair("view", view.as_str());
        out.finish()
    }
}
