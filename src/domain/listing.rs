// src/domain/listing.rs

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Wear grade of a listed item, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    #[serde(rename = "Like New")]
    LikeNew,
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::LikeNew,
        Condition::Excellent,
        Condition::VeryGood,
        Condition::Good,
        Condition::Fair,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condition::LikeNew => "Like New",
            Condition::Excellent => "Excellent",
            Condition::VeryGood => "Very Good",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Footwear,
    Accessories,
    Knitwear,
    Bags,
    Jewelry,
    Activewear,
    Formal,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Footwear,
        Category::Accessories,
        Category::Knitwear,
        Category::Bags,
        Category::Jewelry,
        Category::Activewear,
        Category::Formal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Dresses => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Footwear => "Footwear",
            Category::Accessories => "Accessories",
            Category::Knitwear => "Knitwear",
            Category::Bags => "Bags",
            Category::Jewelry => "Jewelry",
            Category::Activewear => "Activewear",
            Category::Formal => "Formal",
        }
    }
}

/// Returned when a label is not part of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl FromStr for Condition {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

impl FromStr for Category {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single swappable item as shown in the catalog.
/// Seeded once at startup; there is no update path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: u32,
    pub title: &'static str,
    pub image_url: &'static str,
    pub condition: Condition,
    pub category: Category,
    pub points: u32,
    pub size: &'static str,
    pub location: &'static str,
}
