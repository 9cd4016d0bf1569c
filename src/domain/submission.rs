// src/domain/submission.rs

use crate::domain::listing::{Category, Condition};
use thiserror::Error;

/// Sizes offered on the add-item form.
pub const SIZES: &[&str] = &[
    "XS", "S", "M", "L", "XL", "XXL", "XXXL", "36", "38", "40", "42", "44", "46", "48", "50",
];

/// Points range shown on the form before an item is reviewed.
pub const ESTIMATED_POINTS: (u32, u32) = (75, 90);

/// Raw add-item form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub size: String,
    pub brand: String,
    /// Comma separated.
    pub tags: String,
}

impl SubmissionForm {
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self::default();
        for (name, value) in fields {
            let slot = match name {
                "title" => &mut form.title,
                "description" => &mut form.description,
                "category" => &mut form.category,
                "condition" => &mut form.condition,
                "size" => &mut form.size,
                "brand" => &mut form.brand,
                "tags" => &mut form.tags,
                _ => continue,
            };
            *slot = value.to_string();
        }
        form
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SubmissionError {
    #[error("Please add at least one image")]
    NoImages,

    #[error("You can upload up to {0} photos")]
    TooManyImages(usize),

    #[error("Please fill in all required fields")]
    MissingFields,
}

/// A checked submission ready for the moderation queue.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub condition: Condition,
    pub size: Option<String>,
    pub brand: Option<String>,
    pub tags: Vec<String>,
}

impl SubmissionForm {
    /// Checks run in order: images first, then required fields.
    pub fn validate(
        &self,
        image_count: usize,
        max_images: usize,
    ) -> Result<ValidSubmission, SubmissionError> {
        if image_count == 0 {
            return Err(SubmissionError::NoImages);
        }
        if image_count > max_images {
            return Err(SubmissionError::TooManyImages(max_images));
        }

        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(SubmissionError::MissingFields);
        }

        // an out-of-list value counts as not chosen
        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| SubmissionError::MissingFields)?;
        let condition = self
            .condition
            .parse::<Condition>()
            .map_err(|_| SubmissionError::MissingFields)?;

        Ok(ValidSubmission {
            title: title.to_string(),
            description: description.to_string(),
            category,
            condition,
            size: non_empty(&self.size),
            brand: non_empty(&self.brand),
            tags: normalize_tags(&self.tags),
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Split on commas, trim, drop empties and repeats (first one wins).
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
