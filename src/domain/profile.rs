// src/domain/profile.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub categories: Vec<String>,
    pub sizes: Vec<String>,
    pub style: String,
}

/// Editable contact details shown on the profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub preferences: Preferences,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
            bio: "Passionate about sustainable fashion and reducing textile waste. \
                  Love finding unique pieces and giving clothes a second life!"
                .to_string(),
            preferences: Preferences {
                categories: vec!["Vintage".into(), "Casual".into(), "Designer".into()],
                sizes: vec!["M".into(), "L".into()],
                style: "Eclectic".to_string(),
            },
        }
    }
}

/// Submitted edit form. Email is not editable.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error("Name cannot be empty")]
    EmptyName,
}

impl ProfileUpdate {
    /// Checks the update and writes it into `name` and `profile`.
    /// Nothing is written when validation fails.
    pub fn apply(self, name: &mut String, profile: &mut Profile) -> Result<(), ProfileError> {
        let new_name = self.name.trim();
        if new_name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        *name = new_name.to_string();
        profile.phone = self.phone.trim().to_string();
        profile.location = self.location.trim().to_string();
        profile.bio = self.bio.trim().to_string();
        Ok(())
    }
}
