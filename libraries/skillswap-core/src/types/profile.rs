/// User profile domain types
use crate::error::{Result, SwapError};
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest rating a profile can carry.
pub const MAX_RATING: f64 = 5.0;

/// A user record as persisted, including fields that must never leave the
/// server through discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Private contact address
    pub email: Option<String>,

    /// Free-form location
    pub location: Option<String>,

    /// Skills this user can teach, in the order they were entered
    pub skills_offered: Vec<String>,

    /// Skills this user wants to learn, in the order they were entered
    pub skills_wanted: Vec<String>,

    /// Free-text availability ("weekends", "evenings")
    pub availability: Option<String>,

    /// Whether the user opted into public discovery
    pub is_public: bool,

    /// Set by moderation
    pub is_banned: bool,

    /// Admin flag; `None` is treated as "not an admin"
    pub is_admin: Option<bool>,

    /// Average rating, 0 when unrated
    pub rating: f64,

    /// Number of ratings behind `rating`
    pub total_ratings: u32,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Build a stored profile from an import payload, assigning a fresh ID.
    pub fn from_new(new: NewProfile) -> Result<Self> {
        new.validate()?;

        Ok(Self {
            id: UserId::generate(),
            name: new.name,
            email: new.email,
            location: new.location,
            skills_offered: new.skills_offered,
            skills_wanted: new.skills_wanted,
            availability: new.availability,
            is_public: new.is_public,
            is_banned: new.is_banned,
            is_admin: new.is_admin,
            rating: new.rating,
            total_ratings: new.total_ratings,
            created_at: Utc::now(),
        })
    }

    /// Eligible for discovery: public, not banned, not an admin.
    pub fn is_discoverable(&self) -> bool {
        self.is_public && !self.is_banned && self.is_admin != Some(true)
    }

    /// Public-safe projection of this profile.
    pub fn to_public(&self) -> PublicProfile {
        PublicProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            skills_offered: self.skills_offered.clone(),
            skills_wanted: self.skills_wanted.clone(),
            availability: self.availability.clone(),
            rating: self.rating,
            total_ratings: self.total_ratings,
        }
    }
}

/// The public-safe projection of a user returned by discovery.
///
/// Credentials, contact details and moderation flags are not part of this
/// type, so they cannot leak through serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    /// Unique user identifier
    #[serde(alias = "_id")]
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Free-form location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Skills this user can teach
    #[serde(default)]
    pub skills_offered: Vec<String>,

    /// Skills this user wants to learn
    #[serde(default)]
    pub skills_wanted: Vec<String>,

    /// Free-text availability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Average rating, 0 when unrated
    #[serde(default)]
    pub rating: f64,

    /// Number of ratings behind `rating`
    #[serde(default)]
    pub total_ratings: u32,
}

impl From<&UserProfile> for PublicProfile {
    fn from(profile: &UserProfile) -> Self {
        profile.to_public()
    }
}

/// Import payload for a profile (used by seeding and tests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills_offered: Vec<String>,
    #[serde(default)]
    pub skills_wanted: Vec<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_ratings: u32,
}

fn default_is_public() -> bool {
    true
}

impl NewProfile {
    /// A public, unrated profile with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            location: None,
            skills_offered: Vec::new(),
            skills_wanted: Vec::new(),
            availability: None,
            is_public: true,
            is_banned: false,
            is_admin: None,
            rating: 0.0,
            total_ratings: 0,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_offered<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills_offered = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_wanted<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills_wanted = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    pub fn with_rating(mut self, rating: f64, total_ratings: u32) -> Self {
        self.rating = rating;
        self.total_ratings = total_ratings;
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn banned(mut self) -> Self {
        self.is_banned = true;
        self
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = Some(true);
        self
    }

    /// Check the payload before it is stored.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SwapError::invalid_input("profile name cannot be empty"));
        }

        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(SwapError::invalid_input(format!(
                "rating must be between 0 and {MAX_RATING}, got {}",
                self.rating
            )));
        }

        Ok(())
    }
}
