use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::content::validation::{FieldError, Validator};
use crate::store::{PgQueryAs, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "availability", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    OpenToOffers,
    NotAvailable,
}

/// The portfolio owner. Stored in a single-row table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub bio: String,
    /// Image URL; uploads are handled outside this service.
    #[serde(default)]
    pub profile_image: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub availability: Availability,
}

impl Record for Profile {
    const TABLE: &'static str = "profile";
    const COLLECTION: &'static str = "profile";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "title",
        "bio",
        "profile_image",
        "email",
        "phone",
        "location",
        "website",
        "linkedin",
        "github",
        "twitter",
        "availability",
    ];
    const SINGLETON: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<FieldError> {
        Validator::default()
            .required("name", &self.name)
            .required("title", &self.title)
            .email("email", &self.email)
            .url("profile_image", &self.profile_image)
            .url("website", &self.website)
            .url("linkedin", &self.linkedin)
            .url("github", &self.github)
            .url("twitter", &self.twitter)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.name.clone())
            .bind(self.title.clone())
            .bind(self.bio.clone())
            .bind(self.profile_image.clone())
            .bind(self.email.clone())
            .bind(self.phone.clone())
            .bind(self.location.clone())
            .bind(self.website.clone())
            .bind(self.linkedin.clone())
            .bind(self.github.clone())
            .bind(self.twitter.clone())
            .bind(self.availability)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }
}
