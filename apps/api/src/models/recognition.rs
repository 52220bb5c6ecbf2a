use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::content::ordering;
use crate::content::validation::{FieldError, Validator};
use crate::store::{PgQueryAs, Record};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certification {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    pub year: i32,
    #[serde(default)]
    pub credential_id: String,
    #[serde(default)]
    pub credential_url: String,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Achievement {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    pub year: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Publication {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[sqlx(rename = "published_on")]
    pub date: NaiveDate,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

impl Record for Certification {
    const TABLE: &'static str = "certifications";
    const COLLECTION: &'static str = "certifications";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "issuer",
        "year",
        "credential_id",
        "credential_url",
        "display_order",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<FieldError> {
        Validator::default()
            .required("name", &self.name)
            .year("year", self.year)
            .url("credential_url", &self.credential_url)
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::certifications(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.name.clone())
            .bind(self.issuer.clone())
            .bind(self.year)
            .bind(self.credential_id.clone())
            .bind(self.credential_url.clone())
            .bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.issuer]
    }
}

impl Record for Achievement {
    const TABLE: &'static str = "achievements";
    const COLLECTION: &'static str = "achievements";
    const COLUMNS: &'static [&'static str] =
        &["title", "issuer", "year", "description", "display_order"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<FieldError> {
        Validator::default()
            .required("title", &self.title)
            .year("year", self.year)
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::achievements(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.title.clone())
            .bind(self.issuer.clone())
            .bind(self.year)
            .bind(self.description.clone())
            .bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title]
    }
}

impl Record for Publication {
    const TABLE: &'static str = "publications";
    const COLLECTION: &'static str = "publications";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "publisher",
        "published_on",
        "url",
        "description",
        "display_order",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<FieldError> {
        Validator::default()
            .required("title", &self.title)
            .url("url", &self.url)
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::publications(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.title.clone())
            .bind(self.publisher.clone())
            .bind(self.date)
            .bind(self.url.clone())
            .bind(self.description.clone())
            .bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.publisher]
    }
}
