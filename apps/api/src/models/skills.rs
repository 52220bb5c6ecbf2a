use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::content::ordering;
use crate::content::validation::{FieldError, Validator};
use crate::store::{PgQueryAs, Record};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillCategory {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    #[serde(default)]
    pub id: i64,
    /// Nulled when the category is deleted.
    #[serde(default)]
    pub category_id: Option<i64>,
    pub name: String,
    /// Percentage, 0..=100.
    pub proficiency: i32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "language_proficiency", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LanguageProficiency {
    Native,
    Professional,
    Conversational,
    Basic,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Language {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub proficiency: LanguageProficiency,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interest {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    /// Icon identifier understood by the front end, e.g. `"fa-book"`.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

impl Record for SkillCategory {
    const TABLE: &'static str = "skill_categories";
    const COLLECTION: &'static str = "skill-categories";
    const COLUMNS: &'static [&'static str] = &["name", "display_order"];
    const REFERENCED_BY: &'static [(&'static str, &'static str)] = &[("skills", "category_id")];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<FieldError> {
        Validator::default()
            .required("name", &self.name)
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::skill_categories(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(self.name.clone()).bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl Record for Skill {
    const TABLE: &'static str = "skills";
    const COLLECTION: &'static str = "skills";
    const COLUMNS: &'static [&'static str] = &[
        "category_id",
        "name",
        "proficiency",
        "is_featured",
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
            .percentage("proficiency", self.proficiency)
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::skills(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.category_id)
            .bind(self.name.clone())
            .bind(self.proficiency)
            .bind(self.is_featured)
            .bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn references(&self) -> Vec<(&'static str, &'static str, i64)> {
        self.category_id
            .map(|id| ("category_id", SkillCategory::TABLE, id))
            .into_iter()
            .collect()
    }
}

impl Record for Language {
    const TABLE: &'static str = "languages";
    const COLLECTION: &'static str = "languages";
    const COLUMNS: &'static [&'static str] = &["name", "proficiency", "display_order"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<FieldError> {
        Validator::default()
            .required("name", &self.name)
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::languages(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.name.clone())
            .bind(self.proficiency)
            .bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl Record for Interest {
    const TABLE: &'static str = "interests";
    const COLLECTION: &'static str = "interests";
    const COLUMNS: &'static [&'static str] = &["name", "icon", "display_order"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<FieldError> {
        Validator::default()
            .required("name", &self.name)
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::interests(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.name.clone())
            .bind(self.icon.clone())
            .bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }
}
