use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::content::ordering;
use crate::content::validation::{FieldError, Validator};
use crate::store::{PgQueryAs, Record};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Education {
    #[serde(default)]
    pub id: i64,
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub location: String,
    pub start_year: i32,
    /// `None` while the programme is in progress.
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub description: String,
    /// `|`-delimited.
    #[serde(default)]
    pub achievements: String,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "employment_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    #[serde(default)]
    pub id: i64,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub location: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: String,
    /// `|`-delimited.
    #[serde(default)]
    pub achievements: String,
    /// `|`-delimited.
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    Ongoing,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// `|`-delimited.
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub live_link: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// `|`-delimited.
    #[serde(default)]
    pub highlights: String,
    #[serde(default)]
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

impl Record for Education {
    const TABLE: &'static str = "education";
    const COLLECTION: &'static str = "education";
    const COLUMNS: &'static [&'static str] = &[
        "degree",
        "institution",
        "field",
        "location",
        "start_year",
        "end_year",
        "gpa",
        "description",
        "achievements",
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
            .required("degree", &self.degree)
            .required("institution", &self.institution)
            .year("start_year", self.start_year)
            .year_span("end_year", self.start_year, self.end_year)
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::education(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.degree.clone())
            .bind(self.institution.clone())
            .bind(self.field.clone())
            .bind(self.location.clone())
            .bind(self.start_year)
            .bind(self.end_year)
            .bind(self.gpa.clone())
            .bind(self.description.clone())
            .bind(self.achievements.clone())
            .bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.degree, &self.institution]
    }
}

impl Record for Experience {
    const TABLE: &'static str = "experience";
    const COLLECTION: &'static str = "experience";
    const COLUMNS: &'static [&'static str] = &[
        "company",
        "role",
        "employment_type",
        "location",
        "start_date",
        "end_date",
        "is_current",
        "description",
        "achievements",
        "technologies",
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
            .required("company", &self.company)
            .required("role", &self.role)
            .date_span("end_date", Some(self.start_date), self.end_date)
            .check(
                !(self.is_current && self.end_date.is_some()),
                "end_date",
                "A current position cannot have an end date",
            )
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::experience(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.company.clone())
            .bind(self.role.clone())
            .bind(self.employment_type)
            .bind(self.location.clone())
            .bind(self.start_date)
            .bind(self.end_date)
            .bind(self.is_current)
            .bind(self.description.clone())
            .bind(self.achievements.clone())
            .bind(self.technologies.clone())
            .bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.role, &self.company]
    }
}

impl Record for Project {
    const TABLE: &'static str = "projects";
    const COLLECTION: &'static str = "projects";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "description",
        "technologies",
        "github_link",
        "live_link",
        "image",
        "status",
        "featured",
        "start_date",
        "end_date",
        "highlights",
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
            .url("github_link", &self.github_link)
            .url("live_link", &self.live_link)
            .url("image", &self.image)
            .date_span("end_date", self.start_date, self.end_date)
            .order(self.order)
            .finish()
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        ordering::projects(self, other)
    }

    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.title.clone())
            .bind(self.subtitle.clone())
            .bind(self.description.clone())
            .bind(self.technologies.clone())
            .bind(self.github_link.clone())
            .bind(self.live_link.clone())
            .bind(self.image.clone())
            .bind(self.status)
            .bind(self.featured)
            .bind(self.start_date)
            .bind(self.end_date)
            .bind(self.highlights.clone())
            .bind(self.order)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title]
    }
}
