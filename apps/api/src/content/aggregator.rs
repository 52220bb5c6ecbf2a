//! Resume aggregation — gathers every content table into one ordered,
//! display-ready view for the public page.
//!
//! Reads are independent per table with no transactional coupling; a record
//! written between two reads may or may not appear. The view is display-only.

use serde::Serialize;
use tracing::debug;

use crate::content::delimited::expand;
use crate::models::career::{Education, Experience, Project};
use crate::models::profile::Profile;
use crate::models::recognition::{Achievement, Certification, Publication};
use crate::models::skills::{Interest, Language, Skill, SkillCategory};
use crate::store::{ContentStore, Record, StoreError};

pub const FEATURED_SKILL_LIMIT: usize = 8;
pub const FEATURED_PROJECT_LIMIT: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// View models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    #[serde(flatten)]
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationView {
    #[serde(flatten)]
    pub education: Education,
    pub achievements_list: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    #[serde(flatten)]
    pub experience: Experience,
    pub achievements_list: Vec<String>,
    pub technologies_list: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub technologies_list: Vec<String>,
    pub highlights_list: Vec<String>,
}

impl From<Education> for EducationView {
    fn from(education: Education) -> Self {
        Self {
            achievements_list: expand(Some(&education.achievements)),
            education,
        }
    }
}

impl From<Experience> for ExperienceView {
    fn from(experience: Experience) -> Self {
        Self {
            achievements_list: expand(Some(&experience.achievements)),
            technologies_list: expand(Some(&experience.technologies)),
            experience,
        }
    }
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        Self {
            technologies_list: expand(Some(&project.technologies)),
            highlights_list: expand(Some(&project.highlights)),
            project,
        }
    }
}

/// Everything the public page shows. `profile` is `None` when none is configured.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeView {
    pub profile: Option<Profile>,
    pub skill_categories: Vec<CategoryView>,
    pub featured_skills: Vec<Skill>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub certifications: Vec<Certification>,
    pub interests: Vec<Interest>,
    pub education: Vec<EducationView>,
    pub experience: Vec<ExperienceView>,
    pub featured_projects: Vec<ProjectView>,
    pub projects: Vec<ProjectView>,
    pub achievements: Vec<Achievement>,
    pub publications: Vec<Publication>,
}

/// Unordered rows as read from the store, one list per table.
#[derive(Debug, Clone, Default)]
pub struct ContentSnapshot {
    pub profiles: Vec<Profile>,
    pub skill_categories: Vec<SkillCategory>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub certifications: Vec<Certification>,
    pub interests: Vec<Interest>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub publications: Vec<Publication>,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Reads every table once and assembles the view. Never writes.
pub async fn build_resume_view<S: ContentStore>(store: &S) -> Result<ResumeView, StoreError> {
    let snapshot = ContentSnapshot {
        profiles: store.list().await?,
        skill_categories: store.list().await?,
        skills: store.list().await?,
        languages: store.list().await?,
        certifications: store.list().await?,
        interests: store.list().await?,
        education: store.list().await?,
        experience: store.list().await?,
        projects: store.list().await?,
        achievements: store.list().await?,
        publications: store.list().await?,
    };
    Ok(assemble_resume_view(snapshot))
}

/// Orders, groups, truncates and expands a snapshot. Infallible: an empty
/// snapshot yields an empty view with no profile.
pub fn assemble_resume_view(snapshot: ContentSnapshot) -> ResumeView {
    let profile = ordered(snapshot.profiles).into_iter().next();
    let skills = ordered(snapshot.skills);

    let skill_categories = ordered(snapshot.skill_categories)
        .into_iter()
        .map(|category| CategoryView {
            skills: skills
                .iter()
                .filter(|s| s.category_id == Some(category.id))
                .cloned()
                .collect(),
            category,
        })
        .collect();

    let featured_skills = skills
        .iter()
        .filter(|s| s.is_featured)
        .take(FEATURED_SKILL_LIMIT)
        .cloned()
        .collect();

    let projects: Vec<ProjectView> = ordered(snapshot.projects)
        .into_iter()
        .map(ProjectView::from)
        .collect();
    let featured_projects = projects
        .iter()
        .filter(|p| p.project.featured)
        .take(FEATURED_PROJECT_LIMIT)
        .cloned()
        .collect();

    let view = ResumeView {
        profile,
        skill_categories,
        featured_skills,
        skills,
        languages: ordered(snapshot.languages),
        certifications: ordered(snapshot.certifications),
        interests: ordered(snapshot.interests),
        education: ordered(snapshot.education)
            .into_iter()
            .map(EducationView::from)
            .collect(),
        experience: ordered(snapshot.experience)
            .into_iter()
            .map(ExperienceView::from)
            .collect(),
        featured_projects,
        projects,
        achievements: ordered(snapshot.achievements),
        publications: ordered(snapshot.publications),
    };

    debug!(
        "Assembled resume view: {} skills, {} projects, profile present: {}",
        view.skills.len(),
        view.projects.len(),
        view.profile.is_some()
    );
    view
}

fn ordered<R: Record>(mut rows: Vec<R>) -> Vec<R> {
    rows.sort_by(|a, b| a.display_cmp(b));
    rows
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
