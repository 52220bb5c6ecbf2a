//! Record builders shared by test modules. Ids are left at 0 for the store to assign.

use chrono::NaiveDate;

use crate::models::career::{EmploymentType, Education, Experience, Project, ProjectStatus};
use crate::models::profile::{Availability, Profile};
use crate::models::recognition::{Achievement, Certification, Publication};
use crate::models::skills::{Interest, Language, LanguageProficiency, Skill, SkillCategory};

pub fn date(ymd: &str) -> NaiveDate {
    NaiveDate::parse_from_str(ymd, "%Y-%m-%d").unwrap()
}

pub fn make_profile(name: &str) -> Profile {
    Profile {
        id: 0,
        name: name.to_string(),
        title: "Software Engineer".to_string(),
        bio: String::new(),
        profile_image: String::new(),
        email: "owner@example.com".to_string(),
        phone: String::new(),
        location: "Lisbon".to_string(),
        website: String::new(),
        linkedin: String::new(),
        github: "https://github.com/example".to_string(),
        twitter: String::new(),
        availability: Availability::OpenToOffers,
    }
}

pub fn make_category(name: &str, order: i32) -> SkillCategory {
    SkillCategory {
        id: 0,
        name: name.to_string(),
        order,
    }
}

pub fn make_skill(name: &str, order: i32, proficiency: i32) -> Skill {
    Skill {
        id: 0,
        category_id: None,
        name: name.to_string(),
        proficiency,
        is_featured: false,
        order,
    }
}

pub fn make_language(name: &str, order: i32) -> Language {
    Language {
        id: 0,
        name: name.to_string(),
        proficiency: LanguageProficiency::Professional,
        order,
    }
}

pub fn make_interest(name: &str) -> Interest {
    Interest {
        id: 0,
        name: name.to_string(),
        icon: String::new(),
        order: 0,
    }
}

pub fn make_certification(name: &str, year: i32, order: i32) -> Certification {
    Certification {
        id: 0,
        name: name.to_string(),
        issuer: "CNCF".to_string(),
        year,
        credential_id: String::new(),
        credential_url: String::new(),
        order,
    }
}

/// Programme lasting two years, ending at `end_year` (or still running from 2022).
pub fn make_education(degree: &str, end_year: Option<i32>) -> Education {
    Education {
        id: 0,
        degree: degree.to_string(),
        institution: "University of Porto".to_string(),
        field: "Computer Science".to_string(),
        location: String::new(),
        start_year: end_year.map_or(2022, |y| y - 2),
        end_year,
        gpa: String::new(),
        description: String::new(),
        achievements: String::new(),
        order: 0,
    }
}

pub fn make_experience(company: &str, start: &str) -> Experience {
    Experience {
        id: 0,
        company: company.to_string(),
        role: "Backend Engineer".to_string(),
        employment_type: EmploymentType::FullTime,
        location: String::new(),
        start_date: date(start),
        end_date: None,
        is_current: false,
        description: String::new(),
        achievements: String::new(),
        technologies: String::new(),
        order: 0,
    }
}

pub fn make_project(title: &str, featured: bool, order: i32) -> Project {
    Project {
        id: 0,
        title: title.to_string(),
        subtitle: String::new(),
        description: String::new(),
        technologies: String::new(),
        github_link: String::new(),
        live_link: String::new(),
        image: String::new(),
        status: ProjectStatus::Completed,
        featured,
        start_date: None,
        end_date: None,
        highlights: String::new(),
        order,
    }
}

pub fn make_achievement(title: &str, year: i32) -> Achievement {
    Achievement {
        id: 0,
        title: title.to_string(),
        issuer: String::new(),
        year,
        description: String::new(),
        order: 0,
    }
}

pub fn make_publication(title: &str, published: &str) -> Publication {
    Publication {
        id: 0,
        title: title.to_string(),
        publisher: "ACM".to_string(),
        date: date(published),
        url: String::new(),
        description: String::new(),
        order: 0,
    }
}
