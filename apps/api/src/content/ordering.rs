//! Display order for every entity.
//!
//! Each comparator lists its keys explicitly and ends with `id` ascending so
//! that no two distinct records compare equal.

use std::cmp::Ordering;

use crate::models::career::{Education, Experience, Project};
use crate::models::recognition::{Achievement, Certification, Publication};
use crate::models::skills::{Interest, Language, Skill, SkillCategory};

/// `order` asc.
pub fn skill_categories(a: &SkillCategory, b: &SkillCategory) -> Ordering {
    a.order.cmp(&b.order).then(a.id.cmp(&b.id))
}

/// `order` asc, `proficiency` desc.
pub fn skills(a: &Skill, b: &Skill) -> Ordering {
    a.order
        .cmp(&b.order)
        .then(b.proficiency.cmp(&a.proficiency))
        .then(a.id.cmp(&b.id))
}

/// `order` asc.
pub fn languages(a: &Language, b: &Language) -> Ordering {
    a.order.cmp(&b.order).then(a.id.cmp(&b.id))
}

/// `year` desc, `order` asc.
pub fn certifications(a: &Certification, b: &Certification) -> Ordering {
    b.year
        .cmp(&a.year)
        .then(a.order.cmp(&b.order))
        .then(a.id.cmp(&b.id))
}

/// `order` asc.
pub fn interests(a: &Interest, b: &Interest) -> Ordering {
    a.order.cmp(&b.order).then(a.id.cmp(&b.id))
}

/// `end_year` desc, `order` asc. An open `end_year` (in progress) ranks first.
pub fn education(a: &Education, b: &Education) -> Ordering {
    let end = |e: &Education| e.end_year.unwrap_or(i32::MAX);
    end(b)
        .cmp(&end(a))
        .then(a.order.cmp(&b.order))
        .then(a.id.cmp(&b.id))
}

/// `start_date` desc, `order` asc.
pub fn experience(a: &Experience, b: &Experience) -> Ordering {
    b.start_date
        .cmp(&a.start_date)
        .then(a.order.cmp(&b.order))
        .then(a.id.cmp(&b.id))
}

/// `featured` first, `order` asc, `start_date` desc. Undated projects sort
/// after dated ones within the same group.
pub fn projects(a: &Project, b: &Project) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then(a.order.cmp(&b.order))
        .then(b.start_date.cmp(&a.start_date))
        .then(a.id.cmp(&b.id))
}

/// `year` desc, `order` asc.
pub fn achievements(a: &Achievement, b: &Achievement) -> Ordering {
    b.year
        .cmp(&a.year)
        .then(a.order.cmp(&b.order))
        .then(a.id.cmp(&b.id))
}

/// `date` desc, `order` asc.
pub fn publications(a: &Publication, b: &Publication) -> Ordering {
    b.date
        .cmp(&a.date)
        .then(a.order.cmp(&b.order))
        .then(a.id.cmp(&b.id))
}
