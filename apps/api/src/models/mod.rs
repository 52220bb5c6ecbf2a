pub mod career;
pub mod profile;
pub mod recognition;
pub mod skills;
