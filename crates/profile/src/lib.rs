//! Page content: everything the portfolio renders that is not the contact form.

use std::path::Path;

use config::{File, FileFormat};
use serde::{Deserialize, Serialize};

mod builtin;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load profile: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid profile: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub hero: Hero,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub education: Education,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub email: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub linkedin_url: String,
    pub linkedin_label: String,
    pub location: String,
}

impl Profile {
    /// Reads a TOML profile. Sections missing from the file keep the
    /// built-in content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_string_lossy();
        let profile: Profile = config::Config::builder()
            .add_source(File::new(&path, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        profile.validate()?;

        Ok(profile)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hero.name.trim().is_empty() {
            return Err(Error::Invalid("hero.name must not be empty".to_owned()));
        }

        if let Some(group) = self.skills.iter().find(|g| g.category.trim().is_empty()) {
            return Err(Error::Invalid(format!(
                "skill group with skills {:?} has no category",
                group.skills
            )));
        }

        if self.projects.iter().any(|p| p.title.trim().is_empty()) {
            return Err(Error::Invalid("every project needs a title".to_owned()));
        }

        if self.experiences.iter().any(|e| e.title.trim().is_empty()) {
            return Err(Error::Invalid("every experience needs a title".to_owned()));
        }

        Ok(())
    }
}
