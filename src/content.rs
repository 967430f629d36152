use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

static BUILTIN_CONTENT: LazyLock<Result<Content, ContentError>> = LazyLock::new(load_builtin);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),
    #[error("Duplicate skill category: {0}")]
    DuplicateCategory(String),
    #[error("Skill {skill} has level {level}, expected 0-100")]
    LevelOutOfRange { skill: String, level: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct SkillRecord {
    name: String,
    level: i64,
    description: String,
}

/// A named proficiency. The level is a percentage and is checked when the
/// skill is authored, so anything holding a `Skill` can render it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SkillRecord")]
pub struct Skill {
    pub name: String,
    level: u8,
    pub description: String,
}

impl Skill {
    pub fn new(
        name: impl Into<String>,
        level: i64,
        description: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let name = name.into();
        let level = match u8::try_from(level) {
            Ok(l) if l <= 100 => l,
            _ => return Err(ContentError::LevelOutOfRange { skill: name, level }),
        };
        Ok(Self {
            name,
            level,
            description: description.into(),
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl TryFrom<SkillRecord> for Skill {
    type Error = ContentError;

    fn try_from(value: SkillRecord) -> Result<Self, Self::Error> {
        Skill::new(value.name, value.level, value.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// Everything the page shows that isn't hard-coded markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    projects: Vec<Project>,
    skills: Vec<SkillCategory>,
}

impl Content {
    /// Builds content from caller-supplied data. An empty list on either side
    /// falls back to the built-in entries for that side.
    pub fn new(projects: Vec<Project>, skills: Vec<SkillCategory>) -> Result<Self, ContentError> {
        let (projects, skills) = if projects.is_empty() || skills.is_empty() {
            let builtin = Self::builtin()?;
            (
                if projects.is_empty() {
                    builtin.projects
                } else {
                    projects
                },
                if skills.is_empty() {
                    builtin.skills
                } else {
                    skills
                },
            )
        } else {
            (projects, skills)
        };
        check_unique_projects(&projects)?;
        check_unique_categories(&skills)?;
        Ok(Self { projects, skills })
    }

    /// The content embedded from the `content/` folder, parsed once per process.
    pub fn builtin() -> Result<Self, ContentError> {
        BUILTIN_CONTENT.clone()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &[SkillCategory] {
        &self.skills
    }
}

fn load_builtin() -> Result<Content, ContentError> {
    let projects = read_json::<Vec<Project>>("projects.json")?;
    let skills = read_json::<Vec<SkillCategory>>("skills.json")?;
    check_unique_projects(&projects)?;
    check_unique_categories(&skills)?;
    log::debug!(
        "loaded {} projects and {} skill categories",
        projects.len(),
        skills.len()
    );
    Ok(Content { projects, skills })
}

fn read_json<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let asset = Assets::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    serde_json::from_slice(&asset.data).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

fn check_unique_projects(projects: &[Project]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    match projects.iter().find(|p| !seen.insert(p.id.as_str())) {
        Some(dup) => Err(ContentError::DuplicateProject(dup.id.clone())),
        None => Ok(()),
    }
}

fn check_unique_categories(skills: &[SkillCategory]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    match skills.iter().find(|c| !seen.insert(c.name.as_str())) {
        Some(dup) => Err(ContentError::DuplicateCategory(dup.name.clone())),
        None => Ok(()),
    }
}
