use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::text::non_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Languages,
    Backend,
    Frontend,
    Tools,
    Concepts,
}

impl TechCategory {
    pub const ALL: [TechCategory; 5] = [
        TechCategory::Languages,
        TechCategory::Backend,
        TechCategory::Frontend,
        TechCategory::Tools,
        TechCategory::Concepts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechCategory::Languages => "languages",
            TechCategory::Backend => "backend",
            TechCategory::Frontend => "frontend",
            TechCategory::Tools => "tools",
            TechCategory::Concepts => "concepts",
        }
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TechCategory {
    type Err = TechStackValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TechCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or(TechStackValidationError::InvalidCategory)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub id: Uuid,
    pub name: String,
    pub category: TechCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TechStackValidationError {
    #[error("name and category are required")]
    MissingNameOrCategory,

    #[error("category must be one of: languages, backend, frontend, tools, concepts")]
    InvalidCategory,

    #[error("No fields to update")]
    NoFieldsToUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTechStack {
    pub name: String,
    pub category: TechCategory,
}

impl NewTechStack {
    pub fn new(name: &str, category: Option<&str>) -> Result<Self, TechStackValidationError> {
        let name = non_blank(name).ok_or(TechStackValidationError::MissingNameOrCategory)?;
        let category = match category.map(str::trim) {
            None | Some("") => return Err(TechStackValidationError::MissingNameOrCategory),
            Some(raw) => raw.parse()?,
        };

        Ok(Self { name, category })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TechStackChanges {
    pub name: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechStackPatch {
    pub name: PatchField<String>,
    pub category: PatchField<TechCategory>,
}

impl TechStackPatch {
    pub fn new(changes: TechStackChanges) -> Result<Self, TechStackValidationError> {
        let name = match changes.name {
            None => PatchField::Unset,
            Some(raw) => PatchField::Value(
                non_blank(&raw).ok_or(TechStackValidationError::MissingNameOrCategory)?,
            ),
        };
        let category = changes.category.map(|raw| raw.parse::<TechCategory>()).transpose()?.into();

        let patch = Self { name, category };
        if patch.is_empty() {
            return Err(TechStackValidationError::NoFieldsToUpdate);
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_unset() && self.category.is_unset()
    }
}
