use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::text::{clean_list, non_blank, non_blank_opt};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub highlights: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectValidationError {
    #[error("title and description are required")]
    MissingTitleOrDescription,

    #[error("No fields to update")]
    NoFieldsToUpdate,
}

/// Raw fields of a project as submitted by the admin.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub role: Option<String>,
    pub technologies: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub highlights: Vec<String>,
}

/// A validated project ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub role: Option<String>,
    pub technologies: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub highlights: Vec<String>,
}

impl NewProject {
    pub fn new(draft: ProjectDraft) -> Result<Self, ProjectValidationError> {
        let (title, description) = match (non_blank(&draft.title), non_blank(&draft.description)) {
            (Some(t), Some(d)) => (t, d),
            _ => return Err(ProjectValidationError::MissingTitleOrDescription),
        };

        Ok(Self {
            title,
            description,
            long_description: non_blank_opt(draft.long_description),
            role: non_blank_opt(draft.role),
            technologies: clean_list(draft.technologies),
            demo_url: non_blank_opt(draft.demo_url),
            github_url: non_blank_opt(draft.github_url),
            image_url: non_blank_opt(draft.image_url),
            highlights: clean_list(draft.highlights),
        })
    }
}

/// Patch semantics:
/// - title/description: Unset => keep, Value => replace (never blank)
/// - list fields: Value(vec) => replace whole array, cleaned
/// - optional text: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub long_description: PatchField<String>,
    pub role: PatchField<String>,
    pub technologies: PatchField<Vec<String>>,
    pub demo_url: PatchField<String>,
    pub github_url: PatchField<String>,
    pub image_url: PatchField<String>,
    pub highlights: PatchField<Vec<String>>,
}

/// Raw, all-optional update fields.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub role: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub highlights: Option<Vec<String>>,
}

impl ProjectPatch {
    pub fn new(changes: ProjectChanges) -> Result<Self, ProjectValidationError> {
        let required = |raw: Option<String>| -> Result<PatchField<String>, ProjectValidationError> {
            match raw {
                None => Ok(PatchField::Unset),
                Some(s) => non_blank(&s)
                    .map(PatchField::Value)
                    .ok_or(ProjectValidationError::MissingTitleOrDescription),
            }
        };

        let patch = Self {
            title: required(changes.title)?,
            description: required(changes.description)?,
            long_description: PatchField::optional_text(changes.long_description),
            role: PatchField::optional_text(changes.role),
            technologies: changes.technologies.map(clean_list).into(),
            demo_url: PatchField::optional_text(changes.demo_url),
            github_url: PatchField::optional_text(changes.github_url),
            image_url: PatchField::optional_text(changes.image_url),
            highlights: changes.highlights.map(clean_list).into(),
        };

        if patch.is_empty() {
            return Err(ProjectValidationError::NoFieldsToUpdate);
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.long_description.is_unset()
            && self.role.is_unset()
            && self.technologies.is_unset()
            && self.demo_url.is_unset()
            && self.github_url.is_unset()
            && self.image_url.is_unset()
            && self.highlights.is_unset()
    }
}
