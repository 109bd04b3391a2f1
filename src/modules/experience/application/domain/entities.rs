use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::domain::document::LinkItem;
use crate::shared::patch::PatchField;
use crate::shared::text::{clean_list, non_blank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    Work,
    Leadership,
    Project,
}

impl ExperienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Work => "work",
            ExperienceType::Leadership => "leadership",
            ExperienceType::Project => "project",
        }
    }
}

impl FromStr for ExperienceType {
    type Err = ExperienceValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "work" => Ok(ExperienceType::Work),
            "leadership" => Ok(ExperienceType::Leadership),
            "project" => Ok(ExperienceType::Project),
            _ => Err(ExperienceValidationError::InvalidType),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub title: String,
    pub org: String,
    pub period: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<LinkItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceValidationError {
    #[error("type, title, org, period and summary are required")]
    MissingFields,

    #[error("type must be one of: work, leadership, project")]
    InvalidType,

    #[error("No fields to update")]
    NoFieldsToUpdate,
}

/// Trimmed links that carry both a label and a target.
pub fn clean_links(links: Vec<LinkItem>) -> Vec<LinkItem> {
    links
        .into_iter()
        .filter_map(|l| Some(LinkItem::new(non_blank(&l.label)?, non_blank(&l.href)?)))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceDraft {
    pub kind: Option<String>,
    pub title: String,
    pub org: String,
    pub period: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExperience {
    pub kind: ExperienceType,
    pub title: String,
    pub org: String,
    pub period: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<LinkItem>,
}

impl NewExperience {
    pub fn new(draft: ExperienceDraft) -> Result<Self, ExperienceValidationError> {
        let kind = match draft.kind.as_deref().map(str::trim) {
            None | Some("") => return Err(ExperienceValidationError::MissingFields),
            Some(raw) => raw.parse()?,
        };
        let required = |s: &str| non_blank(s).ok_or(ExperienceValidationError::MissingFields);

        Ok(Self {
            kind,
            title: required(&draft.title)?,
            org: required(&draft.org)?,
            period: required(&draft.period)?,
            summary: required(&draft.summary)?,
            highlights: clean_list(draft.highlights),
            tags: clean_list(draft.tags),
            links: clean_links(draft.links),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceChanges {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub org: Option<String>,
    pub period: Option<String>,
    pub summary: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub links: Option<Vec<LinkItem>>,
}

/// Every experience column is required, so a patch only ever keeps or
/// replaces. List fields replace the whole array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperiencePatch {
    pub kind: PatchField<ExperienceType>,
    pub title: PatchField<String>,
    pub org: PatchField<String>,
    pub period: PatchField<String>,
    pub summary: PatchField<String>,
    pub highlights: PatchField<Vec<String>>,
    pub tags: PatchField<Vec<String>>,
    pub links: PatchField<Vec<LinkItem>>,
}

impl ExperiencePatch {
    /// An unrecognised `type` is dropped from the patch rather than rejected.
    pub fn new(changes: ExperienceChanges) -> Result<Self, ExperienceValidationError> {
        let required = |raw: Option<String>| -> Result<PatchField<String>, ExperienceValidationError> {
            match raw {
                None => Ok(PatchField::Unset),
                Some(s) => non_blank(&s)
                    .map(PatchField::Value)
                    .ok_or(ExperienceValidationError::MissingFields),
            }
        };

        let patch = Self {
            kind: changes.kind.and_then(|raw| raw.parse::<ExperienceType>().ok()).into(),
            title: required(changes.title)?,
            org: required(changes.org)?,
            period: required(changes.period)?,
            summary: required(changes.summary)?,
            highlights: changes.highlights.map(clean_list).into(),
            tags: changes.tags.map(clean_list).into(),
            links: changes.links.map(clean_links).into(),
        };

        if patch.is_empty() {
            return Err(ExperienceValidationError::NoFieldsToUpdate);
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_unset()
            && self.title.is_unset()
            && self.org.is_unset()
            && self.period.is_unset()
            && self.summary.is_unset()
            && self.highlights.is_unset()
            && self.tags.is_unset()
            && self.links.is_unset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExperienceDraft {
        ExperienceDraft {
            kind: Some("work".into()),
            title: " Engineer ".into(),
            org: "Acme".into(),
            period: "2020 - 2023".into(),
            summary: "Built things".into(),
            highlights: vec!["one".into(), "  ".into()],
            tags: vec![" rust ".into()],
            links: vec![
                LinkItem::new(" Repo ", " https://example.com "),
                LinkItem::new("No href", ""),
                LinkItem::new("", "https://orphan.example.com"),
            ],
        }
    }

    #[test]
    fn new_experience_cleans_lists_and_links() {
        let exp = NewExperience::new(draft()).unwrap();

        assert_eq!(exp.kind, ExperienceType::Work);
        assert_eq!(exp.title, "Engineer");
        assert_eq!(exp.highlights, vec!["one"]);
        assert_eq!(exp.tags, vec!["rust"]);
        assert_eq!(exp.links, vec![LinkItem::new("Repo", "https://example.com")]);
    }

    #[test]
    fn new_experience_requires_every_scalar() {
        let mut d = draft();
        d.period = " ".into();
        assert_eq!(
            NewExperience::new(d).unwrap_err(),
            ExperienceValidationError::MissingFields
        );

        let mut d = draft();
        d.kind = None;
        assert_eq!(
            NewExperience::new(d).unwrap_err(),
            ExperienceValidationError::MissingFields
        );

        let mut d = draft();
        d.kind = Some("hobby".into());
        assert_eq!(
            NewExperience::new(d).unwrap_err(),
            ExperienceValidationError::InvalidType
        );
    }

    #[test]
    fn patch_ignores_unknown_type() {
        let patch = ExperiencePatch::new(ExperienceChanges {
            kind: Some("hobby".into()),
            title: Some("Lead".into()),
            ..Default::default()
        })
        .unwrap();

        assert!(patch.kind.is_unset());
        assert_eq!(patch.title, PatchField::Value("Lead".to_string()));
    }

    #[test]
    fn patch_with_only_unknown_type_is_empty() {
        let err = ExperiencePatch::new(ExperienceChanges {
            kind: Some("hobby".into()),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(err, ExperienceValidationError::NoFieldsToUpdate);
    }

    #[test]
    fn patch_replaces_lists_and_rejects_blank_scalars() {
        let patch = ExperiencePatch::new(ExperienceChanges {
            kind: Some("leadership".into()),
            tags: Some(vec![" go ".into(), "".into()]),
            links: Some(vec![]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(patch.kind, PatchField::Value(ExperienceType::Leadership));
        assert_eq!(patch.tags, PatchField::Value(vec!["go".to_string()]));
        assert_eq!(patch.links, PatchField::Value(vec![]));
        assert!(patch.highlights.is_unset());

        let err = ExperiencePatch::new(ExperienceChanges {
            org: Some("  ".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ExperienceValidationError::MissingFields);
    }

    #[test]
    fn serializes_kind_as_type() {
        let now = Utc::now();
        let exp = Experience {
            id: Uuid::nil(),
            kind: ExperienceType::Leadership,
            title: "t".into(),
            org: "o".into(),
            period: "p".into(),
            summary: "s".into(),
            highlights: vec![],
            tags: vec![],
            links: vec![],
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(exp).unwrap();
        assert_eq!(value["type"], "leadership");
        assert!(value.get("kind").is_none());
        assert!(value["createdAt"].is_string());
    }
}
