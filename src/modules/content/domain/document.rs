use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Key under which the single content document is stored.
pub const CONTENT_SLUG: &str = "default";

/// Fields owned by the store. Never accepted back from a client.
pub const SERVER_MANAGED_FIELDS: [&str; 3] = ["_id", "createdAt", "updatedAt"];

/// Top-level keys with a typed section. Anything else rides along in `extra`.
pub const KNOWN_FIELDS: [&str; 14] = [
    "slug",
    "navbar",
    "consoleHint",
    "hero",
    "overview",
    "contactCard",
    "thoughts",
    "experience",
    "projectsSection",
    "techSection",
    "achievements",
    "aboutMe",
    "contactSection",
    "footer",
];

/// Removes every store-owned field from a raw document in place.
pub fn strip_server_fields(document: &mut Map<String, Value>) {
    for field in SERVER_MANAGED_FIELDS {
        document.remove(field);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

impl LinkItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.label.is_empty() && self.href.is_empty()
    }
}

/// Label/value pair used by hero stats, contact items and quick facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.label.is_empty() && self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Achievement category. Values outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AchievementCategory {
    Competition,
    Project,
    Milestone,
    Other(String),
}

impl From<String> for AchievementCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "competition" => Self::Competition,
            "project" => Self::Project,
            "milestone" => Self::Milestone,
            _ => Self::Other(value),
        }
    }
}

impl From<AchievementCategory> for String {
    fn from(value: AchievementCategory) -> Self {
        match value {
            AchievementCategory::Competition => "competition".to_string(),
            AchievementCategory::Project => "project".to_string(),
            AchievementCategory::Milestone => "milestone".to_string(),
            AchievementCategory::Other(raw) => raw,
        }
    }
}

/// Timeline entry kind. Values outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimelineKind {
    Work,
    Leadership,
    Project,
    Other(String),
}

impl From<String> for TimelineKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "work" => Self::Work,
            "leadership" => Self::Leadership,
            "project" => Self::Project,
            _ => Self::Other(value),
        }
    }
}

impl From<TimelineKind> for String {
    fn from(value: TimelineKind) -> Self {
        match value {
            TimelineKind::Work => "work".to_string(),
            TimelineKind::Leadership => "leadership".to_string(),
            TimelineKind::Project => "project".to_string(),
            TimelineKind::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    pub name: String,
    pub headline: String,
    pub subheadline: String,
    pub meta_line: String,
    pub avatar_alt: String,
    pub github_username: String,
    pub links: Vec<LinkItem>,
    pub stats: Vec<LabeledValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OverviewBlock {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub ctas: Vec<LinkItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactCardBlock {
    pub title: String,
    pub items: Vec<LabeledValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Thought {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtsBlock {
    pub title: String,
    pub subtitle: String,
    pub share_attribution: String,
    pub items: Vec<Thought>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimelineItem {
    pub id: String,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: TimelineKind,
    pub title: String,
    pub org: String,
    pub period: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceBlock {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<TimelineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuickFactsBlock {
    pub title: String,
    pub items: Vec<LabeledValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechSectionBlock {
    pub title: String,
    pub subtitle: String,
    pub quick_facts: QuickFactsBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub year: String,
    #[schema(value_type = String)]
    pub category: AchievementCategory,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AchievementsBlock {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutMeBlock {
    pub title: String,
    pub subtitle: String,
    pub strengths_title: String,
    pub strengths: Vec<String>,
    pub learning_title: String,
    pub learning: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSectionBlock {
    pub title: String,
    pub subtitle: String,
    pub card_title: String,
    pub primary_cta: LinkItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<LinkItem>,
    pub resume_title: String,
    pub resume_body: String,
    pub resume_cta: LinkItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavbarBlock {
    pub name: String,
    pub mobile_subtitle: String,
    pub desktop_subtitle: String,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleHintBlock {
    pub enabled: bool,
    pub console_title: String,
    pub commands_title: String,
    pub commands: Vec<String>,
    pub about: String,
    pub links: Vec<LinkItem>,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FooterBlock {
    pub right_text: String,
}

/// Fully populated content document.
///
/// Sections that only exist once an editor has created them (`thoughts`,
/// `experience`, `achievements`) stay `None` until then. Unknown top-level
/// keys are carried in `extra` and serialized back at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub slug: String,
    pub navbar: NavbarBlock,
    pub console_hint: ConsoleHintBlock,
    pub hero: HeroBlock,
    pub overview: OverviewBlock,
    pub contact_card: ContactCardBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<ThoughtsBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceBlock>,
    pub projects_section: SectionHeading,
    pub tech_section: TechSectionBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<AchievementsBlock>,
    pub about_me: AboutMeBlock,
    pub contact_section: ContactSectionBlock,
    pub footer: FooterBlock,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl ContentDocument {
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// The document as it should be handed to the store.
    pub fn to_storable(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut map = match self.to_value()? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        strip_server_fields(&mut map);
        Ok(map)
    }
}
