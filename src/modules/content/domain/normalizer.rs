//! Total normalization of a loosely shaped content document.
//!
//! Any JSON value is accepted. Wrong-typed fields count as absent and take
//! the section default. Pair lists drop entries where both sides are
//! empty. Identified items keep a non-empty string id or get a fresh one.

use serde_json::{Map, Value};

use super::defaults;
use super::document::{
    AboutMeBlock, Achievement, AchievementsBlock, ConsoleHintBlock, ContactCardBlock,
    ContactSectionBlock, ContentDocument, ExperienceBlock, FooterBlock, HeroBlock,
    LabeledValue, LinkItem, NavItem, NavbarBlock, OverviewBlock, QuickFactsBlock,
    SectionHeading, TechSectionBlock, Thought, ThoughtsBlock, TimelineItem, CONTENT_SLUG,
    KNOWN_FIELDS,
};
use super::item_id::{ItemIdGenerator, ItemKind, RandomItemIds};

/// Read-only view over an optional JSON object.
#[derive(Clone, Copy)]
struct Fields<'a>(Option<&'a Map<String, Value>>);

impl<'a> Fields<'a> {
    fn of(value: Option<&'a Value>) -> Self {
        Self(value.and_then(Value::as_object))
    }

    fn get(self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key))
    }

    fn section(self, key: &str) -> Fields<'a> {
        Fields::of(self.get(key))
    }

    /// Only yields a view when the key holds an object.
    fn present_section(self, key: &str) -> Option<Fields<'a>> {
        self.get(key)
            .and_then(Value::as_object)
            .map(|map| Fields(Some(map)))
    }

    fn str(self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    fn string(self, key: &str, default: &str) -> String {
        self.str(key).unwrap_or(default).to_string()
    }

    fn non_empty_string(self, key: &str) -> Option<String> {
        self.str(key)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    fn flag(self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    fn list(self, key: &str) -> Option<&'a Vec<Value>> {
        self.get(key).and_then(Value::as_array)
    }

    /// Object elements of a list; everything else is skipped.
    fn objects(self, key: &str) -> impl Iterator<Item = Fields<'a>> + 'a {
        self.list(key)
            .into_iter()
            .flatten()
            .filter_map(|item| item.as_object().map(|map| Fields(Some(map))))
    }

    fn strings(self, key: &str) -> Option<Vec<String>> {
        self.list(key).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    fn links(self, key: &str) -> Option<Vec<LinkItem>> {
        self.list(key)?;
        Some(
            self.objects(key)
                .map(|item| LinkItem::new(item.string("label", ""), item.string("href", "")))
                .filter(|link| !link.is_blank())
                .collect(),
        )
    }

    fn labeled_values(self, key: &str) -> Option<Vec<LabeledValue>> {
        self.list(key)?;
        Some(
            self.objects(key)
                .map(|item| LabeledValue::new(item.string("label", ""), item.string("value", "")))
                .filter(|pair| !pair.is_blank())
                .collect(),
        )
    }

    fn heading(self, default_title: &str) -> SectionHeading {
        SectionHeading {
            title: self.string("title", default_title),
            subtitle: self.string("subtitle", ""),
        }
    }

    fn link_or(self, key: &str, default_label: &str) -> LinkItem {
        let link = self.section(key);
        LinkItem::new(link.string("label", default_label), link.string("href", ""))
    }
}

pub struct ContentNormalizer<G = RandomItemIds> {
    ids: G,
}

impl ContentNormalizer<RandomItemIds> {
    pub fn new() -> Self {
        Self { ids: RandomItemIds }
    }
}

impl Default for ContentNormalizer<RandomItemIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: ItemIdGenerator> ContentNormalizer<G> {
    pub fn with_id_generator(ids: G) -> Self {
        Self { ids }
    }

    pub fn normalize(&self, raw: &Value) -> ContentDocument {
        let root = Fields::of(Some(raw));

        ContentDocument {
            slug: CONTENT_SLUG.to_string(),
            navbar: navbar(root.section("navbar")),
            console_hint: console_hint(root.section("consoleHint")),
            hero: hero(root.section("hero")),
            overview: overview(root.section("overview")),
            contact_card: contact_card(root.section("contactCard")),
            thoughts: root
                .present_section("thoughts")
                .map(|section| self.thoughts(section)),
            experience: root
                .present_section("experience")
                .map(|section| self.experience(section)),
            projects_section: root.section("projectsSection").heading(defaults::PROJECTS_TITLE),
            tech_section: tech_section(root.section("techSection")),
            achievements: root
                .present_section("achievements")
                .map(|section| self.achievements(section)),
            about_me: about_me(root.section("aboutMe")),
            contact_section: contact_section(root.section("contactSection")),
            footer: FooterBlock {
                right_text: root.section("footer").string("rightText", ""),
            },
            extra: passthrough_fields(raw),
        }
    }

    fn item_id(&self, item: Fields<'_>, kind: ItemKind) -> String {
        item.non_empty_string("id")
            .unwrap_or_else(|| self.ids.next_id(kind))
    }

    fn thoughts(&self, section: Fields<'_>) -> ThoughtsBlock {
        let heading = section.heading(defaults::THOUGHTS_TITLE);
        ThoughtsBlock {
            title: heading.title,
            subtitle: heading.subtitle,
            share_attribution: section.string("shareAttribution", ""),
            items: section
                .objects("items")
                .map(|item| Thought {
                    id: self.item_id(item, ItemKind::Thought),
                    text: item.string("text", ""),
                })
                .collect(),
        }
    }

    fn experience(&self, section: Fields<'_>) -> ExperienceBlock {
        let heading = section.heading(defaults::EXPERIENCE_TITLE);
        ExperienceBlock {
            title: heading.title,
            subtitle: heading.subtitle,
            items: section
                .objects("items")
                .map(|item| TimelineItem {
                    id: self.item_id(item, ItemKind::Timeline),
                    kind: item.string("type", defaults::TIMELINE_KIND).into(),
                    title: item.string("title", ""),
                    org: item.string("org", ""),
                    period: item.string("period", ""),
                    summary: item.string("summary", ""),
                    highlights: item.strings("highlights").unwrap_or_default(),
                    tags: item.strings("tags").unwrap_or_default(),
                    links: item.links("links").unwrap_or_default(),
                })
                .collect(),
        }
    }

    fn achievements(&self, section: Fields<'_>) -> AchievementsBlock {
        let heading = section.heading(defaults::ACHIEVEMENTS_TITLE);
        AchievementsBlock {
            title: heading.title,
            subtitle: heading.subtitle,
            items: section
                .objects("items")
                .map(|item| Achievement {
                    id: self.item_id(item, ItemKind::Achievement),
                    title: item.string("title", ""),
                    year: item.string("year", ""),
                    category: item
                        .string("category", defaults::ACHIEVEMENT_CATEGORY)
                        .into(),
                    description: item.string("description", ""),
                })
                .collect(),
        }
    }
}

/// Normalizes with randomly generated item ids.
pub fn normalize_content(raw: &Value) -> ContentDocument {
    ContentNormalizer::new().normalize(raw)
}

fn passthrough_fields(raw: &Value) -> Map<String, Value> {
    raw.as_object()
        .map(|map| {
            map.iter()
                .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}

fn navbar(section: Fields<'_>) -> NavbarBlock {
    let items: Vec<NavItem> = section
        .objects("items")
        .map(|item| NavItem {
            id: item.string("id", ""),
            label: item.string("label", ""),
        })
        .filter(|item| !item.id.is_empty() && !item.label.is_empty())
        .collect();

    NavbarBlock {
        name: section.string("name", defaults::NAVBAR_NAME),
        mobile_subtitle: section.string("mobileSubtitle", ""),
        desktop_subtitle: section.string("desktopSubtitle", ""),
        items: if items.is_empty() {
            defaults::nav_items()
        } else {
            items
        },
    }
}

fn console_hint(section: Fields<'_>) -> ConsoleHintBlock {
    ConsoleHintBlock {
        enabled: section.flag("enabled", defaults::CONSOLE_ENABLED),
        console_title: section.string("consoleTitle", defaults::CONSOLE_TITLE),
        commands_title: section.string("commandsTitle", defaults::CONSOLE_COMMANDS_TITLE),
        commands: section
            .strings("commands")
            .unwrap_or_else(defaults::console_commands),
        about: section.string("about", ""),
        links: section
            .links("links")
            .unwrap_or_else(defaults::console_links),
        stack: section.strings("stack").unwrap_or_default(),
    }
}

fn hero(section: Fields<'_>) -> HeroBlock {
    HeroBlock {
        name: section.string("name", ""),
        headline: section.string("headline", ""),
        subheadline: section.string("subheadline", ""),
        meta_line: section.string("metaLine", ""),
        avatar_alt: section.string("avatarAlt", ""),
        github_username: section.string("githubUsername", ""),
        links: section.links("links").unwrap_or_default(),
        stats: section.labeled_values("stats").unwrap_or_default(),
    }
}

fn overview(section: Fields<'_>) -> OverviewBlock {
    OverviewBlock {
        title: section.string("title", defaults::OVERVIEW_TITLE),
        paragraphs: section.strings("paragraphs").unwrap_or_default(),
        ctas: section.links("ctas").unwrap_or_default(),
    }
}

fn contact_card(section: Fields<'_>) -> ContactCardBlock {
    ContactCardBlock {
        title: section.string("title", defaults::CONTACT_CARD_TITLE),
        items: section.labeled_values("items").unwrap_or_default(),
    }
}

fn tech_section(section: Fields<'_>) -> TechSectionBlock {
    let heading = section.heading(defaults::TECH_TITLE);
    let quick_facts = section.section("quickFacts");

    TechSectionBlock {
        title: heading.title,
        subtitle: heading.subtitle,
        quick_facts: QuickFactsBlock {
            title: quick_facts
                .non_empty_string("title")
                .unwrap_or_else(|| defaults::QUICK_FACTS_TITLE.to_string()),
            items: quick_facts.labeled_values("items").unwrap_or_default(),
        },
    }
}

fn about_me(section: Fields<'_>) -> AboutMeBlock {
    AboutMeBlock {
        title: section.string("title", ""),
        subtitle: section.string("subtitle", ""),
        strengths_title: section.string("strengthsTitle", ""),
        strengths: section.strings("strengths").unwrap_or_default(),
        learning_title: section.string("learningTitle", ""),
        learning: section.strings("learning").unwrap_or_default(),
    }
}

fn contact_section(section: Fields<'_>) -> ContactSectionBlock {
    let heading = section.heading(defaults::CONTACT_TITLE);
    let secondary = section.present_section("secondaryCta").filter(|cta| {
        cta.str("label").is_some() || cta.str("href").is_some()
    });

    ContactSectionBlock {
        card_title: section.string("cardTitle", &heading.title),
        title: heading.title,
        subtitle: heading.subtitle,
        primary_cta: section.link_or("primaryCta", defaults::PRIMARY_CTA_LABEL),
        secondary_cta: secondary
            .map(|cta| LinkItem::new(cta.string("label", ""), cta.string("href", ""))),
        resume_title: section.string("resumeTitle", defaults::RESUME_TITLE),
        resume_body: section.string("resumeBody", ""),
        resume_cta: section.link_or("resumeCta", defaults::RESUME_CTA_LABEL),
    }
}
