//! Placeholder portfolio written by the seed endpoint.
//!
//! Everything here is generic sample text meant to be replaced from the
//! admin editor.

use serde_json::{json, Value};

use crate::modules::content::domain::document::LinkItem;
use crate::modules::experience::application::domain::entities::{ExperienceType, NewExperience};
use crate::modules::project::application::domain::entities::NewProject;
use crate::modules::tech_stack::application::domain::entities::{NewTechStack, TechCategory};

/// Raw content document; it still goes through the normalizer before storage.
pub fn default_content() -> Value {
    json!({
        "navbar": {
            "name": "Your Name",
            "mobileSubtitle": "Software engineer",
            "desktopSubtitle": "Software engineer building reliable systems"
        },
        "consoleHint": {
            "about": "Type a command to explore this portfolio.",
            "stack": ["Rust", "PostgreSQL", "TypeScript"]
        },
        "hero": {
            "name": "Your Name",
            "headline": "Software engineer",
            "subheadline": "I design and ship backend services and the tools around them.",
            "metaLine": "Based somewhere on Earth",
            "avatarAlt": "Portrait",
            "githubUsername": "your-github",
            "links": [
                { "label": "GitHub", "href": "https://github.com/your-github" },
                { "label": "Email", "href": "mailto:you@example.com" }
            ],
            "stats": [
                { "label": "Years building software", "value": "5+" },
                { "label": "Projects shipped", "value": "10+" }
            ]
        },
        "overview": {
            "paragraphs": [
                "A short introduction about who you are and what you work on.",
                "A second paragraph about what you are looking for next."
            ],
            "ctas": [
                { "label": "See projects", "href": "#projects" },
                { "label": "Get in touch", "href": "#contact" }
            ]
        },
        "contactCard": {
            "items": [
                { "label": "Email", "value": "you@example.com" },
                { "label": "Location", "value": "Remote" }
            ]
        },
        "thoughts": {
            "subtitle": "Small notes collected along the way.",
            "shareAttribution": "Your Name",
            "items": [
                { "text": "Make it work, then make it clear." },
                { "text": "Small changes ship faster." }
            ]
        },
        "projectsSection": {
            "subtitle": "Selected work"
        },
        "techSection": {
            "subtitle": "Tools used day to day",
            "quickFacts": {
                "items": [
                    { "label": "Focus", "value": "Backend" },
                    { "label": "Favourite language", "value": "Rust" }
                ]
            }
        },
        "achievements": {
            "subtitle": "Milestones",
            "items": [
                {
                    "title": "First production release",
                    "year": "2020",
                    "category": "milestone",
                    "description": "Shipped a first service to real users."
                }
            ]
        },
        "aboutMe": {
            "title": "About me",
            "subtitle": "Beyond the code",
            "strengthsTitle": "Strengths",
            "strengths": ["System design", "Clear writing"],
            "learningTitle": "Currently learning",
            "learning": ["Distributed tracing"]
        },
        "contactSection": {
            "subtitle": "Open to new opportunities.",
            "cardTitle": "Say hello",
            "primaryCta": { "label": "Email me", "href": "mailto:you@example.com" },
            "resumeBody": "A resume is available on request."
        },
        "footer": {
            "rightText": "Built with Rust"
        }
    })
}

pub fn default_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "Portfolio CMS".to_string(),
            description: "Content service behind this site.".to_string(),
            long_description: Some(
                "A small HTTP service that stores the site content as one JSON document \
                 and exposes admin editing behind a session token."
                    .to_string(),
            ),
            role: Some("Author".to_string()),
            technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            demo_url: None,
            github_url: Some("https://github.com/your-github/portfolio".to_string()),
            image_url: None,
            highlights: vec!["Single-document content model".to_string()],
        },
        NewProject {
            title: "Command-line tool".to_string(),
            description: "A utility that automates a repetitive task.".to_string(),
            long_description: None,
            role: None,
            technologies: vec!["Rust".to_string()],
            demo_url: None,
            github_url: None,
            image_url: None,
            highlights: vec![],
        },
    ]
}

pub fn default_tech_stacks() -> Vec<NewTechStack> {
    [
        ("Rust", TechCategory::Languages),
        ("TypeScript", TechCategory::Languages),
        ("actix-web", TechCategory::Backend),
        ("PostgreSQL", TechCategory::Backend),
        ("React", TechCategory::Frontend),
        ("Git", TechCategory::Tools),
        ("Docker", TechCategory::Tools),
        ("Hexagonal architecture", TechCategory::Concepts),
    ]
    .into_iter()
    .map(|(name, category)| NewTechStack {
        name: name.to_string(),
        category,
    })
    .collect()
}

pub fn default_experiences() -> Vec<NewExperience> {
    vec![
        NewExperience {
            kind: ExperienceType::Work,
            title: "Software Engineer".to_string(),
            org: "Example Company".to_string(),
            period: "2021 - Present".to_string(),
            summary: "Builds and operates backend services.".to_string(),
            highlights: vec!["Owned the public API".to_string()],
            tags: vec!["rust".to_string(), "postgres".to_string()],
            links: vec![],
        },
        NewExperience {
            kind: ExperienceType::Leadership,
            title: "Meetup Organizer".to_string(),
            org: "Local Developer Group".to_string(),
            period: "2019 - 2021".to_string(),
            summary: "Ran monthly talks for local developers.".to_string(),
            highlights: vec![],
            tags: vec!["community".to_string()],
            links: vec![LinkItem::new("Group page", "https://example.com/meetup")],
        },
    ]
}
