//! Literal fallbacks for every section of the content document.

use super::document::{LinkItem, NavItem};

pub const OVERVIEW_TITLE: &str = "Overview";
pub const CONTACT_CARD_TITLE: &str = "Contact info";
pub const THOUGHTS_TITLE: &str = "Thought Generator";
pub const EXPERIENCE_TITLE: &str = "Experience";
pub const PROJECTS_TITLE: &str = "Projects";
pub const TECH_TITLE: &str = "Tech";
pub const QUICK_FACTS_TITLE: &str = "Quick facts";
pub const ACHIEVEMENTS_TITLE: &str = "About";
pub const ACHIEVEMENT_CATEGORY: &str = "milestone";
pub const TIMELINE_KIND: &str = "work";

pub const CONTACT_TITLE: &str = "Contact";
pub const PRIMARY_CTA_LABEL: &str = "Email me";
pub const RESUME_TITLE: &str = "Resume";
pub const RESUME_CTA_LABEL: &str = "Request resume";

pub const NAVBAR_NAME: &str = "Portfolio";

pub const CONSOLE_ENABLED: bool = true;
pub const CONSOLE_TITLE: &str = "site --help";
pub const CONSOLE_COMMANDS_TITLE: &str = "Commands:";
pub const CONSOLE_COMMANDS: [&str; 3] = [
    "- about: quick summary",
    "- links: social links",
    "- stack: current stack",
];

const NAV_ITEMS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("tech", "Tech Stack"),
    ("about", "About"),
    ("contact", "Contact"),
];

const CONSOLE_LINK_LABELS: [&str; 3] = ["github", "linkedin", "email"];

pub fn nav_items() -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .map(|(id, label)| NavItem::new(id, label))
        .collect()
}

pub fn console_commands() -> Vec<String> {
    CONSOLE_COMMANDS.iter().map(|c| c.to_string()).collect()
}

pub fn console_links() -> Vec<LinkItem> {
    CONSOLE_LINK_LABELS
        .iter()
        .map(|label| LinkItem::new(*label, ""))
        .collect()
}
