pub mod auth;
pub mod content;
pub mod experience;
pub mod portfolio;
pub mod project;
pub mod seed;
pub mod tech_stack;
