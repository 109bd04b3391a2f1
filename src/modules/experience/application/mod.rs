pub mod domain;
pub mod experience_use_cases;
pub mod ports;
pub mod service;

pub use experience_use_cases::ExperienceUseCases;
