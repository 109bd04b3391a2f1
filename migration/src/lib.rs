pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_portfolio_content;
mod m20260301_000002_create_projects;
mod m20260301_000003_create_tech_stacks;
mod m20260301_000004_create_experiences;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_portfolio_content::Migration),
            Box::new(m20260301_000002_create_projects::Migration),
            Box::new(m20260301_000003_create_tech_stacks::Migration),
            Box::new(m20260301_000004_create_experiences::Migration),
        ]
    }
}
