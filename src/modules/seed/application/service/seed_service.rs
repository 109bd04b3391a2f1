use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::domain::{ContentNormalizer, CONTENT_SLUG};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::seed::application::domain::seed_data;
use crate::modules::seed::application::ports::incoming::use_cases::{
    SeedCounts, SeedError, SeedPortfolioUseCase, SeedReport,
};
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepository;

fn repo_err(e: impl std::fmt::Display) -> SeedError {
    SeedError::RepositoryError(e.to_string())
}

pub struct SeedService<C, P, T, E>
where
    C: ContentRepository,
    P: ProjectRepository,
    T: TechStackRepository,
    E: ExperienceRepository,
{
    content: C,
    projects: P,
    tech_stacks: T,
    experiences: E,
    normalizer: ContentNormalizer,
}

impl<C, P, T, E> SeedService<C, P, T, E>
where
    C: ContentRepository,
    P: ProjectRepository,
    T: TechStackRepository,
    E: ExperienceRepository,
{
    pub fn new(content: C, projects: P, tech_stacks: T, experiences: E) -> Self {
        Self {
            content,
            projects,
            tech_stacks,
            experiences,
            normalizer: ContentNormalizer::new(),
        }
    }

    async fn existing(&self) -> Result<SeedCounts, SeedError> {
        let content = self.content.load(CONTENT_SLUG).await.map_err(repo_err)?;

        Ok(SeedCounts {
            content: u64::from(content.is_some()),
            projects: self.projects.count().await.map_err(repo_err)?,
            tech_stacks: self.tech_stacks.count().await.map_err(repo_err)?,
            experiences: self.experiences.count().await.map_err(repo_err)?,
        })
    }

    async fn seed_content(&self) -> Result<u64, SeedError> {
        let document = self
            .normalizer
            .normalize(&seed_data::default_content())
            .to_storable()
            .map_err(repo_err)?;

        self.content
            .upsert(CONTENT_SLUG, document)
            .await
            .map_err(repo_err)?;
        Ok(1)
    }
}

#[async_trait]
impl<C, P, T, E> SeedPortfolioUseCase for SeedService<C, P, T, E>
where
    C: ContentRepository,
    P: ProjectRepository,
    T: TechStackRepository,
    E: ExperienceRepository,
{
    async fn execute(&self, force: bool) -> Result<SeedReport, SeedError> {
        let existing = self.existing().await?;

        if !force && !existing.is_empty() {
            warn!(?existing, "Seed refused, data already present");
            return Err(SeedError::AlreadySeeded(existing));
        }

        let mut inserted = SeedCounts {
            content: self.seed_content().await?,
            ..Default::default()
        };

        if force {
            self.projects.delete_all().await.map_err(repo_err)?;
        }
        if force || existing.projects == 0 {
            inserted.projects = self
                .projects
                .insert_many(seed_data::default_projects())
                .await
                .map_err(repo_err)?;
        }

        if force {
            self.tech_stacks.delete_all().await.map_err(repo_err)?;
        }
        if force || existing.tech_stacks == 0 {
            inserted.tech_stacks = self
                .tech_stacks
                .insert_many(seed_data::default_tech_stacks())
                .await
                .map_err(repo_err)?;
        }

        if force {
            self.experiences.delete_all().await.map_err(repo_err)?;
        }
        if force || existing.experiences == 0 {
            inserted.experiences = self
                .experiences
                .insert_many(seed_data::default_experiences())
                .await
                .map_err(repo_err)?;
        }

        info!(force, ?inserted, "Portfolio seeded");

        Ok(SeedReport {
            ok: true,
            seeded_at: Utc::now(),
            inserted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{Map, Value};
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::modules::content::application::ports::outgoing::{
        ContentRepositoryError, ContentSaved, StoredContent,
    };
    use crate::modules::experience::application::domain::entities::{
        Experience, ExperiencePatch, NewExperience,
    };
    use crate::modules::experience::application::ports::outgoing::ExperienceRepositoryError;
    use crate::modules::project::application::domain::entities::{
        NewProject, Project, ProjectPatch,
    };
    use crate::modules::project::application::ports::outgoing::ProjectRepositoryError;
    use crate::modules::tech_stack::application::domain::entities::{
        NewTechStack, TechStack, TechStackPatch,
    };
    use crate::modules::tech_stack::application::ports::outgoing::TechStackRepositoryError;

    /* --------------------------------------------------
     * Counting fakes
     * -------------------------------------------------- */

    #[derive(Default)]
    struct FakeContent {
        stored: Mutex<Option<Map<String, Value>>>,
    }

    #[async_trait]
    impl ContentRepository for FakeContent {
        async fn load(&self, _slug: &str) -> Result<Option<StoredContent>, ContentRepositoryError> {
            Ok(self.stored.lock().unwrap().clone().map(|doc| StoredContent {
                document: Value::Object(doc),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        }

        async fn upsert(
            &self,
            slug: &str,
            document: Map<String, Value>,
        ) -> Result<ContentSaved, ContentRepositoryError> {
            *self.stored.lock().unwrap() = Some(document);
            Ok(ContentSaved {
                slug: slug.to_string(),
                updated_at: Utc::now(),
            })
        }
    }

    /// Tracks only a row count; the seed never reads rows back.
    #[derive(Default)]
    struct FakeRows {
        rows: Mutex<u64>,
        deletes: Mutex<u32>,
    }

    impl FakeRows {
        fn with_rows(n: u64) -> Self {
            Self {
                rows: Mutex::new(n),
                deletes: Mutex::new(0),
            }
        }

        fn rows(&self) -> u64 {
            *self.rows.lock().unwrap()
        }

        fn clear(&self) -> u64 {
            *self.deletes.lock().unwrap() += 1;
            std::mem::take(&mut *self.rows.lock().unwrap())
        }

        fn add(&self, n: usize) -> u64 {
            *self.rows.lock().unwrap() += n as u64;
            n as u64
        }
    }

    #[async_trait]
    impl ProjectRepository for FakeRows {
        async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
            Ok(vec![])
        }
        async fn create(&self, _p: NewProject) -> Result<Project, ProjectRepositoryError> {
            Err(ProjectRepositoryError::DatabaseError("unused".into()))
        }
        async fn update(&self, _id: Uuid, _p: ProjectPatch) -> Result<Project, ProjectRepositoryError> {
            Err(ProjectRepositoryError::NotFound)
        }
        async fn delete(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
            Err(ProjectRepositoryError::NotFound)
        }
        async fn count(&self) -> Result<u64, ProjectRepositoryError> {
            Ok(self.rows())
        }
        async fn delete_all(&self) -> Result<u64, ProjectRepositoryError> {
            Ok(self.clear())
        }
        async fn insert_many(&self, p: Vec<NewProject>) -> Result<u64, ProjectRepositoryError> {
            Ok(self.add(p.len()))
        }
    }

    #[async_trait]
    impl TechStackRepository for FakeRows {
        async fn list(&self) -> Result<Vec<TechStack>, TechStackRepositoryError> {
            Ok(vec![])
        }
        async fn create(&self, _t: NewTechStack) -> Result<TechStack, TechStackRepositoryError> {
            Err(TechStackRepositoryError::DatabaseError("unused".into()))
        }
        async fn update(
            &self,
            _id: Uuid,
            _p: TechStackPatch,
        ) -> Result<TechStack, TechStackRepositoryError> {
            Err(TechStackRepositoryError::NotFound)
        }
        async fn delete(&self, _id: Uuid) -> Result<(), TechStackRepositoryError> {
            Err(TechStackRepositoryError::NotFound)
        }
        async fn count(&self) -> Result<u64, TechStackRepositoryError> {
            Ok(self.rows())
        }
        async fn delete_all(&self) -> Result<u64, TechStackRepositoryError> {
            Ok(self.clear())
        }
        async fn insert_many(&self, t: Vec<NewTechStack>) -> Result<u64, TechStackRepositoryError> {
            Ok(self.add(t.len()))
        }
    }

    #[async_trait]
    impl ExperienceRepository for FakeRows {
        async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
            Ok(vec![])
        }
        async fn create(&self, _e: NewExperience) -> Result<Experience, ExperienceRepositoryError> {
            Err(ExperienceRepositoryError::DatabaseError("unused".into()))
        }
        async fn update(
            &self,
            _id: Uuid,
            _p: ExperiencePatch,
        ) -> Result<Experience, ExperienceRepositoryError> {
            Err(ExperienceRepositoryError::NotFound)
        }
        async fn delete(&self, _id: Uuid) -> Result<(), ExperienceRepositoryError> {
            Err(ExperienceRepositoryError::NotFound)
        }
        async fn count(&self) -> Result<u64, ExperienceRepositoryError> {
            Ok(self.rows())
        }
        async fn delete_all(&self) -> Result<u64, ExperienceRepositoryError> {
            Ok(self.clear())
        }
        async fn insert_many(
            &self,
            e: Vec<NewExperience>,
        ) -> Result<u64, ExperienceRepositoryError> {
            Ok(self.add(e.len()))
        }
    }

    type Service = SeedService<FakeContent, FakeRows, FakeRows, FakeRows>;

    fn service(projects: u64, techs: u64, experiences: u64) -> Service {
        SeedService::new(
            FakeContent::default(),
            FakeRows::with_rows(projects),
            FakeRows::with_rows(techs),
            FakeRows::with_rows(experiences),
        )
    }

    #[tokio::test]
    async fn seeds_empty_store() {
        let svc = service(0, 0, 0);

        let report = svc.execute(false).await.unwrap();

        assert!(report.ok);
        assert_eq!(report.inserted.content, 1);
        assert_eq!(report.inserted.projects, seed_data::default_projects().len() as u64);
        assert_eq!(
            report.inserted.tech_stacks,
            seed_data::default_tech_stacks().len() as u64
        );
        assert_eq!(
            report.inserted.experiences,
            seed_data::default_experiences().len() as u64
        );

        let stored = svc.content.stored.lock().unwrap().clone().unwrap();
        assert_eq!(stored["slug"], "default");
        assert!(stored.get("createdAt").is_none());
    }

    #[tokio::test]
    async fn refuses_when_anything_exists() {
        let svc = service(0, 3, 0);

        let err = svc.execute(false).await.unwrap_err();

        assert_eq!(
            err,
            SeedError::AlreadySeeded(SeedCounts {
                content: 0,
                projects: 0,
                tech_stacks: 3,
                experiences: 0,
            })
        );
        assert!(svc.content.stored.lock().unwrap().is_none());
        assert_eq!(svc.tech_stacks.rows(), 3);
    }

    #[tokio::test]
    async fn second_seed_without_force_reports_content() {
        let svc = service(0, 0, 0);
        svc.execute(false).await.unwrap();

        match svc.execute(false).await.unwrap_err() {
            SeedError::AlreadySeeded(counts) => assert_eq!(counts.content, 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn force_replaces_every_collection() {
        let svc = service(7, 2, 5);

        let report = svc.execute(true).await.unwrap();

        assert_eq!(report.inserted.projects, seed_data::default_projects().len() as u64);
        assert_eq!(
            svc.projects.rows(),
            seed_data::default_projects().len() as u64
        );
        assert_eq!(*svc.projects.deletes.lock().unwrap(), 1);
        assert_eq!(*svc.experiences.deletes.lock().unwrap(), 1);
    }
}
