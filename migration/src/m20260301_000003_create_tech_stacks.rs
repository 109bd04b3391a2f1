use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechStacks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechStacks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(TechStacks::Name).text().not_null())
                    .col(ColumnDef::new(TechStacks::Category).text().not_null())
                    .col(
                        ColumnDef::new(TechStacks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TechStacks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE tech_stacks
                ADD CONSTRAINT chk_tech_stacks_category
                CHECK (category IN ('languages', 'backend', 'frontend', 'tools', 'concepts'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_tech_stacks_updated_at
                BEFORE UPDATE ON tech_stacks
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_tech_stacks_updated_at ON tech_stacks")
            .await?;

        manager
            .drop_table(Table::drop().table(TechStacks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TechStacks {
    Table,
    Id,
    Name,
    Category,
    CreatedAt,
    UpdatedAt,
}
