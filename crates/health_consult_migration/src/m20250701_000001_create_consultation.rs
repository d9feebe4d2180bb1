use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Consultation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Consultation::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Consultation::UserMessage).text().not_null())
                    .col(ColumnDef::new(Consultation::AiResponse).text().not_null())
                    .col(ColumnDef::new(Consultation::Prescription).text())
                    .col(
                        ColumnDef::new(Consultation::CreatedAt)
                            .string()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 기록 목록은 항상 최신순으로 조회한다
        manager
            .create_index(
                Index::create()
                    .name("idx_consultation_created_at")
                    .table(Consultation::Table)
                    .col(Consultation::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Consultation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Consultation {
    Table,
    Id,
    UserMessage,
    AiResponse,
    Prescription,
    CreatedAt,
}
