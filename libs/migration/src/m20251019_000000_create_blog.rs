use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    // BIGSERIAL: ids come from a sequence and are never reused
                    .col(
                        ColumnDef::new(Blog::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(text(Blog::Title))
                    .col(text(Blog::Content).default(""))
                    .col(text(Blog::Category).default(""))
                    .col(boolean(Blog::IsPublished).default(true))
                    .col(text(Blog::FeaturedImage).default(""))
                    .col(
                        timestamp_with_time_zone(Blog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_created_at")
                    .table(Blog::Table)
                    .col(Blog::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blog::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blog {
    Table,
    Id,
    Title,
    Content,
    Category,
    IsPublished,
    FeaturedImage,
    CreatedAt,
}
