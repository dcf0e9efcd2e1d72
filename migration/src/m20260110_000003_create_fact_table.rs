use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fact::Table)
                    .if_not_exists()
                    .col(pk_auto(Fact::Id))
                    .col(string(Fact::Text))
                    .col(string(Fact::Source))
                    .col(string(Fact::Category))
                    .col(integer(Fact::UserId))
                    .col(integer(Fact::VotesInteresting).default(0))
                    .col(integer(Fact::VotesMindBlowing).default(0))
                    .col(integer(Fact::VotesFalse).default(0))
                    .col(
                        timestamp_with_time_zone(Fact::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fact_user_id")
                            .from(Fact::Table, Fact::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fact_category_created_at")
                    .table(Fact::Table)
                    .col(Fact::Category)
                    .col(Fact::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fact_user_id_created_at")
                    .table(Fact::Table)
                    .col(Fact::UserId)
                    .col(Fact::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Fact {
    Table,
    Id,
    Text,
    Source,
    Category,
    UserId,
    VotesInteresting,
    VotesMindBlowing,
    VotesFalse,
    CreatedAt,
}
