use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260110_000001_create_user_table::User, m20260110_000003_create_fact_table::Fact};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(pk_auto(Vote::Id))
                    .col(integer(Vote::UserId))
                    .col(integer(Vote::FactId))
                    .col(string(Vote::VoteType))
                    .col(
                        timestamp_with_time_zone(Vote::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_user_id")
                            .from(Vote::Table, Vote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_fact_id")
                            .from(Vote::Table, Vote::FactId)
                            .to(Fact::Table, Fact::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // One vote per user per fact
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_vote_user_fact_unique")
                            .col(Vote::UserId)
                            .col(Vote::FactId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vote_fact_id")
                    .table(Vote::Table)
                    .col(Vote::FactId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vote {
    Table,
    Id,
    UserId,
    FactId,
    VoteType,
    CreatedAt,
}
