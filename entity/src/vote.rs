use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "user_fact")]
    pub user_id: i32,
    #[sea_orm(unique_key = "user_fact")]
    pub fact_id: i32,
    /// One of `votesInteresting`, `votesMindBlowing` or `votesFalse`.
    pub vote_type: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::fact::Entity",
        from = "Column::FactId",
        to = "super::fact::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Fact,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::fact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fact.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
