use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    /// Either `user` or `admin`.
    pub role: String,
    #[sea_orm(nullable)]
    pub avatar_url: Option<String>,
    /// Soft-delete flag; inactive users cannot log in.
    pub active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fact::Entity")]
    Fact,
    #[sea_orm(has_many = "super::vote::Entity")]
    Vote,
}

impl Related<super::fact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fact.def()
    }
}

impl Related<super::vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
