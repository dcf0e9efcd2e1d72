//! Fact data repository.
//!
//! Reads join each fact with its owner so the public profile can be attached
//! without a second query. The viewing user's vote is filled in by the service
//! from the vote repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Order},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
    Statement,
};

use crate::server::model::{
    fact::{CategoryStats, CreateFactParams, Fact, UpdateFactParams},
    query::{Comparison, FactQuery, SortField},
    vote::{VoteTransition, VoteType},
};

const CATEGORY_STATS_SQL: &str = "SELECT category, \
    COUNT(id) AS num_facts, \
    AVG(votes_interesting) AS avg_interesting, \
    AVG(votes_mind_blowing) AS avg_mind_blowing, \
    AVG(votes_false) AS avg_false \
    FROM fact GROUP BY category ORDER BY num_facts DESC, category ASC";

fn counter_column(vote_type: VoteType) -> entity::fact::Column {
    match vote_type {
        VoteType::Interesting => entity::fact::Column::VotesInteresting,
        VoteType::MindBlowing => entity::fact::Column::VotesMindBlowing,
        VoteType::False => entity::fact::Column::VotesFalse,
    }
}

fn increment(vote_type: VoteType) -> Expr {
    Expr::col(counter_column(vote_type)).add(1)
}

/// `CASE WHEN c > 0 THEN c - 1 ELSE 0 END`
fn decrement(vote_type: VoteType) -> Expr {
    let column = counter_column(vote_type);
    Expr::case(Expr::col(column).gt(0), Expr::col(column).sub(1))
        .finally(0)
        .into()
}

fn sort_column(field: SortField) -> entity::fact::Column {
    match field {
        SortField::CreatedAt => entity::fact::Column::CreatedAt,
        SortField::Counter(vote_type) => counter_column(vote_type),
        SortField::Text => entity::fact::Column::Text,
        SortField::Category => entity::fact::Column::Category,
    }
}

fn into_facts(rows: Vec<(entity::fact::Model, Option<entity::user::Model>)>) -> Vec<Fact> {
    rows.into_iter()
        .map(|(fact, owner)| Fact::from_entity(fact, owner))
        .collect()
}

pub struct FactRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FactRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a fact with zeroed counters and returns it with its owner.
    pub async fn create(&self, params: CreateFactParams) -> Result<Fact, DbErr> {
        let fact = entity::fact::ActiveModel {
            text: ActiveValue::Set(params.text),
            source: ActiveValue::Set(params.source),
            category: ActiveValue::Set(params.category),
            user_id: ActiveValue::Set(params.user_id),
            votes_interesting: ActiveValue::Set(0),
            votes_mind_blowing: ActiveValue::Set(0),
            votes_false: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(fact.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Fact with id {} not found after creation",
            fact.id
        )))
    }

    /// Finds a fact with its owner's profile.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Fact>, DbErr> {
        let row = entity::prelude::Fact::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(fact, owner)| Fact::from_entity(fact, owner)))
    }

    /// Gets one page of facts matching the query.
    ///
    /// Sort keys are applied in order, followed by `id` descending so rows with
    /// equal keys keep a stable order across pages.
    pub async fn list(&self, query: &FactQuery) -> Result<Vec<Fact>, DbErr> {
        let mut condition = Condition::all();

        if let Some(category) = &query.category {
            condition = condition.add(entity::fact::Column::Category.eq(category.as_str()));
        }

        for filter in &query.counters {
            let column = counter_column(filter.counter);
            condition = condition.add(match filter.comparison {
                Comparison::Eq => column.eq(filter.value),
                Comparison::Gte => column.gte(filter.value),
                Comparison::Gt => column.gt(filter.value),
                Comparison::Lte => column.lte(filter.value),
                Comparison::Lt => column.lt(filter.value),
            });
        }

        let mut select = entity::prelude::Fact::find().filter(condition);

        for key in &query.sort {
            let order = if key.descending {
                Order::Desc
            } else {
                Order::Asc
            };
            select = select.order_by(sort_column(key.field), order);
        }

        let rows = select
            .order_by_desc(entity::fact::Column::Id)
            .offset(query.pagination.offset())
            .limit(query.pagination.limit)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(into_facts(rows))
    }

    /// Gets all facts submitted by a user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Fact>, DbErr> {
        let rows = entity::prelude::Fact::find()
            .filter(entity::fact::Column::UserId.eq(user_id))
            .order_by_desc(entity::fact::Column::CreatedAt)
            .order_by_desc(entity::fact::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(into_facts(rows))
    }

    /// Gets the facts with the given ids, newest first. Missing ids are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Fact>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Fact::find()
            .filter(entity::fact::Column::Id.is_in(ids.iter().copied()))
            .order_by_desc(entity::fact::Column::CreatedAt)
            .order_by_desc(entity::fact::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(into_facts(rows))
    }

    /// Ids of all facts owned by a user.
    pub async fn get_ids_by_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let facts = entity::prelude::Fact::find()
            .filter(entity::fact::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(facts.into_iter().map(|f| f.id).collect())
    }

    /// Updates text, source and/or category.
    /// Returns None if the fact doesn't exist
    pub async fn update(&self, params: UpdateFactParams) -> Result<Option<Fact>, DbErr> {
        let Some(existing) = entity::prelude::Fact::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::fact::ActiveModel = existing.into();
        if let Some(text) = params.text {
            active_model.text = ActiveValue::Set(text);
        }
        if let Some(source) = params.source {
            active_model.source = ActiveValue::Set(source);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category);
        }

        if active_model.is_changed() {
            active_model.update(self.db).await?;
        }

        self.find_by_id(params.id).await
    }

    /// Takes the write lock on the database for the rest of the transaction
    /// with a no-op update of the fact row.
    ///
    /// Run first in a transaction that reads before it writes, so concurrent
    /// writers queue on the busy timeout instead of failing to upgrade a read
    /// lock. Returns false if the fact doesn't exist.
    pub async fn lock(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Fact::update_many()
            .filter(entity::fact::Column::Id.eq(id))
            .col_expr(
                entity::fact::Column::VotesFalse,
                Expr::col(entity::fact::Column::VotesFalse),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves the fact's counters by a vote transition in SQL, relative to the
    /// stored values. Decrements stop at zero.
    ///
    /// Returns false if the fact doesn't exist.
    pub async fn apply_vote(&self, id: i32, transition: VoteTransition) -> Result<bool, DbErr> {
        let update = entity::prelude::Fact::update_many().filter(entity::fact::Column::Id.eq(id));

        let update = match transition {
            VoteTransition::Cast(t) => update.col_expr(counter_column(t), increment(t)),
            VoteTransition::Retract(t) => update.col_expr(counter_column(t), decrement(t)),
            VoteTransition::Switch { from, to } => update
                .col_expr(counter_column(from), decrement(from))
                .col_expr(counter_column(to), increment(to)),
        };

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Points every fact in category `from` at category `to`.
    pub async fn rename_category(&self, from: &str, to: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Fact::update_many()
            .filter(entity::fact::Column::Category.eq(from))
            .col_expr(entity::fact::Column::Category, Expr::value(to))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a single fact. Its votes must be removed by the caller first.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Fact::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every fact owned by a user.
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Fact::delete_many()
            .filter(entity::fact::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Per-category fact counts and average counters, largest category first.
    pub async fn stats(&self) -> Result<Vec<CategoryStats>, DbErr> {
        CategoryStats::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            CATEGORY_STATS_SQL,
        ))
        .all(self.db)
        .await
    }
}
