use super::*;
use crate::{
    model::category::UpdateCategoryDto,
    server::{
        model::{category::UpdateCategoryParams, query::FactQuery},
        service::{category::CategoryService, fact::FactService},
    },
};

/// Tests renaming a category that has facts.
///
/// Expected: facts follow the new name
#[tokio::test]
async fn rename_moves_facts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db, "society").await?;
    let user = factory::create_user(db).await?;
    let fact = factory::fact::FactFactory::new(db, user.id)
        .category("society")
        .build()
        .await?;

    let params = UpdateCategoryParams::from_dto(
        category.id,
        UpdateCategoryDto {
            category: Some("Culture".to_string()),
            colour: None,
        },
    )?;
    let renamed = CategoryService::new(db).update(params).await?;

    let moved = FactService::new(db).get(user.id, fact.id).await?;
    assert_eq!(renamed.name, "culture");
    assert_eq!(moved.category, "culture");

    Ok(())
}

/// Tests seeding the default categories.
///
/// Expected: all defaults inserted once, nothing on the second call
#[tokio::test]
async fn seeds_defaults_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let first = service.seed_defaults().await?;
    let second = service.seed_defaults().await?;

    assert_eq!(first, crate::model::category::DEFAULT_CATEGORIES.len());
    assert_eq!(second, 0);
    assert_eq!(service.get_all().await?.len(), first);

    Ok(())
}

/// Tests deleting a missing category.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_missing_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CategoryService::new(db).delete(3).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(FactService::new(db)
        .list(0, &FactQuery::default())
        .await?
        .is_empty());

    Ok(())
}
