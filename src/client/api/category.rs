use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::category::{CategoriesData, CategoryDto},
};

pub async fn get_categories() -> Result<Vec<CategoryDto>, ApiError> {
    let response = send_request(get("/categories")).await?;
    parse_response::<CategoriesData>(response)
        .await
        .map(|d| d.categories)
}
