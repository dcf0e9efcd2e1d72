//! Category domain models and parameters.

use crate::{
    model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    server::{error::AppError, util::validation},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub colour: String,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            colour: entity.colour,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            colour: self.colour,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub colour: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validation::category_name(&dto.category)?,
            colour: validation::colour(&dto.colour)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: Option<String>,
    pub colour: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.category.as_deref().map(validation::category_name).transpose()?,
            colour: dto.colour.as_deref().map(validation::colour).transpose()?,
        })
    }
}
