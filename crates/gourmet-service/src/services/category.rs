//! Category service

use gourmet_core::entities::Category;
use gourmet_core::{DomainError, PageQuery, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: PageQuery) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().list(page).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, category_id: Snowflake) -> ServiceResult<CategoryResponse> {
        Ok(self.find(category_id).await?.into())
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateCategoryRequest) -> ServiceResult<CategoryResponse> {
        request.validate()?;

        let category = Category::new(self.ctx.generate_id(), request.name);
        self.ctx.category_repo().create(&category).await?;

        info!(category_id = %category.id, "Category created");
        Ok(category.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        category_id: Snowflake,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        request.validate()?;

        let mut category = self.find(category_id).await?;
        if let Some(name) = request.name {
            category.name = name;
        }

        self.ctx.category_repo().update(&category).await?;
        Ok(category.into())
    }

    /// Delete a category; posts lose the link but are kept
    #[instrument(skip(self))]
    pub async fn delete(&self, category_id: Snowflake) -> ServiceResult<()> {
        self.find(category_id).await?;
        self.ctx.category_repo().delete(category_id).await?;
        info!(category_id = %category_id, "Category deleted");
        Ok(())
    }

    async fn find(&self, category_id: Snowflake) -> ServiceResult<Category> {
        Ok(self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(category_id))?)
    }
}
