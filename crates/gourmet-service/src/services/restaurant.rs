//! Restaurant service

use gourmet_core::entities::Restaurant;
use gourmet_core::{DomainError, PageQuery, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateRestaurantRequest, RestaurantResponse, UpdateRestaurantRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Restaurant service
pub struct RestaurantService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RestaurantService<'a> {
    /// Create a new RestaurantService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: PageQuery) -> ServiceResult<Vec<RestaurantResponse>> {
        let restaurants = self.ctx.restaurant_repo().list(page).await?;
        Ok(restaurants.into_iter().map(RestaurantResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, restaurant_id: Snowflake) -> ServiceResult<RestaurantResponse> {
        Ok(self.find(restaurant_id).await?.into())
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateRestaurantRequest) -> ServiceResult<RestaurantResponse> {
        request.validate()?;

        let restaurant = Restaurant::new(self.ctx.generate_id(), request.name, request.location);
        self.ctx.restaurant_repo().create(&restaurant).await?;

        info!(restaurant_id = %restaurant.id, "Restaurant created");
        Ok(restaurant.into())
    }

    /// Update a restaurant; omitted fields keep their value
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        restaurant_id: Snowflake,
        request: UpdateRestaurantRequest,
    ) -> ServiceResult<RestaurantResponse> {
        request.validate()?;

        let mut restaurant = self.find(restaurant_id).await?;
        if let Some(name) = request.name {
            restaurant.name = name;
        }
        if let Some(location) = request.location {
            restaurant.location = location;
        }

        self.ctx.restaurant_repo().update(&restaurant).await?;
        Ok(restaurant.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, restaurant_id: Snowflake) -> ServiceResult<()> {
        self.find(restaurant_id).await?;
        self.ctx.restaurant_repo().delete(restaurant_id).await?;
        info!(restaurant_id = %restaurant_id, "Restaurant deleted");
        Ok(())
    }

    async fn find(&self, restaurant_id: Snowflake) -> ServiceResult<Restaurant> {
        Ok(self
            .ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or(DomainError::RestaurantNotFound(restaurant_id))?)
    }
}
