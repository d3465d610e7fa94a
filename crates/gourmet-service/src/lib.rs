//! # gourmet-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use services::{
    Actor, CategoryService, PostService, ProfileService, RestaurantService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TokenService, UserService,
};
