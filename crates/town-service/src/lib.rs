//! # town-service
//!
//! Application layer containing the identity, administration and forum
//! services, the authorization gate, and request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AdminService, AuthorizationContext, AuthorizationGate, ForumService, IdentityService,
    RequiredLevel, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
