//! # pool-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ApiResponse, CreatePoolRequest, DestinationInput, DiscoveryFilter, HealthResponse,
    JoinResponse, MemberResponse, MessageResponse, PlaceResponse, PoolResponse,
    PostMessageRequest, ReadinessResponse,
};
pub use services::{
    ChatService, DiscoveryService, PoolService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
