//! # dubhub-service
//!
//! Application layer: the verification state machine, reputation ledger,
//! notifications and the DTOs the API serves.

pub mod dto;
pub mod services;

pub use services::{
    Actor, IdentityService, NotificationService, ReputationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, VerificationService,
};
