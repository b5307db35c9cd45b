//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep CLI callers decoupled from storage details.

pub mod seed_service;
pub mod todo_service;
