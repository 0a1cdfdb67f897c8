//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints, business
//! logic, data access and the blob storage for uploaded files. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Parameter validation, authorization and orchestration
//! - **Data Layer** (`data/`) - Database operations, file lifecycle, entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access for the caller's identity
//! - **Storage** (`storage/`) - Blob store backends for uploaded files
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, blob store, media URL)
//! - **Startup** (`startup`) - Initialization of database and sessions
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** reads the caller from the session, converts the query to params
//! 3. **Service** validates params, enforces authentication, builds the query plan
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and returns the JSON response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
