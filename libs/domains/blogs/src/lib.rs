//! Blogs Domain
//!
//! CRUD access layer for blog posts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP adapter, sole place errors become responses
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, extension point for business rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Blog, payloads
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_blogs::{
//!     handlers,
//!     repository::InMemoryBlogRepository,
//!     service::BlogService,
//!     StatusPolicy,
//! };
//!
//! let repository = InMemoryBlogRepository::new();
//! let service = BlogService::new(repository);
//!
//! let router = handlers::router(service, StatusPolicy::Legacy);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{BlogError, BlogResult, Operation, StatusPolicy};
pub use handlers::ApiDoc;
pub use models::{Blog, BlogId, DeletedBlog, NewBlog, UpdateBlog};
pub use postgres::PgBlogRepository;
pub use repository::{BlogRepository, InMemoryBlogRepository};
pub use service::BlogService;
