//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database
//! operations, following a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, ownership
//!   checks, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic; the availability engine
//!   and credential/token handling live here
//! - **Data Layer** (`data/`) - Repositories wrapping SeaORM queries
//! - **Error Layer** (`error/`) - Application error types and HTTP response
//!   mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication extractor
//!
//! Supporting modules provide infrastructure: `config` (environment-based
//! configuration), `state` (shared application state), `startup` (database
//! connection, migrations, CORS), and `router` (route table).

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
