//! API Module
//!
//! HTTP handlers and routing for the analysis service REST API.
//!
//! # Endpoints
//! - `POST /length` - Character count of a text
//! - `POST /num_vowels` - ASCII vowel count of a text
//! - `GET /stats` - Result cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
