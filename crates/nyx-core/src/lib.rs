//! Core types and services for the NyxSpectra blog.
//!
//! No HTTP or database dependencies live here.
//! Storage backends implement [`storage::Storage`]; the HTTP layer drives
//! [`content::ContentStore`] and [`analytics::Analytics`].

pub mod analytics;
pub mod content;
pub mod error;
pub mod moderation;
pub mod post;
pub mod related;
pub mod seed;
pub mod slug;
pub mod storage;
pub mod upload;

pub use error::{Error, Result};
