//! Remote movie directory layer.
//!
//! This module provides the directory abstraction used by the worker and its HTTP
//! implementation.
//!
//! # Modules
//!
//! - `backend`: [`MovieDirectory`] trait
//! - `omdb`: [`OmdbClient`], the HTTP implementation over `reqwest`
//! - `models`: wire records and their conversion into domain types

pub mod backend;
pub mod models;
pub mod omdb;

pub use backend::MovieDirectory;
pub use omdb::OmdbClient;
