//! # Career Mantra API Server Library
//!
//! This library provides the core functionality for the Career Mantra API
//! server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `ai`: AI provider abstraction (Gemini + mock)
//! - `middleware`: Cross-cutting HTTP middleware
//! - `routes`: API route handlers

pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
