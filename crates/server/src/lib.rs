//! HTTP surface of the face detection service.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod responses;
pub mod state;
