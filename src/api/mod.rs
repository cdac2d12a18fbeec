//! API Client
//!
//! HTTP access to the model inference service.

pub mod client;

pub use client::*;
