//! Shared configuration and error types for the vcardconv workspace.

pub mod config;
pub mod error;
