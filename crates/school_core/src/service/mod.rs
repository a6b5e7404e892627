//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository, report and export calls into use-case APIs.
//! - Keep the interactive shell decoupled from storage details.

pub mod school_service;
