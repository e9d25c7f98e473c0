//! Utility functions shared across the application.
//!
//! - [`url_validator`] - Validation and log masking of configured URLs

pub mod url_validator;
