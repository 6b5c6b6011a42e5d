// User Directory Library
// Client-side pieces of the user directory: phone country resolution, form
// validation, the REST client, and console demos. Used by main.rs.

pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod form;
pub mod helpers;
pub mod reference; // Country calling codes and phone-to-country resolution
pub mod users;

pub use error::{AppError, Result};
