//! Request handlers

pub mod health;
pub mod resource;
pub mod status;
