//! Backend services

pub mod sessions;
pub mod static_data;
