//! API route handlers

pub mod cards;
pub mod quiz;
pub mod words;
