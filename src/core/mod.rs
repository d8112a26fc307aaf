// src/core/mod.rs

pub mod dispatcher;
pub mod formatter;
