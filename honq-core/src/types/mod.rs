//! Core data types for honq.

pub mod item;

pub use item::{Item, join_path, strip_extension};
