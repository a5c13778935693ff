//! Game entities module.
//!
//! This module organizes entity state and the bounded path history the seeker leaves behind.

pub mod entity;
pub mod history;

pub use entity::*;
pub use history::*;
