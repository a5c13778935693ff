//! Grid world module.

pub mod world;

pub use world::World;
