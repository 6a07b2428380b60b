//! Mathematical utilities and data structures

pub mod bounds;

pub use bounds::GridBounds;
