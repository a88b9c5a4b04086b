//! Color theme derived from a single accent color.

pub mod adapter;
mod service;

pub use service::Theme;
