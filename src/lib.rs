//! Harmonia Library
//!
//! Color science and palette generation for UI design: hex/RGB/HSL
//! conversion, WCAG contrast, harmony derivation, role-aware palette
//! generation around locked colors, and harmony scoring.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod export;
pub mod models;
