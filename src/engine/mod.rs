//! Color science and palette generation.
//!
//! Everything in this module is pure, synchronous computation. Malformed
//! colors make functions return `None`, an empty list or a documented
//! sentinel; nothing here panics, performs I/O or reads the clock.

pub mod analyzer;
pub mod color_space;
pub mod generator;
pub mod harmony;
pub mod random;
pub mod roles;
pub mod suggestions;

pub use analyzer::{
    analyze_color_psychology, calculate_palette_harmony_score, ColorFamily, ColorPsychology,
    HarmonyAnalysis,
};
pub use generator::generate_ui_palette;
pub use random::SeededRandom;
pub use suggestions::suggest_harmonies;
