//! Theme for SketchMentor.

mod styles;

pub use styles::GLOBAL_STYLES;
