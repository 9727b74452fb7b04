//! SketchMentor UI Components
//!
//! Dioxus widgets for the landing page and the waitlist modal, styled by
//! the class names defined in the app's global stylesheet.
//!
//! ## Palette
//!
//! - **Purple (#a855f7)**: brand accent, primary actions
//! - **Green (#16a34a)**: joined / success states
//! - **Near Black (#0a0a0a)**: page background
//! - **Gray (#9ca3af)**: secondary copy

pub mod components;

pub use components::*;
