//! Page components for SketchMentor.

mod landing;

pub use landing::Landing;
