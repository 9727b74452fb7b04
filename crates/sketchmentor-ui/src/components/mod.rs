//! Reusable UI components.

mod button;
mod form;
mod modal;
mod toast;

pub use button::*;
pub use form::*;
pub use modal::*;
pub use toast::*;
