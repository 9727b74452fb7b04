//! Page sections and waitlist components.

mod account_chooser;
mod feature_grid;
mod hero;
mod how_it_works;
mod join_button;
mod join_section;
mod site_footer;
mod site_header;
mod toaster;
mod waitlist_modal;

pub use account_chooser::AccountChooser;
pub use feature_grid::{FeatureCard, FeatureGrid, FEATURES};
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use join_button::JoinButton;
pub use join_section::JoinSection;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use toaster::Toaster;
pub use waitlist_modal::WaitlistModal;
