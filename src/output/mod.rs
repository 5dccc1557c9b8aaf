//! Terminal output formatting
//!
//! Banners, status lines and prompts for the game.

pub mod banner;
pub mod display;
pub mod formatters;

pub use banner::{BannerRenderer, BannerStyle, BoxBanner};
pub use display::Presenter;
