//! Banner rendering
//!
//! Banners are produced by an injected [`BannerRenderer`] so the game logic never depends on a
//! particular text-art style.

use colored::Colorize;

/// Visual weight of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStyle {
    /// Large framed title: welcome, win, loss, farewell
    Headline,
    /// Short warning strip shown on a wrong guess
    Alert,
}

/// Turns a line of text into a multi-line banner
pub trait BannerRenderer {
    fn render(&self, text: &str, style: BannerStyle) -> String;
}

impl<F> BannerRenderer for F
where
    F: Fn(&str, BannerStyle) -> String,
{
    fn render(&self, text: &str, style: BannerStyle) -> String {
        self(text, style)
    }
}

/// Default renderer drawing box-frame banners
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxBanner;

impl BannerRenderer for BoxBanner {
    fn render(&self, text: &str, style: BannerStyle) -> String {
        match style {
            BannerStyle::Headline => {
                let width = text.chars().count() + 6;
                let bar = "═".repeat(width);
                format!(
                    "{}\n{}{}{}\n{}",
                    format!("╔{bar}╗").bright_cyan(),
                    "║".bright_cyan(),
                    format!("   {text}   ").bright_yellow().bold(),
                    "║".bright_cyan(),
                    format!("╚{bar}╝").bright_cyan(),
                )
            }
            BannerStyle::Alert => {
                let width = text.chars().count() + 4;
                let bar = "▀".repeat(width);
                format!(
                    "{}\n{}",
                    format!("▌ {text} ▐").bright_red().bold(),
                    bar.red()
                )
            }
        }
    }
}
