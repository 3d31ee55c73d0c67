//! Font token sets

use brute_core::{FontFamily, FontStyle, FontWeight};

/// The semantic font descriptors for one theme tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSet {
    /// Large, prominent font for main titles.
    pub title: FontStyle,
    /// Font for section headers and subheadings.
    pub header: FontStyle,
    /// Regular font for body text.
    pub body: FontStyle,
    /// Small font for captions, badges, and supporting text.
    pub caption: FontStyle,
}

impl FontSet {
    /// The shipped font set: rounded bold title and header, rounded regular
    /// body, monospaced bold caption.
    pub const fn brute() -> Self {
        Self {
            title: FontStyle::new(FontFamily::Rounded, FontWeight::Bold, 28.0),
            header: FontStyle::new(FontFamily::Rounded, FontWeight::Bold, 17.0),
            body: FontStyle::new(FontFamily::Rounded, FontWeight::Regular, 17.0),
            caption: FontStyle::new(FontFamily::Monospaced, FontWeight::Bold, 12.0),
        }
    }
}
