//! Server-side HTML components for the portal pages
//!
//! Each component is a plain function from data to an HTML fragment. Every
//! dynamic value goes through [`escape_html`] before it is written out.

mod companion_card;
mod companions_list;
mod cta;

pub use companion_card::companion_card;
pub use companions_list::companions_list;
pub use cta::cta;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
