//! Icon helpers using iced_fonts with Lucide icons.
//!
//! Navigation entries carry an opaque [`IconId`]; this is the only place it
//! is turned into a glyph. See <https://lucide.dev/icons/> for the catalog.

use iced::widget::Text;
use iced_fonts::lucide;
use nova_shell::{IconId, Severity};

// Re-export the Lucide font bytes for loading in main.rs
pub use iced_fonts::LUCIDE_FONT_BYTES;

/// Glyph for a navigation entry. Unknown ids get a neutral dot.
pub fn nav_icon(icon: &IconId) -> Text<'static> {
    match icon.as_str() {
        "dashboard" => lucide::house(),
        "account-balance" => lucide::landmark(),
        "swap-horiz" => lucide::arrow_left_right(),
        "receipt" => lucide::receipt(),
        "admin-panel-settings" => lucide::shield_check(),
        "person" => lucide::user(),
        "settings" => lucide::settings(),
        _ => lucide::circle(),
    }
}

/// Glyph for a toast.
pub fn severity_icon(severity: Severity) -> Text<'static> {
    match severity {
        Severity::Success => lucide::circle_check(),
        Severity::Info => lucide::info(),
        Severity::Warning => lucide::triangle_alert(),
        Severity::Error => lucide::circle_x(),
    }
}
