//! GUI Theme: dark slate with an emerald accent
//!
//! Color constants shared by all views.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background (slate-900)
pub const BG_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
/// Cards and panels (slate-800)
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 41, 59);
/// Bars, inputs, hovered widgets (slate-700)
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(51, 65, 85);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(241, 245, 249);
/// Secondary text (slate-400)
pub const TEXT_DIM: Color32 = Color32::from_rgb(148, 163, 184);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 116, 139);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Emerald, the app's main accent
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(16, 185, 129);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(59, 130, 246);
pub const ACCENT_ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
pub const ACCENT_PURPLE: Color32 = Color32::from_rgb(124, 58, 237);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
