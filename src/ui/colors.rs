//! Color theme definitions for the UI.
//!
//! All color constants are defined here for consistency and easy theme
//! changes. The palette is the site's warm beige photography aesthetic.

use ratatui::style::Color;

/// Primary accent color (used for titles, highlights)
pub const PRIMARY: Color = Color::Rgb(177, 139, 115); // Muted gold
/// Secondary accent color (used for active elements)
pub const SECONDARY: Color = Color::Rgb(216, 184, 135); // Golden sand
/// Background for selected items
pub const SELECTION: Color = Color::Rgb(164, 124, 72); // Deep gold
/// Text on selection
pub const SELECTION_TEXT: Color = Color::Rgb(254, 247, 233); // Cream
/// Muted text color
pub const MUTED: Color = Color::Rgb(163, 136, 115); // Soft brown
/// Error/danger color
pub const ERROR: Color = Color::Rgb(217, 119, 119); // Dusty rose
/// Warning color
pub const WARNING: Color = Color::Rgb(230, 179, 100); // Warm amber
/// Success color
pub const SUCCESS: Color = Color::Rgb(167, 196, 139); // Sage green
/// Border color
pub const BORDER: Color = Color::Rgb(193, 154, 107); // Antique gold
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(228, 211, 194); // Pale tan
/// Accent color for icons and decorations
pub const ACCENT: Color = Color::Rgb(122, 94, 60); // Rich brown
