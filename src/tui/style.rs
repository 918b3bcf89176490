//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

/// Power curve line color.
pub const CURVE_COLOR: Color = Color::Cyan;
/// Current operating point marker color.
pub const MARKER_COLOR: Color = Color::Yellow;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Evaluator error text color.
pub const ERROR_FG: Color = Color::Red;

/// Computes Y-axis bounds for a power curve with 10% headroom.
///
/// The lower bound is pinned at zero since the curve never goes negative.
pub fn auto_bounds_y(points: &[(f64, f64)]) -> [f64; 2] {
    let max = points.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return [0.0, 1.0];
    }
    [0.0, max * 1.1]
}
