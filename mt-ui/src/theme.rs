//! Colours used across the timeline components.

pub const BACKGROUND: &str = "#020617";
pub const PANEL: &str = "#0f172a";
pub const BORDER: &str = "#334155";
pub const TEXT: &str = "#e2e8f0";
pub const MUTED: &str = "#94a3b8";
/// Active decade
pub const CYAN: &str = "#22d3ee";
/// Active year
pub const AMBER: &str = "#fbbf24";
/// Active department
pub const EMERALD: &str = "#34d399";

pub const ERROR_BACKGROUND: &str = "#450a0a";
pub const ERROR_BORDER: &str = "#b91c1c";
pub const ERROR_TEXT: &str = "#fecaca";

/// Inline style for a banner in the error palette.
pub fn error_style() -> String {
    format!(
        "display: flex; align-items: flex-start; gap: 12px; max-width: 640px; margin: 24px auto; \
         padding: 16px 20px; border-radius: 16px; border: 1px solid {ERROR_BORDER}; \
         background: {ERROR_BACKGROUND}; color: {ERROR_TEXT};"
    )
}

/// Inline style for a round timeline node.
pub fn node_style(size_px: u32, active: bool, accent: &str) -> String {
    let (border, glow, color) = if active {
        (accent, format!("0 0 24px {accent}99"), accent)
    } else {
        (BORDER, "none".to_string(), MUTED)
    };
    format!(
        "width: {size_px}px; height: {size_px}px; border-radius: 50%; border: 2px solid {border}; \
         background: {PANEL}; color: {color}; box-shadow: {glow}; display: flex; \
         align-items: center; justify-content: center; cursor: pointer; \
         transition: all 0.2s ease-out;"
    )
}
