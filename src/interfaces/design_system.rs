use egui::{Color32, Frame, Stroke, Visuals};

/// Dark mode design tokens shared by the form and the result panel.
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: Color32 = Color32::from_rgb(12, 13, 18);
    pub const BG_PANEL: Color32 = Color32::from_rgb(12, 13, 18);
    pub const BG_CARD: Color32 = Color32::from_rgb(24, 26, 34);
    pub const BG_CARD_HOVER: Color32 = Color32::from_rgb(30, 33, 42);
    pub const BG_INPUT: Color32 = Color32::from_rgb(16, 18, 25);

    // Accents
    pub const ACCENT_PRIMARY: Color32 = Color32::from_rgb(124, 110, 255); // #7C6EFF
    pub const ACCENT_SECONDARY: Color32 = Color32::from_rgb(150, 140, 255);

    // Status
    pub const SUCCESS: Color32 = Color32::from_rgb(52, 211, 153); // #34D399
    pub const DANGER: Color32 = Color32::from_rgb(248, 81, 73); // #F85149
    pub const WARNING: Color32 = Color32::from_rgb(255, 176, 32); // #FFB020
    pub const INFO: Color32 = Color32::from_rgb(88, 166, 255); // #58A6FF

    // Text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(237, 242, 247);
    pub const TEXT_SECONDARY: Color32 = Color32::from_gray(165);
    pub const TEXT_MUTED: Color32 = Color32::from_gray(105);

    // Borders
    pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(45, 50, 62);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;
        visuals.hyperlink_color = Self::INFO;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard card styling for the result sections
    pub fn card_frame() -> Frame {
        Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }
}
