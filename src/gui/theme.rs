use eframe::egui::{
    self,
    Color32,
};

#[derive(Clone)]
pub struct Theme {
    pub background: Color32,
    pub card_front: Color32,
    pub card_back: Color32,
    pub text_dark: Color32,
    pub text_light: Color32,
    pub success: Color32,
    pub danger: Color32,
    pub accent: Color32,
    pub muted: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::flashy()
    }
}

impl Theme {
    pub fn flashy() -> Self {
        Self {
            background: Color32::from_rgb(0xA9, 0xD6, 0xE5),
            card_front: Color32::from_rgb(0xFF, 0xFF, 0xFF),
            card_back: Color32::from_rgb(0x2B, 0x2B, 0x2B),
            text_dark: Color32::from_rgb(0x00, 0x00, 0x00),
            text_light: Color32::from_rgb(0xFF, 0xFF, 0xFF),
            success: Color32::from_rgb(0x4C, 0xAF, 0x50),
            danger: Color32::from_rgb(0xF4, 0x43, 0x36),
            accent: Color32::from_rgb(0x1D, 0x3A, 0x4E),
            muted: Color32::from_rgb(0x4A, 0x6B, 0x7C),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = theme.background;
    style.visuals.window_fill = theme.background;
    style.visuals.override_text_color = Some(theme.accent);
    style.visuals.widgets.noninteractive.bg_fill = theme.background;
    style.visuals.selection.bg_fill = theme.success;

    ctx.set_style(style);
}
