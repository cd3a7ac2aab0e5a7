use eframe::egui::{
    self,
    Align2,
    FontId,
    Sense,
    Vec2,
};

use super::theme::Theme;

const CARD_SIZE: Vec2 = Vec2::new(500.0, 300.0);
const TITLE_FONT_SIZE: f32 = 20.0;
const WORD_FONT_SIZE: f32 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Front,
    Back,
}

/// Painted flashcard. Returns the card's response so a click on it can act
/// as a manual flip.
pub fn card_ui(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    word: &str,
    face: CardFace,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::click());

    let (fill, text_color) = match face {
        CardFace::Front => (theme.card_front, theme.text_dark),
        CardFace::Back => (theme.card_back, theme.text_light),
    };

    let painter = ui.painter();
    let corner = egui::CornerRadius::same(14);
    painter.rect_filled(rect, corner, fill);
    painter.rect_stroke(
        rect,
        corner,
        egui::Stroke::new(1.5, theme.muted),
        egui::StrokeKind::Inside,
    );

    painter.text(
        rect.center_top() + Vec2::new(0.0, 80.0),
        Align2::CENTER_CENTER,
        title,
        FontId::proportional(TITLE_FONT_SIZE),
        text_color,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 20.0),
        Align2::CENTER_CENTER,
        word,
        FontId::proportional(WORD_FONT_SIZE),
        text_color,
    );

    response
}

/// Shown in place of a card once the working set is empty.
pub fn completion_ui(ui: &mut egui::Ui, theme: &Theme, total: usize) {
    let (rect, _response) = ui.allocate_exact_size(CARD_SIZE, Sense::hover());

    let painter = ui.painter();
    let corner = egui::CornerRadius::same(14);
    painter.rect_filled(rect, corner, theme.card_front);

    painter.text(
        rect.center_top() + Vec2::new(0.0, 80.0),
        Align2::CENTER_CENTER,
        "Congratulations!",
        FontId::proportional(TITLE_FONT_SIZE),
        theme.success,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 20.0),
        Align2::CENTER_CENTER,
        format!("All {} words learned!", total),
        FontId::proportional(WORD_FONT_SIZE - 8.0),
        theme.success,
    );
}
