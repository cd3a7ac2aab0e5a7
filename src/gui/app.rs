use std::{
    path::PathBuf,
    time::Duration,
};

use chrono::Local;
use eframe::egui::{
    self,
    RichText,
};
use log::{
    error,
    info,
    warn,
};

use super::{
    card_view::{
        self,
        CardFace,
    },
    flip_timer::FlipTimer,
    reset_modal::ResetModal,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        DataSource,
        LearningStore,
        StorePaths,
        VocabItem,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct FlashyApp {
    store: LearningStore,
    settings: SettingsData,
    theme: Theme,
    current_card: Option<VocabItem>,
    is_flipped: bool,
    flip_timer: FlipTimer,
    reset_modal: ResetModal,
    load_warning: Option<String>,
    status: Option<String>,
}

impl FlashyApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let paths = match &settings.dataset_path {
            Some(path) => StorePaths::for_dataset(PathBuf::from(path)),
            None => StorePaths::default_paths(),
        };

        let mut store = LearningStore::new(paths);
        let load_warning = match store.load() {
            Ok(DataSource::BuiltinDemo) => {
                Some("No vocabulary files found. Loaded the built-in demo deck.".to_string())
            }
            Ok(_) => None,
            Err(e) => {
                error!("Failed to load vocabulary data: {}", e);
                Some(format!("Failed to load data: {}", e))
            }
        };

        let theme = Theme::flashy();
        setup_fonts(&cc.egui_ctx);
        set_theme(&cc.egui_ctx, &theme);

        let mut app = Self {
            store,
            settings,
            theme,
            current_card: None,
            is_flipped: false,
            flip_timer: FlipTimer::new(),
            reset_modal: ResetModal::new(),
            load_warning,
            status: None,
        };

        app.next_card();
        app
    }

    /// Skip the current card and draw a new one. Always cancels a pending
    /// auto-reveal first so it can't fire against the new card.
    fn next_card(&mut self) {
        self.flip_timer.cancel();
        self.is_flipped = false;
        self.current_card = self.store.pick_next();

        if self.current_card.is_some() && self.settings.auto_flip {
            self.flip_timer.schedule(Duration::from_millis(self.settings.flip_delay_ms));
        }
    }

    fn manual_flip(&mut self) {
        self.flip_timer.cancel();
        if self.current_card.is_some() {
            self.is_flipped = !self.is_flipped;
        }
    }

    fn mark_known(&mut self) {
        let Some(card) = self.current_card.take() else {
            return;
        };
        self.store.mark_known(card.id);
        self.status = None;
        self.next_card();
    }

    fn undo_last(&mut self) {
        if self.store.undo() {
            self.status = Some("Last word restored to the learning list.".to_string());
            self.next_card();
        }
    }

    fn reset_progress(&mut self) {
        match self.store.reset() {
            Ok(_) => {
                self.status = Some("Progress has been reset.".to_string());
                self.load_warning = None;
                self.next_card();
            }
            Err(e) => {
                error!("Failed to reset progress: {}", e);
                self.status = Some(format!("Failed to reset: {}", e));
            }
        }
    }

    fn set_auto_flip(&mut self, enabled: bool) {
        self.settings.auto_flip = enabled;
        if !enabled {
            self.flip_timer.cancel();
        }
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            warn!("Failed to save settings: {}", e);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.reset_modal.is_open() {
            return;
        }

        let (space, left, right, undo, reset, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if space {
            self.manual_flip();
        }
        if left {
            self.mark_known();
        }
        if right {
            self.next_card();
        }
        if undo {
            self.undo_last();
        }
        if reset {
            self.reset_modal.open();
        }
        if escape {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn progress_text(&self) -> String {
        let summary = self.store.progress_summary();
        format!(
            "Progress: {}/{} words learned ({:.1}%)",
            summary.learned, summary.total, summary.percentage
        )
    }

    fn show_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.progress_text()).size(14.0));
                ui.add_space(5.0);
                let fraction = self.store.progress_summary().percentage / 100.0;
                ui.add(egui::ProgressBar::new(fraction).desired_width(400.0));
            });
            ui.add_space(10.0);
        });
    }

    fn show_card(&mut self, ui: &mut egui::Ui) {
        if let Some(card) = self.current_card.clone() {
            let (title, word, face) = if self.is_flipped {
                (self.store.target_label().to_string(), card.target, CardFace::Back)
            } else {
                (self.store.source_label().to_string(), card.source, CardFace::Front)
            };

            if card_view::card_ui(ui, &self.theme, &title, &word, face).clicked() {
                self.manual_flip();
            }
        } else {
            card_view::completion_ui(ui, &self.theme, self.store.stats().original_count);
        }
    }

    fn show_judgment_buttons(&mut self, ui: &mut egui::Ui) {
        let has_card = self.current_card.is_some();

        ui.horizontal(|ui| {
            let dont_know = egui::Button::new(
                RichText::new("✗ Don't Know").color(self.theme.text_light).strong(),
            )
            .fill(self.theme.danger)
            .min_size(egui::Vec2::new(140.0, 40.0));

            let know_it = egui::Button::new(
                RichText::new("✓ Know It!").color(self.theme.text_light).strong(),
            )
            .fill(self.theme.success)
            .min_size(egui::Vec2::new(140.0, 40.0));

            if ui.add_enabled(has_card, dont_know).clicked() {
                self.next_card();
            }
            ui.add_space(30.0);
            if ui.add_enabled(has_card, know_it).clicked() {
                self.mark_known();
            }
        });
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.current_card.is_some(), egui::Button::new("🔄 Flip Card"))
                .clicked()
            {
                self.manual_flip();
            }

            let mut auto_flip = self.settings.auto_flip;
            if ui.checkbox(&mut auto_flip, "Auto-flip (3s)").changed() {
                self.set_auto_flip(auto_flip);
            }

            if ui.add_enabled(self.store.can_undo(), egui::Button::new("↩ Undo")).clicked() {
                self.undo_last();
            }

            if ui.button("🔄 Reset All").clicked() {
                self.reset_modal.open();
            }
        });
    }

    fn show_footer(&self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new(format!(
                "Session: {} cards learned",
                self.store.stats().learned_this_session
            ))
            .size(12.0),
        );

        if let Some(warning) = &self.load_warning {
            ui.add_space(5.0);
            ui.label(RichText::new(warning).color(self.theme.danger).size(12.0));
        }
        if let Some(status) = &self.status {
            ui.add_space(5.0);
            ui.label(RichText::new(status).color(self.theme.accent).size(12.0));
        }

        ui.add_space(15.0);
        ui.label(
            RichText::new("Shortcuts: Space=Flip | →=Don't Know | ←=Know | U=Undo | R=Reset")
                .color(self.theme.muted)
                .size(10.0),
        );
    }
}

impl eframe::App for FlashyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        if self.flip_timer.poll() && !self.is_flipped {
            self.is_flipped = true;
        }
        if let Some(remaining) = self.flip_timer.time_remaining() {
            ctx.request_repaint_after(remaining);
        }

        self.show_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(15.0);
                self.show_card(ui);
                ui.add_space(20.0);
                self.show_judgment_buttons(ui);
                ui.add_space(15.0);
                self.show_controls(ui);
                ui.add_space(15.0);
                self.show_footer(ui);
            });
        });

        if let Some(confirmed) = self.reset_modal.show(ctx) {
            if confirmed {
                self.reset_progress();
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let stats = self.store.stats();
        let minutes = Local::now().signed_duration_since(stats.started_at).num_minutes();
        info!(
            "Session over: {} card(s) learned in {} minute(s)",
            stats.learned_this_session, minutes
        );
    }
}

/// The demo deck is Urdu, which the default egui fonts can't render. Pick up
/// a system font with Arabic coverage when one is available.
fn setup_fonts(ctx: &egui::Context) {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",
        "/usr/share/fonts/noto/NotoNaskhArabic-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/System/Library/Fonts/Supplemental/GeezaPro.ttc",
        "C:\\Windows\\Fonts\\tahoma.ttf",
    ];

    let Some(bytes) = CANDIDATES.iter().find_map(|path| std::fs::read(path).ok()) else {
        warn!("No Arabic-capable system font found; non-Latin cards may render as boxes");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("arabic_fallback".to_owned(), std::sync::Arc::new(egui::FontData::from_owned(bytes)));

    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push("arabic_fallback".to_owned());

    ctx.set_fonts(fonts);
}
