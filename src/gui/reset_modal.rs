use eframe::egui;

pub struct ResetModal {
    open: bool,
}

impl ResetModal {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Some(true) when the user confirmed the reset, Some(false) on cancel,
    /// None while the dialog stays open (or is closed).
    pub fn show(&mut self, ctx: &egui::Context) -> Option<bool> {
        if !self.open {
            return None;
        }

        let mut result: Option<bool> = None;

        let modal = egui::Modal::new(egui::Id::new("reset_modal")).show(ctx, |ui| {
            ui.set_width(360.0);

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.heading("Reset Progress");
            });
            ui.add_space(10.0);

            ui.label("Are you sure you want to reset all progress?\nThis cannot be undone!");
            ui.add_space(15.0);

            ui.horizontal(|ui| {
                if ui.button("Reset All").clicked() {
                    result = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    result = Some(false);
                }
            });
            ui.add_space(5.0);
        });

        if modal.should_close() {
            result = result.or(Some(false));
        }

        if result.is_some() {
            self.open = false;
        }

        result
    }
}
