use eframe::egui;
use flashy::gui::FlashyApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([620.0, 640.0])
            .with_min_inner_size([560.0, 560.0])
            .with_title("Flashy"),
        ..Default::default()
    };

    eframe::run_native("Flashy", options, Box::new(|cc| Ok(Box::new(FlashyApp::new(cc)))))
}
