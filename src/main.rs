use eframe::egui;
use verbario::gui::VerbarioApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native("Verbario", options, Box::new(|cc| Ok(Box::new(VerbarioApp::new(cc)))))
}
