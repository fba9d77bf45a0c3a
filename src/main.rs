mod app;

use app::MyApp;
use deck_viewer::catalog::build_catalog;
use deck_viewer::{DeckViewer, ViewerConfig};

/// Shows a blocking native error box; used before any window exists.
fn show_fatal(title: &str, message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ViewerConfig::default();

    let catalog = match build_catalog(&config.decks_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("{e}");
            show_fatal(e.title(), &e.to_string());
            std::process::exit(1);
        }
    };

    for name in catalog.names() {
        log::debug!("  - {name}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_resizable(false),
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(MyApp::new(cc, DeckViewer::new(catalog), config)))),
    )
}
