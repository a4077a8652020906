use scenario_trainer::TrainerApp;
use scenario_trainer::data::read_sections_embedded;

fn main() -> eframe::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    // El contenido embebido se valida entero antes de abrir la ventana
    let app = match read_sections_embedded().and_then(TrainerApp::new) {
        Ok(app) => app,
        Err(e) => {
            log::error!("invalid content bundle: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Apprentice Scenario Trainer",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
