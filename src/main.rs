use barometre_du_coeur::BarometerApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Le Baromètre du Cœur",
        options,
        Box::new(|_cc| Ok(Box::new(BarometerApp::new()))),
    )
}
