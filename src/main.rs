use trivia_quiz::{QuizApp, QuizConfig};

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = QuizConfig::from_env();
    log::info!("starting quiz against {}", config.api_url);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Quiz Application",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(config)))),
    )
}
