// src/main.rs
//
// Calculatrice scientifique : point d’entrée terminal
// ---------------------------------------------------
// - Réglages lus dans l’environnement (CALC_DIGITS, CALC_DEMARCHE, CALC_LOG)
// - Journalisation : abonné tracing sur stderr (capte aussi les `log::` du noyau)
// - Prompt seulement si stdout est un terminal

mod app;

use std::io::{self, IsTerminal};

use app::{AppCalc, Reglages};

fn init_logging(niveau: tracing_subscriber::filter::LevelFilter) {
    // déjà initialisé : on garde l’abonné existant
    let _ = tracing_subscriber::fmt()
        .with_max_level(niveau)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> io::Result<()> {
    let (reglages, avertissements) = Reglages::depuis_env();
    init_logging(reglages.log);
    for a in &avertissements {
        log::warn!("{a}");
    }
    log::debug!("réglages: {reglages:?}");

    let prompt = io::stdout().is_terminal();
    let mut app = AppCalc::new(reglages);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app.boucle(&mut stdin.lock(), &mut stdout, prompt)
}
