// src/app.rs
//
// Shell terminal : module App (racine)
// ------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc / Reglages (pour main.rs)
// - Boucle lecture -> évaluation -> rendu, générique sur l’entrée/sortie
//   (stdin/stdout en vrai, tampons en test)

pub mod etat;
pub mod vue;

pub use etat::{AppCalc, Reglages};

use std::io::{self, BufRead, Write};

use log::info;

use etat::{commande, Commande};

impl AppCalc {
    /// Boucle principale : s’arrête sur EOF ou sur une commande de sortie.
    pub fn boucle(
        &mut self,
        entree: &mut impl BufRead,
        sortie: &mut impl Write,
        prompt: bool,
    ) -> io::Result<()> {
        writeln!(sortie, "{}\n", vue::BANNIERE)?;

        let mut ligne = String::new();
        loop {
            if prompt {
                write!(sortie, "{}", vue::PROMPT)?;
                sortie.flush()?;
            }

            ligne.clear();
            if entree.read_line(&mut ligne)? == 0 {
                info!("fin d’entrée");
                break;
            }

            if commande(&ligne) == Commande::Quitter {
                break;
            }

            self.evaluer(&ligne);
            for l in self.rendu() {
                writeln!(sortie, "{l}")?;
            }
        }

        writeln!(sortie, "{}", vue::AU_REVOIR)?;
        Ok(())
    }
}
