// src/app/vue.rs
//
// Vue (terminal)
// --------------
// Transforme l’état (etat.rs) en lignes de texte ; aucune E/S ici.
// - résultat : "= 5.0000000000" (précision des réglages)
// - erreur   : "Error: <message>"
// - démarche : jetons + rpn, si activée

use super::etat::AppCalc;

/// Bannière de démarrage : opérations supportées.
pub const BANNIERE: &str = "\
--- Calculatrice scientifique (infixe) ---
Opérations :
  Binaires : + - * / ^ (puissance), r (racine : a r b = racine b-ième de a)
  Préfixes : S s C c T t l L (sin sinh cos cosh tan tanh ln log10), ex: S30
  Postfixe : ! (factorielle), ex: 6!
  Constante : p ou π
Multiplication explicite obligatoire : 2*(3), pas 2(3).
'exit', 'quit', 'q' ou une ligne vide pour terminer.";

pub const PROMPT: &str = "Expression: ";

pub const AU_REVOIR: &str = "Au revoir.";

impl AppCalc {
    /// Lignes à afficher pour la dernière évaluation.
    pub fn rendu(&self) -> Vec<String> {
        let mut lignes = Vec::new();

        if let Some(e) = &self.erreur {
            lignes.push(format!("Error: {e}"));
            return lignes;
        }

        if let Some(d) = &self.resultat {
            let digits = self.reglages.digits;
            lignes.push(format!("= {:.*}", digits, d.valeur));

            if self.reglages.demarche {
                lignes.push(format!("  jetons: {}", d.jetons));
                lignes.push(format!("  rpn:    {}", d.rpn));
            }
        }

        lignes
    }
}
