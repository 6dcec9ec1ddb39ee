//! src/app/etat.rs
//!
//! État du shell (sans rendu, sans lecture terminal).
//!
//! Rôle : contenir l’état de la session (entrée, résultat, erreur, réglages)
//! et décider ce que signifie une ligne (évaluer ou quitter).
//!
//! Contrats :
//! - L’évaluation passe uniquement par l’API publique du noyau.
//! - Résultat et erreur sont exclusifs après chaque évaluation.
//! - Défense en profondeur : bornes sur la précision affichée.

use tracing_subscriber::filter::LevelFilter;

use calculatrice_sci::{evaluate_with_trace, Demarche, EvalError};

/// Précision affichée par défaut (chiffres après la virgule).
const DIGITS_DEFAUT: usize = 10;

/// Au-delà, un f64 n’a plus de chiffres significatifs à montrer.
const DIGITS_MAX: usize = 17;

const ENV_DIGITS: &str = "CALC_DIGITS";
const ENV_DEMARCHE: &str = "CALC_DEMARCHE";
const ENV_LOG: &str = "CALC_LOG";

/// Réglages du shell (lus une fois au démarrage).
#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub digits: usize,
    /// Afficher jetons + RPN sous chaque résultat.
    pub demarche: bool,
    pub log: LevelFilter,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            digits: DIGITS_DEFAUT,
            demarche: false,
            log: LevelFilter::WARN,
        }
    }
}

impl Reglages {
    /// Réglages depuis l’environnement du processus.
    pub fn depuis_env() -> (Self, Vec<String>) {
        Self::depuis(|cle| std::env::var(cle).ok())
    }

    /// Réglages depuis une source clé -> valeur (testable sans toucher à l’env).
    ///
    /// Une valeur illisible garde le défaut et produit un avertissement,
    /// rendu à l’appelant : le journal n’est pas encore branché à ce stade.
    pub fn depuis(lire: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut r = Self::default();
        let mut avertissements = Vec::new();

        if let Some(v) = lire(ENV_DIGITS) {
            match v.trim().parse::<usize>() {
                Ok(d) => r.set_digits(d),
                Err(_) => avertissements
                    .push(format!("{ENV_DIGITS}={v:?} illisible, défaut {DIGITS_DEFAUT}")),
            }
        }

        if let Some(v) = lire(ENV_DEMARCHE) {
            match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "oui" => r.demarche = true,
                "0" | "false" | "non" | "" => r.demarche = false,
                _ => avertissements
                    .push(format!("{ENV_DEMARCHE}={v:?} illisible, démarche désactivée")),
            }
        }

        if let Some(v) = lire(ENV_LOG) {
            match v.trim().parse::<LevelFilter>() {
                Ok(l) => r.log = l,
                Err(_) => {
                    avertissements.push(format!("{ENV_LOG}={v:?} illisible, niveau {}", r.log))
                }
            }
        }

        (r, avertissements)
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }
}

/// Ce que le shell doit faire d’une ligne lue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Evaluer,
    Quitter,
}

/// Ligne vide, `exit`, `quit` ou `q` (casse ignorée) : fin de session.
pub fn commande(ligne: &str) -> Commande {
    let s = ligne.trim();
    if s.is_empty()
        || s.eq_ignore_ascii_case("exit")
        || s.eq_ignore_ascii_case("quit")
        || s.eq_ignore_ascii_case("q")
    {
        Commande::Quitter
    } else {
        Commande::Evaluer
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties (exclusives) ---
    pub resultat: Option<Demarche>,
    pub erreur: Option<EvalError>,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /// Évalue `ligne` via le noyau et dépose résultat OU erreur.
    pub fn evaluer(&mut self, ligne: &str) {
        self.entree = ligne.trim().to_string();

        match evaluate_with_trace(&self.entree) {
            Ok(d) => self.set_resultat(d),
            Err(e) => self.set_erreur(e),
        }
    }

    pub fn set_resultat(&mut self, d: Demarche) {
        self.erreur = None;
        self.resultat = Some(d);
    }

    /// Une erreur efface le résultat précédent (il ne correspond plus à l’entrée).
    pub fn set_erreur(&mut self, e: EvalError) {
        self.resultat = None;
        self.erreur = Some(e);
    }
}
