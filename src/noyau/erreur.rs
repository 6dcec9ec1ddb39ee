// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// Chaque étape (jetons -> RPN -> évaluation) s’arrête à la première erreur
// et la remonte telle quelle : aucun résultat partiel.

use thiserror::Error;

use super::operateurs::OpId;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// Entrée vide (ou seulement des espaces).
    #[error("expression vide")]
    EmptyExpression,

    /// Caractère (ou jeton) non reconnu.
    #[error("caractère inattendu: '{0}'")]
    InvalidToken(char),

    /// Littéral numérique illisible (ex: "1.2.3", ".").
    #[error("nombre invalide: '{0}'")]
    MalformedNumber(String),

    /// Parenthèses déséquilibrées ; porte la parenthèse manquante.
    #[error("parenthèses non appariées: '{0}' manquante")]
    UnmatchedParen(char),

    /// Un opérateur n’a pas trouvé assez d’opérandes sur la pile.
    #[error("opérande manquant pour '{0}'")]
    StackUnderflow(OpId),

    /// Fin d’évaluation avec autre chose qu’une seule valeur.
    #[error("expression invalide ({restants} valeurs restantes au lieu de 1)")]
    MalformedExpression { restants: usize },

    /// Résultat non fini (NaN / ±∞).
    #[error("erreur de domaine (ex: l-1) ou division par zéro")]
    DomainError,
}
