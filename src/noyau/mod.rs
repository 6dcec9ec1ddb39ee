//! Noyau d’évaluation scientifique (f64)
//!
//! Organisation interne :
//! - erreur.rs     : EvalError (taxonomie des échecs)
//! - operateurs.rs : OpId + table statique (précédence, associativité, arité)
//! - fonctions.rs  : factorielle exacte, racine, opérations de base
//! - jetons.rs     : tokenisation + moins unaire/binaire
//! - rpn.rs        : shunting-yard -> RPN
//! - eval.rs       : pile de valeurs + pipeline complet

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod jetons;
pub mod operateurs;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{eval_postfix, evaluate, evaluate_with_trace, Demarche};
pub use jetons::{format_tokens, tokenize, Token};
pub use operateurs::{OpId, OperatorDef};
pub use rpn::to_postfix;
