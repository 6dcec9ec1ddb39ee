//! Calculatrice scientifique : noyau d’évaluation d’expressions infixes.
//!
//! ```
//! assert_eq!(calculatrice_sci::evaluate("2*(3+4)"), Ok(14.0));
//! ```

pub mod noyau;

pub use noyau::{
    eval_postfix, evaluate, evaluate_with_trace, format_tokens, to_postfix, tokenize, Demarche,
    EvalError, OpId, OperatorDef, Token,
};
