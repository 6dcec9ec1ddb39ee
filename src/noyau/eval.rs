//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de valeurs -> f64
//!
//! Aucun état ne survit à un appel : piles et files sont locales,
//! seule la table des opérateurs (statique, immuable) est partagée.

use std::f64::consts::PI;

use log::{debug, trace};

use super::erreur::EvalError;
use super::jetons::{format_tokens, tokenize, Token};
use super::operateurs::Fonction;
use super::rpn::to_postfix;

/// Démarche d’une évaluation : rendus intermédiaires + valeur.
#[derive(Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub valeur: f64,
}

/// Évalue une suite RPN.
///
/// - binaire : dépile b puis a, empile `a op b`
/// - unaire (préfixe ou postfixe) : dépile x, empile `f(x)`
/// - toute valeur empilée non finie => DomainError
/// - à la fin, exactement une valeur doit rester
pub fn eval_postfix(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut pile: Vec<f64> = Vec::with_capacity(tokens.len());

    for &tok in tokens {
        let valeur = match tok {
            Token::Number(v) => v,
            Token::Pi => PI,
            Token::Operator(op) => match op.def().fonction {
                Fonction::Binaire(f) => {
                    let b = pile.pop().ok_or(EvalError::StackUnderflow(op))?;
                    let a = pile.pop().ok_or(EvalError::StackUnderflow(op))?;
                    f(a, b)
                }
                Fonction::Unaire(f) => {
                    let x = pile.pop().ok_or(EvalError::StackUnderflow(op))?;
                    f(x)
                }
            },
            Token::LeftParen => return Err(EvalError::InvalidToken('(')),
            Token::RightParen => return Err(EvalError::InvalidToken(')')),
        };

        trace!("{:?} -> {valeur}", tok);
        if !valeur.is_finite() {
            return Err(EvalError::DomainError);
        }
        pile.push(valeur);
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::MalformedExpression {
            restants: pile.len(),
        }),
    }
}

/// API publique : évalue une expression infixe.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_with_trace(expression).map(|d| d.valeur)
}

/// Comme `evaluate`, en conservant les jetons et la RPN (texte).
pub fn evaluate_with_trace(expression: &str) -> Result<Demarche, EvalError> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let resultat = pipeline(s);
    if let Err(e) = &resultat {
        debug!("échec de {s:?}: {e:?}");
    }
    resultat
}

fn pipeline(s: &str) -> Result<Demarche, EvalError> {
    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons: {jetons_txt}");

    // 2) RPN
    let rpn = to_postfix(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn: {rpn_txt}");

    // 3) Valeur
    let valeur = eval_postfix(&rpn)?;

    Ok(Demarche {
        jetons: jetons_txt,
        rpn: rpn_txt,
        valeur,
    })
}
