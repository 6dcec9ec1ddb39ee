// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfixe)
// Objectif:
// - Convertir une suite de Token en RPN, en consultant la table des opérateurs
//   (précédence, associativité, position)
//
// Règles:
// - préfixe (fonctions, neg) : empilé, sorti par un opérateur binaire plus
//   faible, par la parenthèse fermante de son argument ou en fin d’entrée
// - postfixe (!) : sortie directe (son opérande est déjà dans la sortie)
// - binaire : dépile tant que le sommet lie plus fort (ou autant, si gauche)
// - ')' : dépile jusqu’à '(' puis sort la fonction collée à la parenthèse

use super::erreur::EvalError;
use super::jetons::Token;
use super::operateurs::OpId;

/// Doit-on sortir `sommet` avant d’empiler le binaire `op` ?
fn doit_pop(sommet: OpId, op: OpId) -> bool {
    let p_top = sommet.def().precedence;
    let p_op = op.def().precedence;

    if op.def().est_gauche() {
        p_top >= p_op
    } else {
        p_top > p_op
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Sin, LeftParen, Pi, Divide, Number(2), RightParen]
///   rpn:    [Pi, Number(2), Divide, Sin]
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for &tok in tokens {
        match tok {
            Token::Number(_) | Token::Pi => out.push(tok),

            Token::Operator(op) if op.def().est_postfixe() => out.push(tok),

            Token::Operator(op) if op.def().est_prefixe() => ops.push(tok),

            Token::Operator(op) => {
                while let Some(&Token::Operator(sommet)) = ops.last() {
                    if !doit_pop(sommet, op) {
                        break;
                    }
                    out.push(Token::Operator(sommet));
                    ops.pop();
                }
                ops.push(tok);
            }

            Token::LeftParen => ops.push(tok),

            Token::RightParen => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => out.push(top),
                        None => return Err(EvalError::UnmatchedParen('(')),
                    }
                }

                // si une fonction est au sommet, elle s’applique au groupe
                if let Some(&Token::Operator(sommet)) = ops.last() {
                    if sommet.def().est_prefixe() {
                        out.push(Token::Operator(sommet));
                        ops.pop();
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Token::LeftParen {
            return Err(EvalError::UnmatchedParen(')'));
        }
        out.push(op);
    }

    Ok(out)
}
