// src/noyau/jetons.rs

use super::erreur::EvalError;
use super::operateurs::OpId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    /// Constante π : résolue en valeur seulement à l’évaluation.
    Pi,
    Operator(OpId),
    LeftParen,
    RightParen,
}

impl Token {
    /// Un `-` qui suit ce jeton est binaire.
    fn termine_operande(&self) -> bool {
        match self {
            Token::Number(_) | Token::Pi | Token::RightParen => true,
            Token::Operator(op) => op.def().est_postfixe(),
            Token::LeftParen => false,
        }
    }
}

fn debut_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux : suite maximale de [0-9.] (au moins un chiffre, un seul '.')
/// - opérateurs binaires + - * / ^ r
/// - fonctions préfixes S s C c T t l L (sin sinh cos cosh tan tanh ln log10)
/// - factorielle postfixe !
/// - parenthèses ( )
/// - π : "p" ou "π"
///
/// Moins unaire / binaire :
/// - `-` est binaire si le jeton précédent termine un opérande
///   (nombre, π, `!` ou `)`), unaire sinon (toujours en début d’entrée)
/// - unaire devant un littéral : fusionné dans le littéral ("-5" -> Number(-5))
/// - unaire ailleurs (devant `(`, `p`, une fonction, un autre `-`) : OpId::Negate
pub fn tokenize(raw: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out: Vec<Token> = Vec::with_capacity(chars.len());
    let mut i: usize = 0;

    // moins unaire en attente de fusion avec le prochain littéral
    let mut negatif = false;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : suite maximale de chiffres / points
        if debut_nombre(c) {
            let start = i;
            while i < chars.len() && debut_nombre(chars[i]) {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            let valeur = lire_nombre(&texte)?;
            out.push(Token::Number(if negatif { -valeur } else { valeur }));
            negatif = false;
            continue;
        }

        i += 1;

        let tok = match c {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            'p' | 'π' => Token::Pi,
            '-' => {
                let binaire = out.last().is_some_and(|t| t.termine_operande());
                if binaire {
                    Token::Operator(OpId::BinaryMinus)
                } else if chars.get(i).copied().is_some_and(debut_nombre) {
                    negatif = true;
                    continue;
                } else {
                    Token::Operator(OpId::Negate)
                }
            }
            _ => match OpId::depuis_symbole(c) {
                Some(op) => Token::Operator(op),
                None => return Err(EvalError::InvalidToken(c)),
            },
        };
        out.push(tok);
    }

    Ok(out)
}

/// Littéral décimal : au moins un chiffre, au plus un point.
fn lire_nombre(texte: &str) -> Result<f64, EvalError> {
    let chiffres = texte.chars().filter(char::is_ascii_digit).count();
    let points = texte.len() - chiffres;
    if chiffres == 0 || points > 1 {
        return Err(EvalError::MalformedNumber(texte.to_string()));
    }
    texte
        .parse::<f64>()
        .map_err(|_| EvalError::MalformedNumber(texte.to_string()))
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Token::Number(v) => format!("{v}"),
            Token::Pi => "π".to_string(),
            Token::Operator(op) => op.def().symbole.to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
