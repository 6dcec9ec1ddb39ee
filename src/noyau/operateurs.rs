// src/noyau/operateurs.rs
//
// Table des opérateurs (source unique de vérité)
// ---------------------------------------------
// - OpId : énumération fermée de tous les opérateurs / fonctions
// - OpId::def() : correspondance totale OpId -> &'static OperatorDef
//   (match exhaustif : un oubli est une erreur de compilation)
// - table statique, jamais modifiée : partageable entre threads sans verrou
//
// Précédence (plus grand = lie plus fort) :
//   6  !                      postfixe
//   5  S s C c T t l L  neg   préfixe (droite)
//   4  ^ (droite)  r (gauche)
//   3  * /
//   2  + -

use std::fmt;

use super::fonctions;

use Associativite::{Droite, Gauche};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpId {
    Add,
    /// `-` binaire (distinct du moins unaire fusionné par le tokenizer).
    BinaryMinus,
    Multiply,
    Divide,
    Power,
    /// `a r b` = racine b-ième de a.
    Root,
    Factorial,
    /// Moins unaire devant autre chose qu’un littéral : `-(2+3)`, `-p`, `--3`.
    Negate,
    Sin,
    Sinh,
    Cos,
    Cosh,
    Tan,
    Tanh,
    Ln,
    Log10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Prefixe,
    Postfixe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Unaire(Position),
    Binaire,
}

/// Comportement numérique, étiqueté par arité.
#[derive(Clone, Copy)]
pub enum Fonction {
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
}

impl fmt::Debug for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fonction::Unaire(_) => f.write_str("Unaire(..)"),
            Fonction::Binaire(_) => f.write_str("Binaire(..)"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OperatorDef {
    pub symbole: &'static str,
    pub precedence: u8,
    pub associativite: Associativite,
    pub arite: Arite,
    pub fonction: Fonction,
}

impl OperatorDef {
    pub fn est_prefixe(&self) -> bool {
        self.arite == Arite::Unaire(Position::Prefixe)
    }

    pub fn est_postfixe(&self) -> bool {
        self.arite == Arite::Unaire(Position::Postfixe)
    }

    pub fn est_gauche(&self) -> bool {
        self.associativite == Associativite::Gauche
    }
}

const fn binaire(
    symbole: &'static str,
    precedence: u8,
    associativite: Associativite,
    f: fn(f64, f64) -> f64,
) -> OperatorDef {
    OperatorDef {
        symbole,
        precedence,
        associativite,
        arite: Arite::Binaire,
        fonction: Fonction::Binaire(f),
    }
}

const fn prefixe(symbole: &'static str, f: fn(f64) -> f64) -> OperatorDef {
    OperatorDef {
        symbole,
        precedence: 5,
        associativite: Associativite::Droite,
        arite: Arite::Unaire(Position::Prefixe),
        fonction: Fonction::Unaire(f),
    }
}

static ADD: OperatorDef = binaire("+", 2, Gauche, fonctions::addition);
static BINARY_MINUS: OperatorDef = binaire("-", 2, Gauche, fonctions::soustraction);
static MULTIPLY: OperatorDef = binaire("*", 3, Gauche, fonctions::multiplication);
static DIVIDE: OperatorDef = binaire("/", 3, Gauche, fonctions::division);
static POWER: OperatorDef = binaire("^", 4, Droite, f64::powf);
static ROOT: OperatorDef = binaire("r", 4, Gauche, fonctions::racine);

static FACTORIAL: OperatorDef = OperatorDef {
    symbole: "!",
    precedence: 6,
    associativite: Gauche,
    arite: Arite::Unaire(Position::Postfixe),
    fonction: Fonction::Unaire(fonctions::factorielle),
};

static NEGATE: OperatorDef = prefixe("neg", fonctions::negation);
static SIN: OperatorDef = prefixe("S", f64::sin);
static SINH: OperatorDef = prefixe("s", f64::sinh);
static COS: OperatorDef = prefixe("C", f64::cos);
static COSH: OperatorDef = prefixe("c", f64::cosh);
static TAN: OperatorDef = prefixe("T", f64::tan);
static TANH: OperatorDef = prefixe("t", f64::tanh);
static LN: OperatorDef = prefixe("l", f64::ln);
static LOG10: OperatorDef = prefixe("L", f64::log10);

impl OpId {
    /// Attributs de l’opérateur (table statique).
    pub fn def(self) -> &'static OperatorDef {
        match self {
            OpId::Add => &ADD,
            OpId::BinaryMinus => &BINARY_MINUS,
            OpId::Multiply => &MULTIPLY,
            OpId::Divide => &DIVIDE,
            OpId::Power => &POWER,
            OpId::Root => &ROOT,
            OpId::Factorial => &FACTORIAL,
            OpId::Negate => &NEGATE,
            OpId::Sin => &SIN,
            OpId::Sinh => &SINH,
            OpId::Cos => &COS,
            OpId::Cosh => &COSH,
            OpId::Tan => &TAN,
            OpId::Tanh => &TANH,
            OpId::Ln => &LN,
            OpId::Log10 => &LOG10,
        }
    }

    /// Symbole d’entrée à un caractère -> opérateur.
    ///
    /// `-` n’est pas ici : son sens (binaire / unaire) dépend du contexte,
    /// c’est le tokenizer qui tranche.
    pub fn depuis_symbole(c: char) -> Option<OpId> {
        let op = match c {
            '+' => OpId::Add,
            '*' => OpId::Multiply,
            '/' => OpId::Divide,
            '^' => OpId::Power,
            'r' => OpId::Root,
            '!' => OpId::Factorial,
            'S' => OpId::Sin,
            's' => OpId::Sinh,
            'C' => OpId::Cos,
            'c' => OpId::Cosh,
            'T' => OpId::Tan,
            't' => OpId::Tanh,
            'l' => OpId::Ln,
            'L' => OpId::Log10,
            _ => return None,
        };
        Some(op)
    }
}

/// Symbole tel que l’utilisateur le tape (messages d’erreur).
///
/// Seul `Negate` diffère de `symbole` : saisi `-`, rendu `neg` dans la RPN.
impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpId::Negate => f.write_str("-"),
            _ => f.write_str(self.def().symbole),
        }
    }
}
