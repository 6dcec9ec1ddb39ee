// src/noyau/fonctions.rs
//
// Noyaux numériques appelés par la table des opérateurs.
// Convention : un argument hors domaine renvoie NaN (ou ±∞) ; c’est
// l’évaluateur qui transforme ensuite tout résultat non fini en DomainError.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Tolérance sur la partie fractionnaire pour « est un entier ».
const TOLERANCE_ENTIER: f64 = 1e-9;

/// Au-delà, n! dépasse f64::MAX : inutile de boucler.
const FACTORIELLE_MAX: u64 = 170;

/// Renvoie Some(n) si x est (à TOLERANCE_ENTIER près) un entier >= 0.
fn entier_naturel(x: f64) -> Option<f64> {
    if !x.is_finite() || x < 0.0 {
        return None;
    }
    let n = x.round();
    if (x - n).abs() > TOLERANCE_ENTIER {
        return None;
    }
    Some(n)
}

/// Entier pair (à la tolérance près), signe ignoré.
fn est_entier_pair(x: f64) -> bool {
    entier_naturel(x.abs()).is_some_and(|n| n % 2.0 == 0.0)
}

/// n! pour n entier naturel.
///
/// Le produit est accumulé exactement en BigUint puis converti une seule fois
/// en f64 : pas d’erreur d’arrondi cumulée sur les petits entiers.
pub fn factorielle(x: f64) -> f64 {
    let Some(n) = entier_naturel(x) else {
        return f64::NAN;
    };
    if n > FACTORIELLE_MAX as f64 {
        return f64::INFINITY;
    }

    let n = n as u64;
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= k;
    }
    acc.to_f64().unwrap_or(f64::INFINITY)
}

/// `a r b` : racine b-ième de a, soit a^(1/b).
///
/// - degré pair + a < 0 : NaN, rejeté explicitement
/// - sinon a^(1/b) tel quel (NaN aussi pour a < 0 et degré impair)
pub fn racine(a: f64, b: f64) -> f64 {
    if a < 0.0 && est_entier_pair(b) {
        return f64::NAN;
    }
    a.powf(1.0 / b)
}

pub fn addition(a: f64, b: f64) -> f64 {
    a + b
}

pub fn soustraction(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiplication(a: f64, b: f64) -> f64 {
    a * b
}

/// x/0 donne ±∞ ou NaN : intercepté par l’évaluateur.
pub fn division(a: f64, b: f64) -> f64 {
    a / b
}

pub fn negation(x: f64) -> f64 {
    -x
}
