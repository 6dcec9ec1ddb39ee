//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une expression générée comme arbre donne le même résultat
//!   (bit à bit, ou la même erreur) via `evaluate` (infixe) et via
//!   `eval_postfix` appliqué directement à son parcours postfixe

use std::time::{Duration, Instant};

use super::{eval_postfix, evaluate, EvalError, OpId, Token};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (infixe + postfixe en parallèle) ------------------------ */

/// Expression générée : texte infixe complètement parenthésé + RPN attendue.
struct Genere {
    infixe: String,
    rpn: Vec<Token>,
}

const BINAIRES: [(OpId, &str); 6] = [
    (OpId::Add, "+"),
    (OpId::BinaryMinus, "-"),
    (OpId::Multiply, "*"),
    (OpId::Divide, "/"),
    (OpId::Power, "^"),
    (OpId::Root, "r"),
];

const PREFIXES: [(OpId, &str); 8] = [
    (OpId::Sin, "S"),
    (OpId::Sinh, "s"),
    (OpId::Cos, "C"),
    (OpId::Cosh, "c"),
    (OpId::Tan, "T"),
    (OpId::Tanh, "t"),
    (OpId::Ln, "l"),
    (OpId::Log10, "L"),
];

fn gen_atome(rng: &mut Rng) -> Genere {
    match rng.pick(4) {
        0 => Genere {
            infixe: "p".to_string(),
            rpn: vec![Token::Pi],
        },
        1 => {
            // demi-entiers : exacts en décimal
            let v = rng.pick(20) as f64 / 2.0;
            Genere {
                infixe: format!("{v}"),
                rpn: vec![Token::Number(v)],
            }
        }
        2 => {
            let n = rng.pick(7) as f64;
            Genere {
                infixe: format!("{n}!"),
                rpn: vec![Token::Number(n), Token::Operator(OpId::Factorial)],
            }
        }
        _ => {
            let n = (1 + rng.pick(9)) as f64;
            Genere {
                infixe: format!("{n}"),
                rpn: vec![Token::Number(n)],
            }
        }
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Genere {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(6) {
        0 => gen_atome(rng),
        1 => {
            let (op, sym) = PREFIXES[rng.pick(PREFIXES.len() as u32) as usize];
            let mut x = gen_expr(rng, depth - 1);
            x.rpn.push(Token::Operator(op));
            Genere {
                infixe: format!("{sym}({})", x.infixe),
                rpn: x.rpn,
            }
        }
        2 => {
            let mut x = gen_expr(rng, depth - 1);
            x.rpn.push(Token::Operator(OpId::Negate));
            Genere {
                infixe: format!("-({})", x.infixe),
                rpn: x.rpn,
            }
        }
        _ => {
            let (op, sym) = BINAIRES[rng.pick(BINAIRES.len() as u32) as usize];
            let a = gen_expr(rng, depth - 1);
            let b = gen_expr(rng, depth - 1);
            let mut rpn = a.rpn;
            rpn.extend(b.rpn);
            rpn.push(Token::Operator(op));
            Genere {
                infixe: format!("({}{sym}{})", a.infixe, b.infixe),
                rpn,
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_aller_retour_postfixe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 5);
        let direct = eval_postfix(&g.rpn).map(f64::to_bits);
        let complet = evaluate(&g.infixe).map(f64::to_bits);
        assert_eq!(direct, complet, "expr={:?}", g.infixe);

        match complet {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                // seules les erreurs de domaine sont possibles sur une expression bien formée
                assert_eq!(e, EvalError::DomainError, "expr={:?}", g.infixe);
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let a = gen_expr(&mut r1, 4);
        let b = gen_expr(&mut r2, 4);
        assert_eq!(a.infixe, b.infixe);
        assert_eq!(
            evaluate(&a.infixe).map(f64::to_bits),
            evaluate(&b.infixe).map(f64::to_bits)
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // alphabet d’entrée + quelques intrus
    let alphabet: Vec<char> = "0123456789.+-*/^r!()pSsCcTtlL #xπ".chars().collect();
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let len = 1 + rng.pick(16) as usize;
        let s: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // Ok ou Err typée, jamais de panique ; un Ok est toujours fini
        if let Ok(v) = evaluate(&s) {
            assert!(v.is_finite(), "expr={s:?} valeur={v}");
        }
    }
}
