//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de programme bornée
//! - budget temps global
//! - invariants clés :
//!   * l’évaluation ne modifie jamais la suite
//!   * sans variable : description None <=> résultat None
//!   * sans variable : export -> import -> export identique

use std::time::{Duration, Instant};

use super::eval::evaluer;
use super::jetons::format_nombre;
use super::{Moteur, Variables};

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

/* ------------------------ Génération (bornée) ------------------------ */

const SYMBOLES: [&str; 9] = ["×", "÷", "+", "−", "√", "sin", "π", "cos", "-"];

fn gen_operande(rng: &mut Rng) -> f64 {
    match rng.pick(8) {
        0 => 0.0,
        1 => -1.0,
        2 => 0.5,
        3 => 1e-3,
        _ => rng.pick(100) as f64,
    }
}

/// Remplit le moteur au hasard ; renvoie vrai si une variable a été poussée.
fn gen_programme(rng: &mut Rng, m: &mut Moteur, avec_variables: bool) -> bool {
    let n = rng.pick(12);
    let mut variable = false;
    for _ in 0..n {
        match rng.pick(if avec_variables { 4 } else { 3 }) {
            0 | 1 => {
                m.push_operateur(SYMBOLES[rng.pick(SYMBOLES.len() as u32) as usize]);
            }
            2 => {
                m.push_operande(gen_operande(rng));
            }
            _ => {
                m.push_variable("M");
                variable = true;
            }
        }
    }
    variable
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_evaluation_ne_mute_pas_la_suite() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, max);

        let mut m = Moteur::new();
        gen_programme(&mut rng, &mut m, true);

        let avant = m.programme();
        let r1 = m.evaluer().map(format_nombre);
        let _ = m.description();
        let r2 = m.evaluer().map(format_nombre);

        assert_eq!(avant, m.programme());
        // déterminisme (comparaison textuelle : NaN != NaN)
        assert_eq!(r1, r2);
    }
}

#[test]
fn fuzz_description_et_resultat_coherents_sans_variable() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..2_000 {
        budget(start, max);

        let mut m = Moteur::new();
        gen_programme(&mut rng, &mut m, false);

        assert_eq!(
            m.evaluer().is_some(),
            m.description().is_some(),
            "incohérence pour {:?}",
            m.programme()
        );
    }
}

#[test]
fn fuzz_restes_identiques_eval_description() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);
    let mut vars = Variables::new();
    vars.insert("M".into(), 2.0);

    for _ in 0..2_000 {
        budget(start, max);

        let mut m = Moteur::new();
        gen_programme(&mut rng, &mut m, true);

        let (_, reste_eval) = evaluer(m.jetons(), &vars);
        let (_, reste_desc) = super::description::decrire(m.jetons());
        assert_eq!(reste_eval.len(), reste_desc.len());
    }
}

#[test]
fn fuzz_programme_stable_sans_variable() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(2015);

    for _ in 0..2_000 {
        budget(start, max);

        let mut src = Moteur::new();
        gen_programme(&mut rng, &mut src, false);

        let p = src.programme();
        let mut dst = Moteur::new();
        dst.set_programme(&p);

        assert_eq!(dst.programme(), p);
        assert_eq!(
            dst.evaluer().map(format_nombre),
            src.evaluer().map(format_nombre)
        );
    }
}
