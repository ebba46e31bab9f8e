// src/noyau/trace.rs
//
// Source de données du graphe : y = f(M).
// - y(x) : lie M = x le temps d’une évaluation, puis restaure l’ancienne liaison
// - echantillonner : une colonne de pixels = un point ; valeur non finie = coupure
//
// Coordonnées écran : y vers le bas (origine.y - y * ppu).

use super::moteur::Moteur;

/// Variable balayée par le graphe.
pub const NOM_VARIABLE_GRAPHE: &str = "M";

/// Évalue le programme avec M = x. L’ancienne liaison de M est restaurée
/// (absente reste absente).
pub fn y(moteur: &mut Moteur, x: f64) -> Option<f64> {
    let ancien = moteur.variable(NOM_VARIABLE_GRAPHE);
    moteur.set_variable(NOM_VARIABLE_GRAPHE, Some(x));
    let r = moteur.evaluer();
    moteur.set_variable(NOM_VARIABLE_GRAPHE, ancien);
    r
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Fenêtre d’échantillonnage (en points écran).
#[derive(Clone, Copy, Debug)]
pub struct Cadre {
    pub x_min: f64,
    pub x_max: f64,
    pub origine: Point,
    pub points_par_unite: f64,
    /// Pixels physiques par point (alignement sur la grille de l’écran).
    pub echelle: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Trace {
    /// Programme non évaluable : le tracé se réduit à l’origine.
    Indisponible(Point),

    /// Morceaux continus (une coupure à chaque valeur non finie).
    Courbes(Vec<Vec<Point>>),
}

fn aligner(c: f64, echelle: f64) -> f64 {
    (c * echelle).round() / echelle
}

/// Échantillonne le programme sur chaque colonne entière de [x_min, x_max].
pub fn echantillonner(moteur: &mut Moteur, cadre: &Cadre) -> Trace {
    let ppu = cadre.points_par_unite;
    if !(ppu.is_finite() && ppu > 0.0) || !(cadre.x_min <= cadre.x_max) {
        return Trace::Courbes(Vec::new());
    }
    let echelle = if cadre.echelle > 0.0 { cadre.echelle } else { 1.0 };

    let debut = cadre.x_min as i64;
    let fin = cadre.x_max as i64;

    let mut courbes: Vec<Vec<Point>> = Vec::new();
    let mut courante: Vec<Point> = Vec::new();

    for px in debut..=fin {
        let px = px as f64;
        let x = (px - cadre.origine.x) / ppu;

        let Some(valeur) = y(moteur, x) else {
            log::trace!("trace: programme non évaluable, tracé réduit à l’origine");
            return Trace::Indisponible(cadre.origine);
        };

        if !valeur.is_finite() {
            // discontinuité : on termine le morceau courant
            if !courante.is_empty() {
                courbes.push(std::mem::take(&mut courante));
            }
            continue;
        }

        courante.push(Point {
            x: aligner(px, echelle),
            y: aligner(cadre.origine.y - valeur * ppu, echelle),
        });
    }

    if !courante.is_empty() {
        courbes.push(courante);
    }
    Trace::Courbes(courbes)
}
