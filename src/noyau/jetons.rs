// src/noyau/jetons.rs
//
// Jetons du programme postfixé + table des opérations connues.
//
// Règles:
// - Un jeton porte directement sa fonction (pointeur fn), pas de sous-classe.
// - La table est construite UNE fois (OnceLock) puis partagée par référence.
// - Symboles moins/division : U+2212 « − » et « ÷ » (pas '-' ni '/').

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub enum Jeton {
    Operande(f64),

    // Résolue à l’évaluation via les liaisons (peut être absente).
    Variable(String),

    OpUnaire(&'static str, fn(f64) -> f64),

    // fn(opérande la plus récente, opérande précédente)
    OpBinaire(&'static str, fn(f64, f64) -> f64),

    Constante(&'static str, f64),
}

impl Jeton {
    /// Symbole stable (recherche + affichage) ; None pour opérande/variable.
    pub fn symbole(&self) -> Option<&'static str> {
        match self {
            Jeton::OpUnaire(s, _) | Jeton::OpBinaire(s, _) | Jeton::Constante(s, _) => Some(*s),
            Jeton::Operande(_) | Jeton::Variable(_) => None,
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Operande(v) => f.write_str(&format_nombre(*v)),
            Jeton::Variable(nom) => f.write_str(nom),
            Jeton::OpUnaire(s, _) | Jeton::OpBinaire(s, _) | Jeton::Constante(s, _) => {
                f.write_str(s)
            }
        }
    }
}

// Deux jetons sont égaux s’ils s’affichent pareil et sont de même nature.
// (les pointeurs fn ne se comparent pas de façon fiable)
impl PartialEq for Jeton {
    fn eq(&self, other: &Self) -> bool {
        use Jeton::*;
        match (self, other) {
            (Operande(a), Operande(b)) => a.to_bits() == b.to_bits(),
            (Variable(a), Variable(b)) => a == b,
            (OpUnaire(a, _), OpUnaire(b, _)) => a == b,
            (OpBinaire(a, _), OpBinaire(b, _)) => a == b,
            (Constante(a, x), Constante(b, y)) => a == b && x.to_bits() == y.to_bits(),
            _ => false,
        }
    }
}

/// Texte décimal d’un nombre, identique pour l’affichage, la description
/// et le programme exporté : 3 -> "3.0", 0.1 -> "0.1".
///
/// `{:?}` donne la plus courte écriture qui se relit exactement.
pub fn format_nombre(v: f64) -> String {
    format!("{v:?}")
}

/* ------------------------ Table des opérations connues ------------------------ */

pub const SYMB_MUL: &str = "×";
pub const SYMB_DIV: &str = "÷";
pub const SYMB_ADD: &str = "+";
pub const SYMB_SUB: &str = "−";
pub const SYMB_RACINE: &str = "√";
pub const SYMB_SIN: &str = "sin";
pub const SYMB_PI: &str = "π";

/// Table figée symbole -> jeton.
#[derive(Debug)]
pub struct TableOps {
    ops: HashMap<&'static str, Jeton>,
}

impl TableOps {
    fn construire() -> Self {
        // x = opérande la plus récente, y = la précédente : « y ÷ x », « y − x »
        let entrees = [
            Jeton::OpBinaire(SYMB_MUL, |x, y| x * y),
            Jeton::OpBinaire(SYMB_DIV, |x, y| y / x),
            Jeton::OpBinaire(SYMB_ADD, |x, y| x + y),
            Jeton::OpBinaire(SYMB_SUB, |x, y| y - x),
            Jeton::OpUnaire(SYMB_RACINE, f64::sqrt),
            Jeton::OpUnaire(SYMB_SIN, f64::sin),
            Jeton::Constante(SYMB_PI, std::f64::consts::PI),
        ];

        let mut ops = HashMap::with_capacity(entrees.len());
        for j in entrees {
            if let Some(s) = j.symbole() {
                ops.insert(s, j);
            }
        }
        Self { ops }
    }

    /// Recherche exacte (pas de normalisation de casse ni d’espaces).
    pub fn get(&self, symbole: &str) -> Option<&Jeton> {
        self.ops.get(symbole)
    }

    pub fn symboles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ops.keys().copied()
    }
}

/// Table partagée (construite au premier appel).
pub fn table_ops() -> &'static TableOps {
    static TABLE: OnceLock<TableOps> = OnceLock::new();
    TABLE.get_or_init(TableOps::construire)
}

/// Format utilitaire (debug/log) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let out: Vec<String> = jetons.iter().map(|j| j.to_string()).collect();
    format!("[{}]", out.join(", "))
}
