//! Noyau RPN
//!
//! Organisation interne :
//! - jetons.rs      : jetons + table des opérations connues
//! - eval.rs        : évaluation postfixée (récursion sur tranche)
//! - description.rs : rendu infixe parenthésé
//! - programme.rs   : export/import du programme + enveloppe JSON
//! - moteur.rs      : suite de jetons + liaisons (seul mutateur)
//! - trace.rs       : échantillonnage y = f(M) pour le graphe

pub mod description;
pub mod eval;
pub mod jetons;
pub mod moteur;
pub mod programme;
pub mod trace;

#[cfg(test)]
mod tests_moteur;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::Variables;
pub use jetons::format_nombre;
pub use moteur::Moteur;
