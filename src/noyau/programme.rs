// src/noyau/programme.rs
//
// Programme = forme sérialisée du moteur : une chaîne par jeton.
// - export : texte d’affichage de chaque jeton
// - import : symbole connu d’abord, sinon nombre, sinon ignoré
//   (les variables ne se relisent PAS : aller-retour volontairement lossy)
//
// Enveloppe JSON (serde_json) pour la persistance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::jetons::{table_ops, Jeton};

/// Version courante de l’enveloppe JSON.
pub const VERSION_PROGRAMME: u32 = 1;

pub fn exporter(jetons: &[Jeton]) -> Vec<String> {
    jetons.iter().map(|j| j.to_string()).collect()
}

/// Reconstruit une suite de jetons. Les chaînes non reconnues sont ignorées.
pub fn importer<S: AsRef<str>>(chaines: &[S]) -> Vec<Jeton> {
    let mut out = Vec::with_capacity(chaines.len());
    for s in chaines {
        let s = s.as_ref();
        if let Some(j) = table_ops().get(s) {
            out.push(j.clone());
        } else if let Some(v) = lire_nombre(s) {
            out.push(Jeton::Operande(v));
        } else {
            log::debug!("programme: jeton ignoré à l’import: {s:?}");
        }
    }
    out
}

/// Lecture numérique tolérante : espaces autour, virgule décimale acceptée.
fn lire_nombre(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>()
        .ok()
        .or_else(|| t.replacen(',', ".", 1).parse::<f64>().ok())
}

/* ------------------------ Enveloppe JSON ------------------------ */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgrammeSauve {
    pub version: u32,
    pub jetons: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ProgrammeError {
    #[error("programme illisible: {0}")]
    Json(#[from] serde_json::Error),

    #[error("version de programme inconnue: {0}")]
    VersionInconnue(u32),
}

pub fn vers_json(programme: &[String]) -> Result<String, ProgrammeError> {
    let sauve = ProgrammeSauve {
        version: VERSION_PROGRAMME,
        jetons: programme.to_vec(),
    };
    Ok(serde_json::to_string(&sauve)?)
}

pub fn depuis_json(texte: &str) -> Result<Vec<String>, ProgrammeError> {
    let sauve: ProgrammeSauve = serde_json::from_str(texte)?;
    if sauve.version != VERSION_PROGRAMME {
        return Err(ProgrammeError::VersionInconnue(sauve.version));
    }
    Ok(sauve.jetons)
}
