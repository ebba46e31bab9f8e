// src/app/stockage.rs
//
// Persistance (eframe::Storage, feature "persistence")
// ----------------------------------------------------
// - programme : enveloppe JSON du noyau (aller-retour lossy pour les variables)
// - variables : liaisons nom -> valeur (JSON)
// - graphe    : ReglagesGraphe (JSON)
//
// Lecture ratée => valeur par défaut + warn (jamais de panique au démarrage).

use crate::noyau::programme::{depuis_json, vers_json};
use crate::noyau::Variables;

use super::etat::{AppCalc, ReglagesGraphe};

const CLE_PROGRAMME: &str = "calculatrice_rpn.programme";
const CLE_VARIABLES: &str = "calculatrice_rpn.variables";
const CLE_GRAPHE: &str = "calculatrice_rpn.graphe";

/// Reconstruit l’état à partir du stockage (ou défaut si absent/illisible).
pub fn charger(storage: Option<&dyn eframe::Storage>) -> AppCalc {
    let Some(storage) = storage else {
        return AppCalc::default();
    };

    let programme = match storage.get_string(CLE_PROGRAMME) {
        Some(texte) => depuis_json(&texte).unwrap_or_else(|e| {
            log::warn!("stockage: {e}, programme ignoré");
            Vec::new()
        }),
        None => Vec::new(),
    };

    let variables: Variables = lire_json(storage, CLE_VARIABLES).unwrap_or_default();
    let graphe: ReglagesGraphe = lire_json(storage, CLE_GRAPHE).unwrap_or_default();

    log::info!(
        "stockage: {} jeton(s), {} variable(s) restauré(s)",
        programme.len(),
        variables.len()
    );
    AppCalc::restaurer(&programme, variables, graphe)
}

pub fn sauver(app: &AppCalc, storage: &mut dyn eframe::Storage) {
    match vers_json(&app.moteur.programme()) {
        Ok(texte) => storage.set_string(CLE_PROGRAMME, texte),
        Err(e) => log::warn!("stockage: {e}"),
    }
    ecrire_json(storage, CLE_VARIABLES, app.moteur.variables());
    ecrire_json(storage, CLE_GRAPHE, &app.graphe);
}

fn lire_json<T: serde::de::DeserializeOwned>(
    storage: &dyn eframe::Storage,
    cle: &str,
) -> Option<T> {
    let texte = storage.get_string(cle)?;
    match serde_json::from_str(&texte) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("stockage: {cle} illisible: {e}");
            None
        }
    }
}

fn ecrire_json<T: serde::Serialize>(storage: &mut dyn eframe::Storage, cle: &str, valeur: &T) {
    match serde_json::to_string(valeur) {
        Ok(texte) => storage.set_string(cle, texte),
        Err(e) => log::warn!("stockage: {cle} non sérialisable: {e}"),
    }
}
