// src/noyau/moteur.rs
//
// Moteur : suite de jetons + liaisons.
// Le moteur est le SEUL à muter la suite. Chaque ajout ré-évalue tout
// (aucun cache). Les liaisons de variables viennent de l’hôte.

use super::description::decrire;
use super::eval::{evaluer, Variables};
use super::jetons::{format_jetons, table_ops, Jeton, TableOps};
use super::programme::{exporter, importer};

#[derive(Debug)]
pub struct Moteur {
    pile: Vec<Jeton>,
    variables: Variables,
    table: &'static TableOps,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::avec_variables(Variables::new())
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moteur branché sur des liaisons fournies par l’hôte.
    pub fn avec_variables(variables: Variables) -> Self {
        Self {
            pile: Vec::new(),
            variables,
            table: table_ops(),
        }
    }

    /* ------------------------ Ajouts ------------------------ */

    pub fn push_operande(&mut self, valeur: f64) -> Option<f64> {
        self.pile.push(Jeton::Operande(valeur));
        self.evaluer()
    }

    /// Aucune vérification que le nom est lié.
    pub fn push_variable(&mut self, nom: &str) -> Option<f64> {
        self.pile.push(Jeton::Variable(nom.to_string()));
        self.evaluer()
    }

    /// Symbole inconnu : suite inchangée, mais on ré-évalue quand même.
    pub fn push_operateur(&mut self, symbole: &str) -> Option<f64> {
        match self.table.get(symbole) {
            Some(j) => self.pile.push(j.clone()),
            None => log::debug!("moteur: symbole inconnu ignoré: {symbole:?}"),
        }
        self.evaluer()
    }

    /* ------------------------ Effacements ------------------------ */

    pub fn clear_all(&mut self) {
        self.pile.clear();
    }

    pub fn clear_variable(&mut self, nom: &str) {
        self.variables.remove(nom);
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn evaluer(&self) -> Option<f64> {
        let (resultat, reste) = evaluer(&self.pile, &self.variables);
        // trace : le graphe évalue une fois par colonne de pixels
        log::trace!(
            "{} évalué à {:?}, reste {}",
            format_jetons(&self.pile),
            resultat,
            format_jetons(reste)
        );
        resultat
    }

    pub fn description(&self) -> Option<String> {
        decrire(&self.pile).0
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.pile
    }

    pub fn est_vide(&self) -> bool {
        self.pile.is_empty()
    }

    /* ------------------------ Liaisons ------------------------ */

    pub fn variable(&self, nom: &str) -> Option<f64> {
        self.variables.get(nom).copied()
    }

    /// Lie (Some) ou délie (None) une variable.
    pub fn set_variable(&mut self, nom: &str, valeur: Option<f64>) {
        match valeur {
            Some(v) => {
                self.variables.insert(nom.to_string(), v);
            }
            None => {
                self.variables.remove(nom);
            }
        }
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }

    /* ------------------------ Programme ------------------------ */

    pub fn programme(&self) -> Vec<String> {
        exporter(&self.pile)
    }

    /// Remplace la suite d’un coup (les chaînes non reconnues sont ignorées).
    pub fn set_programme<S: AsRef<str>>(&mut self, programme: &[S]) {
        self.pile = importer(programme);
    }
}
