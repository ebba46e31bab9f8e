// src/app/etat.rs
//
// État UI (sans vue).
//
// Rôle : contenir l’état de la calculatrice (affichage, saisie en cours,
// description) et traduire les touches en appels au moteur.
//
// Contrats :
// - Aucune évaluation ici : tout passe par `noyau::Moteur`.
// - Résultat absent => affichage "ERROR", description absente => "0".
// - Actions déterministes, sans effet de bord caché.

use serde::{Deserialize, Serialize};

use crate::noyau::trace::NOM_VARIABLE_GRAPHE;
use crate::noyau::{format_nombre, Moteur, Variables};

/// Texte affiché quand le moteur n’a pas de résultat.
pub const TEXTE_ERREUR: &str = "ERROR";

/// Texte de la pile quand le programme n’a pas de description.
const PILE_VIDE: &str = "0";

/// Zoom par défaut du graphe (points écran par unité).
pub const POINTS_PAR_UNITE_DEFAUT: f32 = 50.0;

/// Garde-fous zoom (anti-gel : pas de 10^6 colonnes par unité).
pub const POINTS_PAR_UNITE_MIN: f32 = 0.5;
pub const POINTS_PAR_UNITE_MAX: f32 = 5_000.0;

/// Réglages persistants du graphe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReglagesGraphe {
    pub points_par_unite: f32,
    /// Décalage de l’origine par rapport au centre de la vue (None = centrée).
    pub decalage_origine: Option<[f32; 2]>,
}

impl Default for ReglagesGraphe {
    fn default() -> Self {
        Self {
            points_par_unite: POINTS_PAR_UNITE_DEFAUT,
            decalage_origine: None,
        }
    }
}

impl ReglagesGraphe {
    /// Zoom multiplicatif borné.
    pub fn zoomer(&mut self, facteur: f32) {
        if !(facteur.is_finite() && facteur > 0.0) {
            return;
        }
        self.points_par_unite =
            (self.points_par_unite * facteur).clamp(POINTS_PAR_UNITE_MIN, POINTS_PAR_UNITE_MAX);
    }

    /// Réglages relus du stockage : zoom borné, valeurs non finies remplacées.
    pub fn borner(mut self) -> Self {
        self.points_par_unite = if self.points_par_unite.is_finite() {
            self.points_par_unite
                .clamp(POINTS_PAR_UNITE_MIN, POINTS_PAR_UNITE_MAX)
        } else {
            POINTS_PAR_UNITE_DEFAUT
        };
        if let Some([x, y]) = self.decalage_origine {
            if !(x.is_finite() && y.is_finite()) {
                self.decalage_origine = None;
            }
        }
        self
    }
}

#[derive(Debug)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- affichages ---
    pub affichage: String, // nombre en cours de saisie / dernier résultat
    pub pile: String,      // description du programme

    // --- saisie ---
    pub saisie_en_cours: bool,
    pub point_saisi: bool,

    // --- graphe ---
    pub vue_graphe: bool,
    pub graphe: ReglagesGraphe,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_moteur(Moteur::new())
    }
}

impl AppCalc {
    pub fn avec_moteur(moteur: Moteur) -> Self {
        let mut app = Self {
            moteur,
            affichage: format_nombre(0.0),
            pile: PILE_VIDE.to_string(),
            saisie_en_cours: false,
            point_saisi: false,
            vue_graphe: false,
            graphe: ReglagesGraphe::default(),
        };
        app.maj_pile();
        app
    }

    /// Restaure programme + liaisons + réglages (état persistant).
    pub fn restaurer(programme: &[String], variables: Variables, graphe: ReglagesGraphe) -> Self {
        let mut moteur = Moteur::avec_variables(variables);
        moteur.set_programme(programme);
        let mut app = Self::avec_moteur(moteur);
        app.graphe = graphe.borner();
        if !app.moteur.est_vide() {
            app.set_valeur_affichee(app.moteur.evaluer());
        }
        app
    }

    /* ------------------------ Affichage ------------------------ */

    /// Valeur lue dans l’affichage (None si "ERROR" ou texte illisible).
    pub fn valeur_affichee(&self) -> Option<f64> {
        self.affichage.trim().parse::<f64>().ok()
    }

    pub fn set_valeur_affichee(&mut self, valeur: Option<f64>) {
        self.affichage = match valeur {
            Some(v) => format_nombre(v),
            None => TEXTE_ERREUR.to_string(),
        };
        self.saisie_en_cours = false;
    }

    fn maj_pile(&mut self) {
        self.pile = self
            .moteur
            .description()
            .unwrap_or_else(|| PILE_VIDE.to_string());
    }

    fn fin_de_saisie(&mut self) {
        self.saisie_en_cours = false;
        self.point_saisi = false;
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Chiffre ou point décimal (un seul point par nombre).
    pub fn append_digit(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }

        if self.saisie_en_cours {
            if c == '.' {
                if self.point_saisi {
                    return;
                }
                self.point_saisi = true;
            }
            self.affichage.push(c);
        } else {
            self.affichage = if c == '.' {
                self.point_saisi = true;
                "0.".to_string()
            } else {
                c.to_string()
            };
            self.saisie_en_cours = true;
        }
    }

    /// Pousse l’affichage comme opérande (sans effet si illisible).
    pub fn enter(&mut self) {
        self.fin_de_saisie();
        match self.valeur_affichee() {
            Some(v) => {
                let r = self.moteur.push_operande(v);
                self.set_valeur_affichee(r);
                self.maj_pile();
            }
            None => log::debug!("enter: affichage illisible {:?}", self.affichage),
        }
    }

    /// Opérateur : termine d’abord la saisie en cours (enter implicite).
    pub fn operate(&mut self, symbole: &str) {
        if self.saisie_en_cours {
            self.enter();
        }
        let r = self.moteur.push_operateur(symbole);
        self.set_valeur_affichee(r);
        self.maj_pile();
    }

    /// →M : lie M à la valeur affichée, puis remet l’affichage à 0.
    pub fn var_set(&mut self) {
        self.fin_de_saisie();
        if let Some(v) = self.valeur_affichee() {
            self.moteur.set_variable(NOM_VARIABLE_GRAPHE, Some(v));
        }
        self.set_valeur_affichee(Some(0.0));
    }

    /// M : pousse la variable M.
    pub fn var_use(&mut self) {
        self.fin_de_saisie();
        let r = self.moteur.push_variable(NOM_VARIABLE_GRAPHE);
        self.set_valeur_affichee(r);
        self.maj_pile();
    }

    /// C(M) : délie M.
    pub fn mem_clear(&mut self) {
        self.moteur.clear_variable(NOM_VARIABLE_GRAPHE);
    }

    /// AC : remise à zéro (affichage + programme). Les liaisons restent.
    pub fn all_clear(&mut self) {
        self.fin_de_saisie();
        self.moteur.clear_all();
        self.set_valeur_affichee(Some(0.0));
        self.maj_pile();
    }

    /* ------------------------ Graphe ------------------------ */

    /// Titre du graphe = description courante.
    pub fn titre_graphe(&self) -> String {
        self.moteur
            .description()
            .unwrap_or_else(|| PILE_VIDE.to_string())
    }

    pub fn reset_graphe(&mut self) {
        self.graphe = ReglagesGraphe::default();
    }
}
