// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, vue, graphe, stockage)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod graphe;
pub mod stockage;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.vue_graphe {
            // ESC = retour à la calculatrice
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.vue_graphe = false;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                self.ui_graphe(ui);
            });
            return;
        }

        self.clavier(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        stockage::sauver(self, storage);
    }
}
