// src/app/vue.rs
//
// Vue calculatrice (UI egui) — natif + web
// ----------------------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé RPN : chiffres, ⏎ (enter), opérateurs de la table, mémoire M
// - Clavier : chiffres/point tapés, Enter = ⏎
//
// Note :
// - Les symboles des boutons sont EXACTEMENT ceux de la table du noyau
//   (× ÷ − avec leurs caractères unicode).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::jetons::{
    SYMB_ADD, SYMB_DIV, SYMB_MUL, SYMB_PI, SYMB_RACINE, SYMB_SIN, SYMB_SUB,
};

const TAILLE_TOUCHE: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice RPN");
        ui.add_space(6.0);

        self.ui_affichages(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_sized([TAILLE_TOUCHE[0] * 2.0, TAILLE_TOUCHE[1]], egui::Button::new("Graphe"))
                .on_hover_text("Trace le programme en fonction de M")
                .clicked()
            {
                self.vue_graphe = true;
            }
        });
    }

    fn ui_affichages(&mut self, ui: &mut egui::Ui) {
        ui.label("Programme :");
        Self::champ_monospace(ui, "pile_out", &self.pile);

        ui.add_space(4.0);

        Self::champ_monospace(ui, "affichage_out", &self.affichage);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche_chiffre(ui, '7');
                self.touche_chiffre(ui, '8');
                self.touche_chiffre(ui, '9');
                self.touche_op(ui, SYMB_DIV);
                ui.end_row();

                self.touche_chiffre(ui, '4');
                self.touche_chiffre(ui, '5');
                self.touche_chiffre(ui, '6');
                self.touche_op(ui, SYMB_MUL);
                ui.end_row();

                self.touche_chiffre(ui, '1');
                self.touche_chiffre(ui, '2');
                self.touche_chiffre(ui, '3');
                self.touche_op(ui, SYMB_SUB);
                ui.end_row();

                self.touche_chiffre(ui, '0');
                self.touche_chiffre(ui, '.');
                self.touche_action(ui, "⏎", "Pousse le nombre affiché", Action::Enter);
                self.touche_op(ui, SYMB_ADD);
                ui.end_row();

                self.touche_op(ui, SYMB_RACINE);
                self.touche_op(ui, SYMB_SIN);
                self.touche_op(ui, SYMB_PI);
                self.touche_action(ui, "AC", "Efface le programme", Action::AllClear);
                ui.end_row();

                self.touche_action(ui, "→M", "M = nombre affiché", Action::VarSet);
                self.touche_action(ui, "M", "Pousse la variable M", Action::VarUse);
                self.touche_action(ui, "CM", "Oublie la valeur de M", Action::MemClear);
                ui.label("");
                ui.end_row();
            });
    }

    /// Clavier physique : chiffres/point (événements texte) + Enter.
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let (texte, enter) = ctx.input(|i| {
            let mut t = String::new();
            for e in &i.events {
                if let egui::Event::Text(s) = e {
                    t.push_str(s);
                }
            }
            (t, i.key_pressed(egui::Key::Enter))
        });

        for c in texte.chars() {
            self.append_digit(c);
        }
        if enter {
            self.enter();
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn touche_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let label = c.to_string();
        if ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label)).clicked() {
            self.append_digit(c);
        }
    }

    fn touche_op(&mut self, ui: &mut egui::Ui, symbole: &str) {
        if ui.add_sized(TAILLE_TOUCHE, egui::Button::new(symbole)).clicked() {
            self.operate(symbole);
        }
    }

    fn touche_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Enter => self.enter(),
                Action::AllClear => self.all_clear(),
                Action::VarSet => self.var_set(),
                Action::VarUse => self.var_use(),
                Action::MemClear => self.mem_clear(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Enter,
    AllClear,
    VarSet,
    VarUse,
    MemClear,
}
