// src/app/graphe.rs
//
// Vue graphe (UI egui)
// --------------------
// - y = programme(M), échantillonné par noyau::trace (une colonne = un point)
// - axes + graduations
// - pincement / ctrl+molette : zoom ; glisser : déplace l’origine
// - double-clic : zoom ×2 et recentre sur le point cliqué

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::trace::{echantillonner, Cadre, Point, Trace};

/// Zoom appliqué par un double-clic.
const FACTEUR_DOUBLE_CLIC: f32 = 2.0;

/// Écart visé entre deux graduations (points écran).
const ECART_GRADUATION_MIN: f32 = 40.0;

const COULEUR_AXES: egui::Color32 = egui::Color32::from_rgb(40, 90, 220);

impl AppCalc {
    pub fn ui_graphe(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("← Calculatrice").clicked() {
                self.vue_graphe = false;
            }
            if ui.button("Recentrer").clicked() {
                self.reset_graphe();
            }
            ui.separator();
            ui.monospace(self.titre_graphe());
        });

        let taille = ui.available_size();
        let (resp, painter) = ui.allocate_painter(taille, egui::Sense::click_and_drag());
        let rect = resp.rect;
        let centre = rect.center();

        // --- gestes ---
        if resp.hovered() {
            let zoom = ui.input(|i| i.zoom_delta());
            if zoom != 1.0 {
                self.graphe.zoomer(zoom);
            }
        }

        let mut decalage = self
            .graphe
            .decalage_origine
            .map(|[x, y]| egui::vec2(x, y))
            .unwrap_or(egui::Vec2::ZERO);

        if resp.dragged() {
            decalage += resp.drag_delta();
            self.graphe.decalage_origine = Some([decalage.x, decalage.y]);
        }

        if resp.double_clicked() {
            if let Some(clic) = resp.interact_pointer_pos() {
                self.graphe.zoomer(FACTEUR_DOUBLE_CLIC);
                decalage += centre - clic;
                self.graphe.decalage_origine = Some([decalage.x, decalage.y]);
            }
        }

        let origine = centre + decalage;
        let ppu = self.graphe.points_par_unite;

        // --- dessin ---
        dessiner_axes(&painter, rect, origine, ppu, ui.visuals().weak_text_color());

        let cadre = Cadre {
            x_min: rect.left() as f64,
            x_max: rect.right() as f64,
            origine: Point {
                x: origine.x as f64,
                y: origine.y as f64,
            },
            points_par_unite: ppu as f64,
            echelle: ui.ctx().pixels_per_point() as f64,
        };

        let trait_courbe = egui::Stroke::new(1.5, ui.visuals().strong_text_color());
        match echantillonner(&mut self.moteur, &cadre) {
            Trace::Indisponible(p) => {
                painter.circle_filled(vers_pos2(p), 2.5, trait_courbe.color);
            }
            Trace::Courbes(courbes) => {
                for courbe in courbes {
                    let points: Vec<egui::Pos2> = courbe.into_iter().map(vers_pos2).collect();
                    painter.add(egui::Shape::line(points, trait_courbe));
                }
            }
        }
    }
}

fn vers_pos2(p: Point) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

/// Pas des graduations (en unités) : 1, 2, 5 × 10^k, écart >= ECART_GRADUATION_MIN.
fn pas_graduation(ppu: f32) -> f32 {
    let brut = ECART_GRADUATION_MIN / ppu;
    let base = 10f32.powf(brut.log10().floor());
    for m in [1.0, 2.0, 5.0, 10.0] {
        if base * m >= brut {
            return base * m;
        }
    }
    base * 10.0
}

fn dessiner_axes(
    painter: &egui::Painter,
    rect: egui::Rect,
    origine: egui::Pos2,
    ppu: f32,
    couleur_texte: egui::Color32,
) {
    let trait_axes = egui::Stroke::new(1.0, COULEUR_AXES);

    painter.line_segment(
        [egui::pos2(rect.left(), origine.y), egui::pos2(rect.right(), origine.y)],
        trait_axes,
    );
    painter.line_segment(
        [egui::pos2(origine.x, rect.top()), egui::pos2(origine.x, rect.bottom())],
        trait_axes,
    );

    let pas = pas_graduation(ppu);
    let ecart = pas * ppu;
    if !(ecart.is_finite() && ecart > 0.0) {
        return;
    }
    let police = egui::FontId::monospace(10.0);
    let marque = 4.0;

    // axe x
    let k_min = ((rect.left() - origine.x) / ecart).ceil() as i64;
    let k_max = ((rect.right() - origine.x) / ecart).floor() as i64;
    for k in k_min..=k_max {
        if k == 0 {
            continue;
        }
        let x = origine.x + k as f32 * ecart;
        painter.line_segment(
            [egui::pos2(x, origine.y - marque), egui::pos2(x, origine.y + marque)],
            trait_axes,
        );
        painter.text(
            egui::pos2(x, origine.y + marque + 1.0),
            egui::Align2::CENTER_TOP,
            format_graduation(k as f32 * pas),
            police.clone(),
            couleur_texte,
        );
    }

    // axe y (écran vers le bas)
    let k_min = ((origine.y - rect.bottom()) / ecart).ceil() as i64;
    let k_max = ((origine.y - rect.top()) / ecart).floor() as i64;
    for k in k_min..=k_max {
        if k == 0 {
            continue;
        }
        let y = origine.y - k as f32 * ecart;
        painter.line_segment(
            [egui::pos2(origine.x - marque, y), egui::pos2(origine.x + marque, y)],
            trait_axes,
        );
        painter.text(
            egui::pos2(origine.x + marque + 2.0, y),
            egui::Align2::LEFT_CENTER,
            format_graduation(k as f32 * pas),
            police.clone(),
            couleur_texte,
        );
    }
}

fn format_graduation(v: f32) -> String {
    // 0.30000001 -> 0.3
    let t = format!("{v:.4}");
    t.trim_end_matches('0').trim_end_matches('.').to_string()
}
