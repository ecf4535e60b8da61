// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : trace (petite ligne) + entrée (grande, alignée à droite)
// - État d’erreur : couleur d’erreur sur l’écran
// - Pavé : grille 4 colonnes générée depuis noyau::PAVE
// - Clavier : traduit en événements par noyau::depuis_touche (voir app.rs)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Evenement, PAVE};

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant_ms: u64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui, maintenant_ms);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let visuals = ui.visuals().clone();
        let couleur = if self.affichage.erreur_active {
            visuals.error_fg_color
        } else {
            visuals.strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(visuals.extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    // indicateur mémoire (comme sur une calculatrice de poche)
                    if self.moteur.memoire() != 0.0 {
                        ui.monospace("M");
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&self.affichage.trace)
                                .monospace()
                                .color(visuals.weak_text_color()),
                        );
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage.principal)
                            .monospace()
                            .size(32.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant_ms: u64) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for &evt in *ligne {
                        self.bouton(ui, evt, maintenant_ms);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, evt: Evenement, maintenant_ms: u64) {
        let mut resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(evt.libelle()));
        if let Some(aide) = evt.aide() {
            resp = resp.on_hover_text(aide);
        }
        if resp.clicked() {
            self.envoyer(evt, maintenant_ms);
        }
    }
}
