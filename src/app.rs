// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre dans une frame :
// 1) tâches différées échues (effacement d’erreur, fin de message)
// 2) clavier
// 3) dessin + clics
// 4) réveil programmé à la prochaine échéance (pas de repaint continu)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

use crate::noyau::depuis_touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant_ms = ctx.input(|i| (i.time * 1000.0) as u64);

        self.avancer(maintenant_ms);

        for touche in touches_clavier(ctx) {
            if let Some(evt) = depuis_touche(&touche) {
                self.envoyer(evt, maintenant_ms);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant_ms);
        });

        if let Some(echeance) = self.prochaine_echeance() {
            let attente = echeance.saturating_sub(maintenant_ms);
            ctx.request_repaint_after(Duration::from_millis(attente));
        }
    }
}

/// Touches de la frame, au format attendu par `depuis_touche`.
fn touches_clavier(ctx: &egui::Context) -> Vec<String> {
    let widget_focus = ctx.memory(|m| m.focused().is_some());
    ctx.input(|i| traduire_evenements(&i.events, widget_focus))
}

/// Un caractère par texte tapé, ou le nom de la touche spéciale.
///
/// Si un bouton a le focus, egui le déclenche déjà sur Entrée :
/// la touche n’est pas traduite une seconde fois.
fn traduire_evenements(events: &[egui::Event], widget_focus: bool) -> Vec<String> {
    let mut touches = Vec::new();
    for e in events {
        match e {
            egui::Event::Text(t) => touches.extend(t.chars().map(String::from)),
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                let nom = match key {
                    egui::Key::Enter if widget_focus => continue,
                    egui::Key::Enter => "Enter",
                    egui::Key::Escape => "Escape",
                    egui::Key::Backspace => "Backspace",
                    _ => continue,
                };
                touches.push(nom.to_string());
            }
            _ => {}
        }
    }
    touches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touche(key: egui::Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn entree_sans_focus_donne_egal() {
        let events = [touche(egui::Key::Enter, true), touche(egui::Key::Enter, false)];
        assert_eq!(traduire_evenements(&events, false), vec!["Enter"]);
    }

    #[test]
    fn entree_sur_bouton_focalise_une_seule_fois() {
        // le bouton focalisé reçoit déjà le clic : pas de second "="
        let events = [touche(egui::Key::Enter, true)];
        assert!(traduire_evenements(&events, true).is_empty());
    }

    #[test]
    fn texte_et_effacement_malgre_le_focus() {
        let events = [
            egui::Event::Text("12+".to_string()),
            touche(egui::Key::Escape, true),
            touche(egui::Key::Tab, true),
        ];
        assert_eq!(
            traduire_evenements(&events, true),
            vec!["1", "2", "+", "Escape"]
        );
    }

    #[test]
    fn entree_sur_chiffre_focalise_n_evalue_pas() {
        let mut app = AppCalc::new(crate::config::Reglages::default());
        for t in traduire_evenements(&[egui::Event::Text("2+3".to_string())], false) {
            if let Some(evt) = depuis_touche(&t) {
                app.envoyer(evt, 0);
            }
        }
        // Entrée sur le bouton "3" focalisé : egui émet le clic
        app.envoyer(crate::noyau::Evenement::Chiffre(3), 0);
        for t in traduire_evenements(&[touche(egui::Key::Enter, true)], true) {
            if let Some(evt) = depuis_touche(&t) {
                app.envoyer(evt, 0);
            }
        }
        assert_eq!(app.affichage.principal, "33");
        assert_eq!(app.affichage.trace, "2 +");
    }
}
