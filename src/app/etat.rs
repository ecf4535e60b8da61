//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : relier le moteur (noyau) et la file des tâches différées, et garder
//! le dernier affichage produit. La vue ne fait que dessiner `affichage` et
//! renvoyer les clics / touches via `envoyer`.
//!
//! Contrats :
//! - Une seule instance de moteur par AppCalc (pas d’état global).
//! - Toute tâche renvoyée par le moteur est programmée ici.
//! - L’horloge vient de l’appelant (ms monotones) : testable sans egui.

use crate::config::Reglages;
use crate::noyau::{Affichage, Evenement, Moteur, Planificateur};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,
    pub planificateur: Planificateur,

    // --- sortie ---
    pub affichage: Affichage,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        let moteur = Moteur::new(reglages);
        let affichage = moteur.affichage();
        Self {
            moteur,
            planificateur: Planificateur::default(),
            affichage,
        }
    }

    /// Clic sur le pavé ou touche clavier.
    pub fn envoyer(&mut self, evt: Evenement, maintenant_ms: u64) {
        let t = self.moteur.traiter(evt);
        if let Some(tache) = t.tache {
            self.planificateur.programmer(maintenant_ms, tache);
        }
        self.affichage = t.affichage;
    }

    /// Rejoue les tâches échues (à appeler à chaque frame).
    pub fn avancer(&mut self, maintenant_ms: u64) {
        for minuterie in self.planificateur.echues(maintenant_ms) {
            if let Some(a) = self.moteur.echeance(&minuterie) {
                self.affichage = a;
            }
        }
    }

    /// Prochaine échéance (ms), pour réveiller l’UI au bon moment.
    pub fn prochaine_echeance(&self) -> Option<u64> {
        self.planificateur.prochaine_echeance()
    }
}
