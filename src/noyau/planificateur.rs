// src/noyau/planificateur.rs
//
// File des tâches différées (effacement d’erreur, fin de message mémoire).
// L’horloge est fournie par l’appelant en millisecondes monotones :
// egui::InputState::time côté UI, valeurs fixes côté tests.

use super::moteur::{Minuterie, Tache};

#[derive(Clone, Debug, Default)]
pub struct Planificateur {
    // (échéance ms, ordre d’arrivée, minuterie)
    taches: Vec<(u64, u64, Minuterie)>,
    compteur: u64,
}

impl Planificateur {
    pub fn programmer(&mut self, maintenant_ms: u64, tache: Tache) {
        let echeance = maintenant_ms.saturating_add(tache.delai_ms);
        tracing::debug!(echeance, minuterie = ?tache.minuterie, "tâche programmée");
        self.taches.push((echeance, self.compteur, tache.minuterie));
        self.compteur += 1;
    }

    /// Retire et renvoie les tâches échues, par échéance puis ordre d’arrivée.
    pub fn echues(&mut self, maintenant_ms: u64) -> Vec<Minuterie> {
        let (mut pretes, restantes): (Vec<_>, Vec<_>) = self
            .taches
            .drain(..)
            .partition(|(echeance, _, _)| *echeance <= maintenant_ms);
        self.taches = restantes;

        pretes.sort_by_key(|(echeance, ordre, _)| (*echeance, *ordre));
        pretes.into_iter().map(|(_, _, m)| m).collect()
    }

    pub fn prochaine_echeance(&self) -> Option<u64> {
        self.taches.iter().map(|(echeance, _, _)| *echeance).min()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.taches.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.taches.is_empty()
    }
}
