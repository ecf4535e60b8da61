//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - operateur.rs     : + − × ÷ et leur application f64
//! - erreur.rs        : erreurs qui déclenchent l’état d’erreur temporisé
//! - format.rs        : lecture tolérante + affichage des résultats
//! - evenement.rs     : événements d’entrée, clavier, disposition du pavé
//! - moteur.rs        : machine à états (saisie, chaînage, mémoire)
//! - planificateur.rs : échéances des tâches différées

pub mod erreur;
pub mod evenement;
pub mod format;
pub mod moteur;
pub mod operateur;
pub mod planificateur;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use evenement::{depuis_touche, Evenement, PAVE};
pub use moteur::{Affichage, Moteur};
pub use planificateur::Planificateur;
