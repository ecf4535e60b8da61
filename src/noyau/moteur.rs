//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice (machine à états, sans vue).
//!
//! Contrats :
//! - Chaque événement produit une `Transition` : l’affichage à rendre + une
//!   éventuelle tâche différée (`Tache`) que l’adaptateur doit programmer.
//! - Aucun appel d’horloge ni de rendu ici : le moteur est testable tel quel.
//! - Les tâches différées portent un numéro de génération ; une tâche dont la
//!   génération est dépassée est ignorée à l’échéance.
//! - La mémoire survit à "C" ; seul MC la remet à zéro.

use tracing::{debug, info};

use crate::config::Reglages;

use super::erreur::ErreurCalcul;
use super::evenement::Evenement;
use super::format::{analyser_nombre, formater_resultat};
use super::operateur::Operateur;

/// Ce que l’adaptateur doit afficher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    /// Entrée courante, ou message d’erreur.
    pub principal: String,
    /// Trace de l’opération, ou message mémoire temporaire.
    pub trace: String,
    /// true pendant l’état d’erreur (rendu distinct).
    pub erreur_active: bool,
}

/// Action différée, rejouée via `Moteur::echeance`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Minuterie {
    /// Sortie automatique de l’état d’erreur.
    EffacementErreur { generation: u64 },
    /// Fin du message mémoire : la trace capturée à la programmation revient.
    FinMessage {
        generation: u64,
        trace_precedente: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tache {
    pub delai_ms: u64,
    pub minuterie: Minuterie,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub affichage: Affichage,
    pub tache: Option<Tache>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    reglages: Reglages,

    // --- saisie / calcul ---
    saisie: String,
    operande: Option<String>,
    operateur: Option<Operateur>,
    attente_nouvelle_saisie: bool,
    memoire: f64,
    trace: String,

    // --- états temporaires ---
    erreur: Option<ErreurCalcul>,
    message: Option<String>,
    generation_erreur: u64,
    generation_message: u64,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl Moteur {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            saisie: "0".to_string(),
            operande: None,
            operateur: None,
            attente_nouvelle_saisie: false,
            memoire: 0.0,
            trace: String::new(),
            erreur: None,
            message: None,
            generation_erreur: 0,
            generation_message: 0,
        }
    }

    /* ------------------------ Lecture seule ------------------------ */
    // hors `memoire` et `affichage`, réservé aux tests

    #[cfg(test)]
    pub fn saisie(&self) -> &str {
        &self.saisie
    }

    #[cfg(test)]
    pub fn trace(&self) -> &str {
        &self.trace
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    #[cfg(test)]
    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    #[cfg(test)]
    pub fn operande(&self) -> Option<&str> {
        self.operande.as_deref()
    }

    #[cfg(test)]
    pub fn attend_nouvelle_saisie(&self) -> bool {
        self.attente_nouvelle_saisie
    }

    #[cfg(test)]
    pub fn erreur(&self) -> Option<ErreurCalcul> {
        self.erreur
    }

    pub fn affichage(&self) -> Affichage {
        match self.erreur {
            Some(e) => Affichage {
                principal: e.to_string(),
                trace: String::new(),
                erreur_active: true,
            },
            None => Affichage {
                principal: self.saisie.clone(),
                trace: self.message.clone().unwrap_or_else(|| self.trace.clone()),
                erreur_active: false,
            },
        }
    }

    /* ------------------------ Entrée principale ------------------------ */

    /// Applique un événement et renvoie ce qu’il faut afficher / programmer.
    pub fn traiter(&mut self, evt: Evenement) -> Transition {
        debug!(?evt, saisie = %self.saisie, "événement");

        if self.erreur.is_some() && evt != Evenement::Effacer {
            if self.reglages.verrouiller_pendant_erreur {
                debug!("état d’erreur : événement ignoré");
                return self.sans_tache();
            }
            // Sans verrou : la touche suivante congédie le bandeau
            // (et rend l’effacement automatique caduc).
            self.erreur = None;
        }

        let tache = match evt {
            Evenement::Chiffre(d) => {
                self.saisir_chiffre(d);
                None
            }
            Evenement::Virgule => {
                self.saisir_virgule();
                None
            }
            Evenement::Operateur(op) => self.choisir_operateur(op),
            Evenement::Egal => self.evaluer(),
            Evenement::Effacer => {
                self.effacer();
                None
            }
            Evenement::Pourcentage => {
                self.pourcentage();
                None
            }
            Evenement::Racine => self.racine_carree(),
            Evenement::MemoireEffacer => {
                self.memoire = 0.0;
                Some(self.annoncer("Memory cleared"))
            }
            Evenement::MemoireRappel => {
                self.saisie = formater_resultat(self.memoire);
                self.attente_nouvelle_saisie = true;
                Some(self.annoncer("Memory recalled"))
            }
            Evenement::MemoireAjouter => {
                self.memoire += analyser_nombre(&self.saisie);
                Some(self.annoncer("Added to memory"))
            }
            Evenement::MemoireSoustraire => {
                self.memoire -= analyser_nombre(&self.saisie);
                Some(self.annoncer("Subtracted from memory"))
            }
        };

        Transition {
            affichage: self.affichage(),
            tache,
        }
    }

    /// Rejoue une tâche différée arrivée à échéance.
    /// Renvoie le nouvel affichage, ou None si la tâche était périmée.
    pub fn echeance(&mut self, minuterie: &Minuterie) -> Option<Affichage> {
        match minuterie {
            Minuterie::EffacementErreur { generation } => {
                if self.erreur.is_none() || *generation != self.generation_erreur {
                    debug!(generation, "effacement d’erreur périmé");
                    return None;
                }
                info!("fin de l’état d’erreur");
                self.effacer();
            }
            Minuterie::FinMessage {
                generation,
                trace_precedente,
            } => {
                if self.message.is_none() || *generation != self.generation_message {
                    debug!(generation, "fin de message périmée");
                    return None;
                }
                self.message = None;
                self.trace = trace_precedente.clone();
            }
        }
        Some(self.affichage())
    }

    /* ------------------------ Saisie ------------------------ */

    fn saisir_chiffre(&mut self, d: u8) {
        if d > 9 {
            return;
        }
        let c = char::from(b'0' + d);

        if self.attente_nouvelle_saisie {
            self.saisie = c.to_string();
            self.attente_nouvelle_saisie = false;
        } else if self.saisie == "0" {
            // "0" + "0" reste "0" ; "0" + "5" donne "5"
            if c != '0' {
                self.saisie = c.to_string();
            }
        } else if self.saisie.chars().count() < self.reglages.longueur_max_saisie {
            self.saisie.push(c);
        }
    }

    fn saisir_virgule(&mut self) {
        if self.attente_nouvelle_saisie {
            self.saisie = "0.".to_string();
            self.attente_nouvelle_saisie = false;
        } else if !self.saisie.contains('.')
            && self.saisie.chars().count() < self.reglages.longueur_max_saisie
        {
            self.saisie.push('.');
        }
    }

    /* ------------------------ Opérations ------------------------ */

    /// Chaînage gauche-droite, sans priorité : 2 + 3 × 4 = (2+3)×4.
    fn choisir_operateur(&mut self, op: Operateur) -> Option<Tache> {
        if self.operateur.is_some() && !self.attente_nouvelle_saisie {
            if let Some(tache) = self.evaluer() {
                // l’évaluation intermédiaire a échoué : on reste en erreur
                return Some(tache);
            }
        }

        self.operateur = Some(op);
        self.operande = Some(self.saisie.clone());
        self.attente_nouvelle_saisie = true;
        self.ecrire_trace(format!("{} {}", self.saisie, op.symbole()));
        None
    }

    fn evaluer(&mut self) -> Option<Tache> {
        let (Some(op), Some(operande)) = (self.operateur, self.operande.as_deref()) else {
            return None;
        };

        let a = analyser_nombre(operande);
        let b = analyser_nombre(&self.saisie);

        match op.appliquer(a, b) {
            Ok(v) => {
                let trace = format!("{operande} {} {} =", op.symbole(), self.saisie);
                self.ecrire_trace(trace);
                self.saisie = formater_resultat(v);
                self.operateur = None;
                self.operande = None;
                self.attente_nouvelle_saisie = true;
                None
            }
            Err(e) => Some(self.entrer_en_erreur(e)),
        }
    }

    /// L’opération en attente reste armée : 50 + 10 % = 50.1
    fn pourcentage(&mut self) {
        let v = analyser_nombre(&self.saisie) / 100.0;
        self.ecrire_trace(format!("{}% =", self.saisie));
        self.saisie = formater_resultat(v);
        self.attente_nouvelle_saisie = true;
    }

    fn racine_carree(&mut self) -> Option<Tache> {
        let v = analyser_nombre(&self.saisie);
        if v < 0.0 {
            return Some(self.entrer_en_erreur(ErreurCalcul::RacineNegative));
        }
        self.ecrire_trace(format!("√{} =", self.saisie));
        self.saisie = formater_resultat(v.sqrt());
        self.attente_nouvelle_saisie = true;
        None
    }

    /// "C" : tout sauf la mémoire. Idempotent.
    fn effacer(&mut self) {
        self.saisie = "0".to_string();
        self.operande = None;
        self.operateur = None;
        self.attente_nouvelle_saisie = false;
        self.trace.clear();
        self.erreur = None;
        self.message = None;
    }

    /* ------------------------ Utilitaires ------------------------ */

    /// Une nouvelle trace remplace aussi un éventuel message mémoire.
    fn ecrire_trace(&mut self, trace: String) {
        self.trace = trace;
        self.message = None;
    }

    fn entrer_en_erreur(&mut self, e: ErreurCalcul) -> Tache {
        info!(erreur = %e, "état d’erreur");
        self.erreur = Some(e);
        self.message = None;
        self.generation_erreur += 1;
        Tache {
            delai_ms: self.reglages.delai_erreur_ms,
            minuterie: Minuterie::EffacementErreur {
                generation: self.generation_erreur,
            },
        }
    }

    fn annoncer(&mut self, texte: &str) -> Tache {
        debug!(texte, memoire = self.memoire, "message mémoire");
        self.message = Some(texte.to_string());
        self.generation_message += 1;
        Tache {
            delai_ms: self.reglages.delai_message_ms,
            minuterie: Minuterie::FinMessage {
                generation: self.generation_message,
                trace_precedente: self.trace.clone(),
            },
        }
    }

    fn sans_tache(&self) -> Transition {
        Transition {
            affichage: self.affichage(),
            tache: None,
        }
    }
}
