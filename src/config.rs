//! src/config.rs
//!
//! Réglages de la calculatrice (fichier TOML optionnel).
//!
//! Rôle : fournir les bornes et délais du moteur sans rien coder “en dur”
//! ailleurs. Toutes les clés ont une valeur par défaut ; un fichier partiel
//! est accepté.
//!
//! ```toml
//! longueur_max_saisie = 12
//! delai_erreur_ms = 2000
//! delai_message_ms = 1500
//! verrouiller_pendant_erreur = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Variable d’environnement (natif) qui pointe vers le fichier de réglages.
pub const VAR_CONFIG: &str = "CALCULATRICE_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    /// Longueur maximale de l’entrée pendant la frappe.
    pub longueur_max_saisie: usize,
    /// Durée d’affichage de l’état d’erreur avant remise à zéro automatique.
    pub delai_erreur_ms: u64,
    /// Durée d’affichage des messages mémoire (MC/MR/M+/M−).
    pub delai_message_ms: u64,
    /// true : pendant l’état d’erreur, seul "C" est pris en compte.
    pub verrouiller_pendant_erreur: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            longueur_max_saisie: 12,
            delai_erreur_ms: 2000,
            delai_message_ms: 1500,
            verrouiller_pendant_erreur: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture impossible de {chemin}: {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide: {0}")]
    Syntaxe(#[from] toml::de::Error),

    #[error("réglage invalide: {0}")]
    Invalide(&'static str),
}

impl Reglages {
    /// Parse + valide un texte TOML.
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        let r: Reglages = toml::from_str(texte)?;
        r.valider()?;
        Ok(r)
    }

    pub fn depuis_fichier(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.display().to_string(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    /// Natif : lit le fichier désigné par `CALCULATRICE_CONFIG` s’il existe.
    /// Toute erreur est journalisée puis remplacée par les valeurs par défaut
    /// (l’interface doit toujours démarrer).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn depuis_environnement() -> Self {
        let Some(chemin) = std::env::var_os(VAR_CONFIG) else {
            tracing::debug!("{} absent, réglages par défaut", VAR_CONFIG);
            return Self::default();
        };

        match Self::depuis_fichier(Path::new(&chemin)) {
            Ok(r) => {
                tracing::info!(?r, "réglages chargés");
                r
            }
            Err(e) => {
                tracing::warn!(erreur = %e, "réglages ignorés, valeurs par défaut");
                Self::default()
            }
        }
    }

    fn valider(&self) -> Result<(), ErreurConfig> {
        if self.longueur_max_saisie == 0 {
            return Err(ErreurConfig::Invalide("longueur_max_saisie doit être >= 1"));
        }
        if self.delai_erreur_ms == 0 {
            return Err(ErreurConfig::Invalide("delai_erreur_ms doit être > 0"));
        }
        if self.delai_message_ms == 0 {
            return Err(ErreurConfig::Invalide("delai_message_ms doit être > 0"));
        }
        Ok(())
    }
}
