//! Erreurs “opérationnelles” du noyau.
//!
//! Seules deux conditions font entrer la calculatrice en état d’erreur
//! (bandeau temporisé) : division par zéro et racine d’un négatif.
//! Le texte `Display` est exactement le message affiché.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("Cannot divide by zero")]
    DivisionParZero,

    #[error("Invalid input for square root")]
    RacineNegative,
}

#[cfg(test)]
mod tests {
    use super::ErreurCalcul;

    #[test]
    fn messages_affiches() {
        assert_eq!(
            ErreurCalcul::RacineNegative.to_string(),
            "Invalid input for square root"
        );
        assert_eq!(
            ErreurCalcul::DivisionParZero.to_string(),
            "Cannot divide by zero"
        );
    }
}
