//! Événements d’entrée (pavé + clavier).
//!
//! Le noyau ne connaît ni souris ni DOM : l’adaptateur traduit les clics et
//! les touches en `Evenement`, puis appelle `Moteur::traiter`.

use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    /// Chiffre 0..=9
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    Effacer,
    Pourcentage,
    Racine,
    MemoireEffacer,
    MemoireRappel,
    MemoireAjouter,
    MemoireSoustraire,
}

impl Evenement {
    /// Libellé du bouton correspondant.
    pub fn libelle(self) -> String {
        match self {
            Evenement::Chiffre(d) => d.to_string(),
            Evenement::Virgule => ".".to_string(),
            Evenement::Operateur(op) => op.symbole().to_string(),
            Evenement::Egal => "=".to_string(),
            Evenement::Effacer => "C".to_string(),
            Evenement::Pourcentage => "%".to_string(),
            Evenement::Racine => "√".to_string(),
            Evenement::MemoireEffacer => "MC".to_string(),
            Evenement::MemoireRappel => "MR".to_string(),
            Evenement::MemoireAjouter => "M+".to_string(),
            Evenement::MemoireSoustraire => "M−".to_string(),
        }
    }

    /// Bulle d’aide (boutons non évidents seulement).
    pub fn aide(self) -> Option<&'static str> {
        match self {
            Evenement::Effacer => Some("Tout effacer (la mémoire est conservée)"),
            Evenement::Pourcentage => Some("Divise l’entrée par 100"),
            Evenement::Racine => Some("Racine carrée"),
            Evenement::MemoireEffacer => Some("Mémoire à zéro"),
            Evenement::MemoireRappel => Some("Rappel de la mémoire"),
            Evenement::MemoireAjouter => Some("Ajoute l’entrée à la mémoire"),
            Evenement::MemoireSoustraire => Some("Soustrait l’entrée de la mémoire"),
            _ => None,
        }
    }
}

/* ------------------------ Clavier ------------------------ */

/// Traduit une touche en événement.
///
/// `touche` est soit un caractère tapé ("7", "+", "c"…), soit le nom d’une
/// touche spéciale : "Enter", "Escape", "Backspace". Le reste est ignoré.
pub fn depuis_touche(touche: &str) -> Option<Evenement> {
    let evt = match touche {
        "Enter" | "=" => Evenement::Egal,
        "Escape" | "Backspace" | "c" | "C" => Evenement::Effacer,
        "." => Evenement::Virgule,
        "+" => Evenement::Operateur(Operateur::Plus),
        "-" => Evenement::Operateur(Operateur::Moins),
        "*" => Evenement::Operateur(Operateur::Fois),
        "/" => Evenement::Operateur(Operateur::Divise),
        "%" => Evenement::Pourcentage,
        _ => {
            let mut it = touche.chars();
            let c = it.next()?;
            if it.next().is_some() {
                return None;
            }
            let d = c.to_digit(10)?;
            Evenement::Chiffre(d as u8)
        }
    };
    Some(evt)
}

/* ------------------------ Pavé ------------------------ */

type E = Evenement;

/// Disposition du pavé (ligne par ligne) :
/// ```text
/// [MC] [MR] [M+] [M−]
/// [C ] [√ ] [% ] [÷ ]
/// [7 ] [8 ] [9 ] [× ]
/// [4 ] [5 ] [6 ] [− ]
/// [1 ] [2 ] [3 ] [+ ]
/// [0 ] [. ] [= ]
/// ```
pub const PAVE: &[&[Evenement]] = &[
    &[E::MemoireEffacer, E::MemoireRappel, E::MemoireAjouter, E::MemoireSoustraire],
    &[E::Effacer, E::Racine, E::Pourcentage, E::Operateur(Operateur::Divise)],
    &[E::Chiffre(7), E::Chiffre(8), E::Chiffre(9), E::Operateur(Operateur::Fois)],
    &[E::Chiffre(4), E::Chiffre(5), E::Chiffre(6), E::Operateur(Operateur::Moins)],
    &[E::Chiffre(1), E::Chiffre(2), E::Chiffre(3), E::Operateur(Operateur::Plus)],
    &[E::Chiffre(0), E::Virgule, E::Egal],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::operateur::Operateur::{Divise, Fois, Moins, Plus};

    #[test]
    fn chiffres_clavier() {
        for d in 0..=9u8 {
            let s = d.to_string();
            assert_eq!(depuis_touche(&s), Some(E::Chiffre(d)), "touche {s:?}");
        }
    }

    #[test]
    fn operateurs_clavier() {
        assert_eq!(depuis_touche("+"), Some(E::Operateur(Plus)));
        assert_eq!(depuis_touche("-"), Some(E::Operateur(Moins)));
        assert_eq!(depuis_touche("*"), Some(E::Operateur(Fois)));
        assert_eq!(depuis_touche("/"), Some(E::Operateur(Divise)));
    }

    #[test]
    fn fonctions_clavier() {
        assert_eq!(depuis_touche("Enter"), Some(E::Egal));
        assert_eq!(depuis_touche("="), Some(E::Egal));
        assert_eq!(depuis_touche("%"), Some(E::Pourcentage));
        assert_eq!(depuis_touche("."), Some(E::Virgule));
        for t in ["Escape", "Backspace", "c", "C"] {
            assert_eq!(depuis_touche(t), Some(E::Effacer), "touche {t:?}");
        }
    }

    #[test]
    fn touches_ignorees() {
        for t in ["", "a", "12", "Tab", "x", "^", "٣"] {
            assert_eq!(depuis_touche(t), None, "touche {t:?}");
        }
    }

    #[test]
    fn pave_complet() {
        // chaque chiffre une fois, libellés non vides
        let tous: Vec<Evenement> = PAVE.iter().flat_map(|l| l.iter().copied()).collect();
        for d in 0..=9u8 {
            assert_eq!(tous.iter().filter(|e| **e == E::Chiffre(d)).count(), 1);
        }
        assert!(tous.contains(&E::Racine));
        assert!(tous.contains(&E::MemoireSoustraire));
        assert!(tous.iter().all(|e| !e.libelle().is_empty()));
    }
}
