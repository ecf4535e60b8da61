// src/noyau/operateur.rs

use super::erreur::ErreurCalcul;

/// Les quatre opérations binaires du clavier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole utilisé dans la trace (“2 + 3 =”).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// a ∘ b en f64. Seule la division par zéro est refusée ;
    /// un débordement donne ±inf, que le format transforme en "Error".
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Divise => {
                if b == 0.0 {
                    Err(ErreurCalcul::DivisionParZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quatre_operations() {
        assert_eq!(Operateur::Plus.appliquer(2.0, 3.0), Ok(5.0));
        assert_eq!(Operateur::Moins.appliquer(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operateur::Fois.appliquer(2.0, 3.0), Ok(6.0));
        assert_eq!(Operateur::Divise.appliquer(3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn division_par_zero_refusee() {
        assert_eq!(
            Operateur::Divise.appliquer(10.0, 0.0),
            Err(ErreurCalcul::DivisionParZero)
        );
        // -0.0 == 0.0 en IEEE : refusé aussi
        assert_eq!(
            Operateur::Divise.appliquer(10.0, -0.0),
            Err(ErreurCalcul::DivisionParZero)
        );
    }

    #[test]
    fn debordement_donne_infini() {
        let v = Operateur::Fois.appliquer(f64::MAX, 10.0).unwrap();
        assert!(v.is_infinite());
    }
}
