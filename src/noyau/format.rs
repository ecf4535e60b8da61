// src/noyau/format.rs
//
// Affichage des résultats (f64 -> texte d’écran)
// ----------------------------------------------
// Ordre des règles :
// 1) non fini                         -> "Error" (pas l’état d’erreur !)
// 2) |v| >= 1e12 ou 0 < |v| <= 1e-6   -> exponentielle, 6 décimales
// 3) décimal simple, arrondi à 8 décimales si besoin (zéros finaux retirés)
// 4) encore trop long (> 12 caractères, exponentielle comprise)
//    -> exponentielle, 5 décimales
//
// L’exponentielle suit la convention navigateur : "1.234568e+12", "1.234e-7".

/// Texte affiché pour un résultat non fini.
pub const TEXTE_ERREUR: &str = "Error";

const SEUIL_GRAND: f64 = 1e12;
const SEUIL_PETIT: f64 = 1e-6;
const DECIMALES_MAX: usize = 8;
const LARGEUR_ECRAN: usize = 12;

/* ------------------------ Lecture ------------------------ */

/// Lit une saisie comme nombre.
/// Une chaîne mal formée (ex: "Error") vaut 0 : l’écran ne plante jamais.
pub fn analyser_nombre(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/* ------------------------ Écriture ------------------------ */

/// Chiffres significatifs max d’un f64 en décimal exact (sous-normaux compris).
const CHIFFRES_EXACTS: usize = 800;

/// Exponentielle “navigateur” : mantisse à `decimales` chiffres, exposant signé.
///
/// Arrondi à mi-chemin loin de zéro, sur la valeur binaire exacte :
/// 1234562500000 -> "1.234563e+12" (et non l’arrondi pair de `{:e}`).
fn exponentielle(v: f64, decimales: usize) -> String {
    // développement décimal exact de |v| : "d.ddd…ddde<exp>"
    let exact = format!("{:.*e}", CHIFFRES_EXACTS, v.abs());
    let Some((mantisse, exp)) = exact.split_once('e') else {
        return exact;
    };
    let Ok(mut exp) = exp.parse::<i32>() else {
        return exact;
    };

    let chiffres: Vec<u8> = mantisse
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let mut garde = chiffres[..=decimales].to_vec();

    if chiffres.get(decimales + 1).is_some_and(|&d| d >= 5) {
        let mut i = garde.len();
        loop {
            if i == 0 {
                // 9.99… -> 10.0… : on décale d’un rang
                garde.insert(0, 1);
                garde.pop();
                exp += 1;
                break;
            }
            i -= 1;
            if garde[i] == 9 {
                garde[i] = 0;
            } else {
                garde[i] += 1;
                break;
            }
        }
    }

    let mut sortie = String::with_capacity(decimales + 8);
    if v.is_sign_negative() {
        sortie.push('-');
    }
    sortie.push(char::from(b'0' + garde[0]));
    if decimales > 0 {
        sortie.push('.');
        sortie.extend(garde[1..].iter().map(|&d| char::from(b'0' + d)));
    }
    if exp < 0 {
        sortie.push_str(&format!("e{exp}"));
    } else {
        sortie.push_str(&format!("e+{exp}"));
    }
    sortie
}

fn nb_decimales(s: &str) -> usize {
    s.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// Retire les zéros finaux d’une partie décimale, puis le point s’il reste seul.
fn retirer_zeros_finaux(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Politique d’affichage d’un résultat (voir l’en-tête du fichier).
pub fn formater_resultat(v: f64) -> String {
    if !v.is_finite() {
        return TEXTE_ERREUR.to_string();
    }
    // évite "-0"
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    let s = if a >= SEUIL_GRAND || a <= SEUIL_PETIT {
        exponentielle(v, 6)
    } else {
        let simple = format!("{v}");
        if nb_decimales(&simple) > DECIMALES_MAX {
            retirer_zeros_finaux(&format!("{:.*}", DECIMALES_MAX, v))
        } else {
            simple
        }
    };

    if s.chars().count() > LARGEUR_ECRAN {
        return exponentielle(v, 5);
    }
    s
}
