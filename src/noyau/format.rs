// src/noyau/format.rs
//
// Affichage des nombres : Display de f64 (aller-retour le plus court, jamais
// d’exposant, 10.0 -> "10"). Pas de séparateurs, pas de locale.

/// Jeton affiché à la place d’un résultat impossible (÷0, dépassement).
pub const JETON_ERREUR: &str = "Error";

/// Lecture de l’affichage. None si ce n’est pas un nombre (ex: jeton d’erreur).
pub fn lire(affichage: &str) -> Option<f64> {
    affichage.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Rendu d’un résultat.
/// - non fini (inf, NaN) => jeton d’erreur : l’affichage doit rester relisible
/// - -0 => "0" (sinon "-0" puis un chiffre donnerait "-05")
pub fn formater(x: f64) -> String {
    if !x.is_finite() {
        return JETON_ERREUR.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}
