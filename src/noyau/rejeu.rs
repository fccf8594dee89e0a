// src/noyau/rejeu.rs
//
// Rejeu sans interface : une suite de libellés -> une suite d’affichages.
// Sert à la ligne de commande (--touches) et aux tests.
//
// Découpage :
// - séparateur = espaces
// - un jeton qui est un libellé connu -> sa touche ("AC", "+/-", "÷", "*", ...)
// - un jeton fait seulement de chiffres et de points -> une touche par caractère
//   ("12.5" -> 1 2 . 5)
// - sinon : erreur (on ne devine pas)

use super::moteur::Moteur;
use super::touche::{ErreurTouche, Touche};

#[derive(Clone, Debug, PartialEq)]
pub struct Etape {
    pub touche: Touche,
    pub affichage: String,
}

pub fn decouper(sequence: &str) -> Result<Vec<Touche>, ErreurTouche> {
    let mut out = Vec::new();

    for jeton in sequence.split_whitespace() {
        if let Ok(t) = jeton.parse::<Touche>() {
            out.push(t);
            continue;
        }

        if jeton.chars().all(|c| c.is_ascii_digit() || c == '.') {
            out.extend(jeton.chars().filter_map(Touche::depuis_caractere));
            continue;
        }

        return Err(ErreurTouche::Inconnue(jeton.to_string()));
    }

    Ok(out)
}

/// Rejoue la séquence sur un moteur neuf ; une étape par touche.
pub fn rejouer(sequence: &str) -> Result<Vec<Etape>, ErreurTouche> {
    let touches = decouper(sequence)?;
    let mut moteur = Moteur::new();

    let etapes = touches
        .into_iter()
        .map(|touche| Etape {
            touche,
            affichage: moteur.appliquer(touche).to_string(),
        })
        .collect();

    Ok(etapes)
}

/// Affichage final ("0" pour une séquence vide).
pub fn affichage_final(sequence: &str) -> Result<String, ErreurTouche> {
    let etapes = rejouer(sequence)?;
    Ok(etapes
        .last()
        .map(|e| e.affichage.clone())
        .unwrap_or_else(|| Moteur::new().affichage().to_string()))
}
