//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - touche.rs   : touches, libellés, grille d’origine, clavier
//! - moteur.rs   : machine à états (exécution immédiate)
//! - format.rs   : rendu / lecture de l’affichage + jeton d’erreur
//! - rejeu.rs    : suite de libellés -> affichages (ligne de commande)

pub mod format;
pub mod moteur;
pub mod rejeu;
pub mod touche;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use moteur::Moteur;
pub use touche::{ErreurTouche, Famille, Operation, Touche, GRILLE};
