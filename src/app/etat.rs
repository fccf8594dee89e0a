//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur de la session + le peu d’état propre à l’écran
//! (dernière touche pressée, pour le retour visuel).
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Moteur::appliquer`.
//! - Un seul moteur par session, recréé par AC (dans le moteur lui-même).

use crate::noyau::{Moteur, Operation, Touche};
#[cfg(test)]
use crate::noyau::ErreurTouche;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- UX ---
    pub derniere_touche: Option<Touche>,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Une touche (bouton ou clavier) -> moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.appliquer(touche);
        log::debug!(
            "touche {touche} -> {:?} (op={:?}, acc={:?})",
            self.moteur.affichage(),
            self.moteur.operation(),
            self.moteur.accumulateur()
        );
        self.derniere_touche = Some(touche);
    }

    /// Variante par libellé (grille).
    #[cfg(test)]
    pub fn appuyer_libelle(&mut self, libelle: &str) -> Result<(), ErreurTouche> {
        let touche = libelle.parse::<Touche>()?;
        self.appuyer(touche);
        Ok(())
    }

    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }

    /// Opérateur à surligner : en attente ET pas encore de second opérande tapé.
    pub fn operateur_surligne(&self) -> Option<Operation> {
        let op = self.moteur.operation();
        (op != Operation::Aucune && self.moteur.attend_second_operande()).then_some(op)
    }
}
