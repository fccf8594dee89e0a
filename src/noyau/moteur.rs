//! Noyau — moteur à exécution immédiate
//!
//! Machine à états minimale : une touche -> une transition -> un affichage.
//! Pas de priorité d’opérateurs, pas d’expression : une seule case
//! d’opération en attente + un accumulateur.
//!
//! Contrats :
//! - `affichage` n’est jamais vide : un nombre lisible ou le jeton d’erreur.
//! - au plus un point décimal dans `affichage`.
//! - ÷0 ne panique jamais : jeton d’erreur, puis seul AC débloque.

use super::format::{formater, lire, JETON_ERREUR};
use super::touche::{Operation, Touche};

#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    affichage: String,
    operation: Operation,
    accumulateur: Option<f64>,
    attente_second_operande: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            operation: Operation::Aucune,
            accumulateur: None,
            attente_second_operande: false,
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn accumulateur(&self) -> Option<f64> {
        self.accumulateur
    }

    pub fn attend_second_operande(&self) -> bool {
        self.attente_second_operande
    }

    pub fn en_erreur(&self) -> bool {
        self.affichage == JETON_ERREUR
    }

    /* ------------------------ Transition ------------------------ */

    /// Applique une touche et renvoie le nouvel affichage.
    pub fn appliquer(&mut self, touche: Touche) -> &str {
        // Jeton d’erreur : tout est suspendu jusqu’à AC.
        if self.en_erreur() && touche != Touche::Effacer {
            log::trace!("{touche:?} ignorée (erreur en cours)");
            return &self.affichage;
        }

        match touche {
            Touche::Effacer => *self = Self::default(),
            Touche::ChangerSigne => self.transformer(|x| -x),
            Touche::Pourcentage => self.transformer(|x| x / 100.0),
            Touche::Chiffre(d) => self.saisir_chiffre(d),
            Touche::Virgule => {
                if !self.affichage.contains('.') {
                    self.affichage.push('.');
                }
            }
            Touche::Operateur(op) => {
                // Écrase l’opération précédente SANS l’évaluer (case unique).
                if let Some(a) = self.operande() {
                    self.operation = op;
                    self.accumulateur = Some(a);
                    self.attente_second_operande = true;
                }
            }
            Touche::Egal => self.evaluer(),
        }

        log::trace!("{touche:?} -> {:?}", self.affichage);
        &self.affichage
    }

    /// Affichage -> nombre. Hors plage f64 (309 chiffres et plus) => jeton d’erreur.
    fn operande(&mut self) -> Option<f64> {
        let x = lire(&self.affichage);
        if x.is_none() {
            log::warn!("opérande hors plage ({} caractères)", self.affichage.len());
            self.affichage = JETON_ERREUR.to_string();
        }
        x
    }

    fn transformer(&mut self, f: impl Fn(f64) -> f64) {
        if let Some(x) = self.operande() {
            self.affichage = formater(f(x));
        }
    }

    fn saisir_chiffre(&mut self, d: u8) {
        // Chiffre(d > 9) est ramené à 9 (voir Touche::Chiffre).
        let c = char::from(b'0' + d.min(9));
        if self.affichage == "0" || self.attente_second_operande {
            self.affichage = c.to_string();
            self.attente_second_operande = false;
        } else {
            self.affichage.push(c);
        }
    }

    fn evaluer(&mut self) {
        // Sans opération en attente, "=" ne lit pas l’affichage.
        let en_attente = self
            .accumulateur
            .filter(|_| self.operation != Operation::Aucune);
        if let Some(a) = en_attente {
            if let Some(b) = self.operande() {
                if let Some(r) = calculer(self.operation, a, b) {
                    self.affichage = r;
                }
            }
        }
        self.operation = Operation::Aucune;
        self.attente_second_operande = false;
    }
}

/// a OP b rendu en texte. None si aucune opération en attente.
fn calculer(op: Operation, a: f64, b: f64) -> Option<String> {
    let r = match op {
        Operation::Aucune => return None,
        Operation::Addition => a + b,
        Operation::Soustraction => a - b,
        Operation::Multiplication => a * b,
        Operation::Division => {
            if b == 0.0 {
                log::warn!("division par zéro : {a} ÷ 0");
                return Some(JETON_ERREUR.to_string());
            }
            a / b
        }
    };

    if !r.is_finite() {
        log::warn!("dépassement : {a} {} {b}", op.symbole());
    }
    Some(formater(r))
}
