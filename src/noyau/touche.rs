//! Touches de la calculatrice : événements, libellés, grille.
//!
//! Une touche = un événement du moteur (voir moteur.rs).
//! Les 19 libellés de la grille sont la surface d’entrée complète :
//! - "AC", "+/-", "%"          : fonctions
//! - "÷", "×", "-", "+", "="  : opérateurs
//! - "0".."9", "."            : saisie

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Opération binaire en attente (une seule case, pas de pile).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    #[default]
    Aucune,
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Libellé du bouton ("" pour Aucune : pas de bouton).
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Aucune => "",
            Operation::Addition => "+",
            Operation::Soustraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }
}

/// Événement discret envoyé au moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Effacer,
    ChangerSigne,
    Pourcentage,
    /// Chiffre 0..=9 ; une valeur > 9 est traitée comme 9 (libellé et saisie).
    Chiffre(u8),
    Virgule,
    Operateur(Operation),
    Egal,
}

/// Famille visuelle (couleur du bouton).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Famille {
    Fonction,
    Operateur,
    Chiffre,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurTouche {
    #[error("touche inconnue : {0:?}")]
    Inconnue(String),
}

/// Disposition d’origine : 5 rangées, "0" occupe deux colonnes.
pub const GRILLE: [&[&str]; 5] = [
    &["AC", "+/-", "%", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Touche {
    /// Libellé canonique (celui de la grille).
    pub fn libelle(self) -> &'static str {
        match self {
            Touche::Effacer => "AC",
            Touche::ChangerSigne => "+/-",
            Touche::Pourcentage => "%",
            // min() : un Chiffre(d > 9) construit à la main reste indexable.
            Touche::Chiffre(d) => CHIFFRES[usize::from(d.min(9))],
            Touche::Virgule => ".",
            Touche::Operateur(op) => op.symbole(),
            Touche::Egal => "=",
        }
    }

    pub fn famille(self) -> Famille {
        match self {
            Touche::Effacer | Touche::ChangerSigne | Touche::Pourcentage => Famille::Fonction,
            Touche::Operateur(_) | Touche::Egal => Famille::Operateur,
            Touche::Chiffre(_) | Touche::Virgule => Famille::Chiffre,
        }
    }

    /// Clavier : un caractère tapé -> une touche (si reconnu).
    /// Enter / Escape sont gérés côté UI (ce ne sont pas des caractères).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        let t = match c {
            '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
            '.' | ',' => Touche::Virgule,
            '+' => Touche::Operateur(Operation::Addition),
            '-' | '−' => Touche::Operateur(Operation::Soustraction),
            '*' | 'x' | '×' => Touche::Operateur(Operation::Multiplication),
            '/' | '÷' => Touche::Operateur(Operation::Division),
            '%' => Touche::Pourcentage,
            '=' => Touche::Egal,
            '±' => Touche::ChangerSigne,
            _ => return None,
        };
        Some(t)
    }
}

impl FromStr for Touche {
    type Err = ErreurTouche;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s {
            "AC" => Touche::Effacer,
            "+/-" | "±" => Touche::ChangerSigne,
            "%" => Touche::Pourcentage,
            "÷" | "/" => Touche::Operateur(Operation::Division),
            "×" | "*" | "x" => Touche::Operateur(Operation::Multiplication),
            "-" => Touche::Operateur(Operation::Soustraction),
            "+" => Touche::Operateur(Operation::Addition),
            "=" => Touche::Egal,
            "." => Touche::Virgule,
            _ => {
                let mut it = s.chars();
                match (it.next(), it.next()) {
                    (Some(c @ '0'..='9'), None) => Touche::Chiffre(c as u8 - b'0'),
                    _ => return Err(ErreurTouche::Inconnue(s.to_string())),
                }
            }
        };
        Ok(t)
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}
