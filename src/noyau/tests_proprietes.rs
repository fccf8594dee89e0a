//! Tests de propriétés (proptest) : invariants du moteur sur des suites
//! de touches arbitraires.
//!
//! - saisie depuis zéro = concaténation des chiffres (règle du point unique)
//! - point décimal idempotent
//! - AC ramène exactement à l’état initial
//! - l’affichage est toujours relisible ou le jeton d’erreur, jamais vide
//! - après ÷0, rien ne passe avant AC

use proptest::prelude::*;

use super::format::{lire, JETON_ERREUR};
use super::moteur::Moteur;
use super::touche::{Operation, Touche};

prop_compose! {
    fn touche_arbitraire()(variant in 0..8u8, d in 0..10u8) -> Touche {
        match variant {
            0 => Touche::Effacer,
            1 => Touche::ChangerSigne,
            2 => Touche::Pourcentage,
            3 => Touche::Virgule,
            4 => Touche::Egal,
            5 => Touche::Operateur(match d % 4 {
                0 => Operation::Addition,
                1 => Operation::Soustraction,
                2 => Operation::Multiplication,
                _ => Operation::Division,
            }),
            _ => Touche::Chiffre(d),
        }
    }
}

prop_compose! {
    /// Chiffres et points seulement (saisie d’un opérande).
    fn saisie()(v in prop::collection::vec(prop_oneof![
        9 => (0..10u8).prop_map(Touche::Chiffre),
        1 => Just(Touche::Virgule),
    ], 1..24)) -> Vec<Touche> {
        v
    }
}

/// Modèle de référence de la saisie : concaténation, "0" initial écrasé,
/// second point ignoré.
fn modele_saisie(touches: &[Touche]) -> String {
    let mut s = String::from("0");
    for t in touches {
        match t {
            Touche::Chiffre(d) => {
                let c = char::from(b'0' + d);
                if s == "0" {
                    s = c.to_string();
                } else {
                    s.push(c);
                }
            }
            Touche::Virgule if !s.contains('.') => s.push('.'),
            _ => {}
        }
    }
    s
}

fn appliquer_tout(m: &mut Moteur, touches: &[Touche]) {
    for &t in touches {
        m.appliquer(t);
    }
}

proptest! {
    #[test]
    fn saisie_est_la_concatenation(touches in saisie()) {
        let mut m = Moteur::new();
        appliquer_tout(&mut m, &touches);
        prop_assert_eq!(m.affichage(), modele_saisie(&touches));
        prop_assert!(m.affichage().matches('.').count() <= 1);
    }

    #[test]
    fn virgule_idempotente(prefixe in prop::collection::vec(touche_arbitraire(), 0..30)) {
        let mut une = Moteur::new();
        appliquer_tout(&mut une, &prefixe);
        let mut deux = une.clone();

        une.appliquer(Touche::Virgule);
        deux.appliquer(Touche::Virgule);
        deux.appliquer(Touche::Virgule);

        prop_assert_eq!(une.affichage(), deux.affichage());
    }

    #[test]
    fn effacer_remet_a_zero(historique in prop::collection::vec(touche_arbitraire(), 0..40)) {
        let mut m = Moteur::new();
        appliquer_tout(&mut m, &historique);
        m.appliquer(Touche::Effacer);
        prop_assert_eq!(m, Moteur::new());
    }

    #[test]
    fn affichage_toujours_valide(historique in prop::collection::vec(touche_arbitraire(), 0..60)) {
        let mut m = Moteur::new();
        for t in historique {
            let aff = m.appliquer(t).to_string();
            prop_assert!(!aff.is_empty());
            prop_assert!(aff.matches('.').count() <= 1, "aff={:?}", aff);
            prop_assert!(
                aff == JETON_ERREUR || lire(&aff).is_some(),
                "affichage illisible {:?} après {:?}", aff, t
            );
        }
    }

    #[test]
    fn erreur_bloque_jusqu_a_effacer(
        suite in prop::collection::vec(touche_arbitraire(), 0..30)
    ) {
        let mut m = Moteur::new();
        for lib in ["5", "÷", "0", "="] {
            m.appliquer(lib.parse().unwrap());
        }
        prop_assert!(m.en_erreur());

        for t in suite.into_iter().take_while(|t| *t != Touche::Effacer) {
            prop_assert_eq!(m.appliquer(t), JETON_ERREUR);
        }
    }
}
