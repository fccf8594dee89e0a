// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : caractères -> touches, Enter = "=", Escape/Delete = "AC"

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

/// Événements clavier de la frame -> touches (dans l’ordre de frappe).
fn touches_clavier(evenements: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in evenements {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(Touche::depuis_caractere));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Egal),
                egui::Key::Escape | egui::Key::Delete => out.push(Touche::Effacer),
                _ => {}
            },
            _ => {}
        }
    }
    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches = ctx.input(|i| touches_clavier(&i.events));
        for t in touches {
            self.appuyer(t);
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(egui::Color32::BLACK)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                self.ui(ui); // méthode publique (dans vue.rs)
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::Operation;

    fn touche_pressee(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn texte_et_touches_speciales() {
        let evs = vec![
            egui::Event::Text("12*3".into()),
            touche_pressee(egui::Key::Enter),
            touche_pressee(egui::Key::Escape),
        ];
        assert_eq!(
            touches_clavier(&evs),
            vec![
                Touche::Chiffre(1),
                Touche::Chiffre(2),
                Touche::Operateur(Operation::Multiplication),
                Touche::Chiffre(3),
                Touche::Egal,
                Touche::Effacer,
            ]
        );
    }

    #[test]
    fn caracteres_ignores() {
        let evs = vec![egui::Event::Text("a b".into())];
        assert!(touches_clavier(&evs).is_empty());
    }
}
