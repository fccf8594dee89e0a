// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran noir, affichage géant aligné à droite
// - Grille d’origine (5 rangées), boutons ronds, "0" double largeur
// - Couleurs par famille : fonctions grises, opérateurs orange, chiffres gris foncé
// - L’opérateur en attente est surligné (fond blanc) jusqu’au second opérande
//
// La vue ne calcule rien : elle lit `affichage()` et renvoie des touches.

use eframe::egui::{self, Color32, RichText};

use super::etat::AppCalc;
use crate::noyau::{Famille, Touche, GRILLE};

const ESPACEMENT: f32 = 10.0;

const TAILLE_AFFICHAGE_MAX: f32 = 96.0;
const TAILLE_AFFICHAGE_MIN: f32 = 24.0;

const GRIS: Color32 = Color32::from_rgb(142, 142, 147);
const ORANGE: Color32 = Color32::from_rgb(255, 149, 0);
const GRIS_FONCE: Color32 = Color32::from_rgb(51, 51, 51);

fn couleur_famille(f: Famille) -> Color32 {
    match f {
        Famille::Fonction => GRIS,
        Famille::Operateur => ORANGE,
        Famille::Chiffre => GRIS_FONCE,
    }
}

/// Police de l’affichage : réduite quand le texte ne tient plus en largeur.
/// Approximation : un glyphe ≈ 0.6 × taille.
fn taille_affichage(texte: &str, largeur: f32) -> f32 {
    let n = texte.chars().count().max(1) as f32;
    (largeur / (n * 0.6)).clamp(TAILLE_AFFICHAGE_MIN, TAILLE_AFFICHAGE_MAX)
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        let largeur = ui.available_width();
        let cote = ((largeur - 3.0 * ESPACEMENT) / 4.0).max(32.0);

        // Pousse l’affichage + la grille vers le bas (comme l’original).
        let hauteur_grille = 5.0 * cote + 4.0 * ESPACEMENT;
        let hauteur_affichage = TAILLE_AFFICHAGE_MAX * 1.4;
        let libre = ui.available_height() - hauteur_grille - hauteur_affichage;
        if libre > 0.0 {
            ui.add_space(libre);
        }

        self.ui_affichage(ui, largeur, hauteur_affichage);
        self.ui_grille(ui, cote);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui, largeur: f32, hauteur: f32) {
        let texte = self.affichage();
        let taille = taille_affichage(texte, largeur);

        ui.allocate_ui_with_layout(
            egui::vec2(largeur, hauteur),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                ui.add(
                    egui::Label::new(RichText::new(texte).size(taille).strong().color(Color32::WHITE))
                        .wrap_mode(egui::TextWrapMode::Truncate),
                );
            },
        );
    }

    fn ui_grille(&mut self, ui: &mut egui::Ui, cote: f32) {
        for rangee in GRILLE {
            ui.horizontal(|ui| {
                for &libelle in rangee {
                    let largeur = if libelle == "0" {
                        2.0 * cote + ESPACEMENT
                    } else {
                        cote
                    };
                    self.bouton(ui, libelle, egui::vec2(largeur, cote));
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, taille: egui::Vec2) {
        let touche = match libelle.parse::<Touche>() {
            Ok(t) => t,
            Err(e) => {
                // GRILLE ne contient que des libellés connus (testé dans touche.rs).
                log::error!("{e}");
                return;
            }
        };

        let surligne = matches!(
            (touche, self.operateur_surligne()),
            (Touche::Operateur(op), Some(sel)) if op == sel
        );

        let (fond, encre) = if surligne {
            (Color32::WHITE, ORANGE)
        } else {
            (couleur_famille(touche.famille()), Color32::WHITE)
        };

        let rayon = (taille.y / 2.0).min(f32::from(u8::MAX)) as u8;
        let bouton = egui::Button::new(RichText::new(libelle).size(taille.y * 0.42).strong().color(encre))
            .fill(fond)
            .corner_radius(egui::CornerRadius::same(rayon));

        if ui.add_sized(taille, bouton).clicked() {
            self.appuyer(touche);
        }
    }
}
