// src/options.rs
//
// Ligne de commande (natif seulement).
// - sans --touches : fenêtre graphique
// - avec --touches : rejeu sans interface, affichage final sur stdout
//
// Journaux : RUST_LOG (env_logger), "warn" par défaut.

use clap::Parser;

/// Taille de fenêtre par défaut (portrait, comme un téléphone).
pub const LARGEUR_DEFAUT: f32 = 420.0;
pub const HAUTEUR_DEFAUT: f32 = 740.0;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Calculatrice à exécution immédiate")]
pub struct Options {
    /// Suite de touches à rejouer sans interface, séparées par des espaces
    /// (ex: "7 + 3 =", "12.5 × 2 =", "5 ÷ 0 = AC").
    #[arg(long, value_name = "SEQ")]
    pub touches: Option<String>,

    /// Avec --touches : une ligne par touche ("libellé -> affichage").
    #[arg(long, requires = "touches")]
    pub pas: bool,

    /// Largeur initiale de la fenêtre (px).
    #[arg(long, default_value_t = LARGEUR_DEFAUT)]
    pub largeur: f32,

    /// Hauteur initiale de la fenêtre (px).
    #[arg(long, default_value_t = HAUTEUR_DEFAUT)]
    pub hauteur: f32,
}
