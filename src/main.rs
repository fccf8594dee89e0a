// src/main.rs
//
// Calculatrice à exécution immédiate — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : options clap, puis
//     * --touches "..." : rejeu sans interface (stdout)
//     * sinon            : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod noyau;
#[cfg(not(target_arch = "wasm32"))]
mod options;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = options::Options::parse();

    if let Some(seq) = opts.touches.as_deref() {
        return rejeu_console(seq, opts.pas);
    }

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([opts.largeur, opts.hauteur])
            .with_min_inner_size([280.0, 480.0]),
        ..Default::default()
    };

    log::info!("démarrage fenêtre {}x{}", opts.largeur, opts.hauteur);

    eframe::run_native(
        TITRE_APP,
        native,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
    .map_err(|e| anyhow::anyhow!("échec de la fenêtre : {e}"))
}

/// Rejoue une séquence de libellés et écrit le résultat sur stdout.
#[cfg(not(target_arch = "wasm32"))]
fn rejeu_console(seq: &str, pas: bool) -> anyhow::Result<()> {
    for ligne in lignes_rejeu(seq, pas)? {
        println!("{ligne}");
    }
    Ok(())
}

/// Sortie du rejeu :
/// - pas à pas : une ligne "libellé -> affichage" par touche
/// - sinon     : l’affichage final seul
#[cfg(not(target_arch = "wasm32"))]
fn lignes_rejeu(seq: &str, pas: bool) -> anyhow::Result<Vec<String>> {
    use anyhow::Context;

    if pas {
        let etapes = noyau::rejeu::rejouer(seq).with_context(|| format!("séquence {seq:?}"))?;
        return Ok(etapes
            .iter()
            .map(|e| format!("{} -> {}", e.touche, e.affichage))
            .collect());
    }

    let fin = noyau::rejeu::affichage_final(seq).with_context(|| format!("séquence {seq:?}"))?;
    Ok(vec![fin])
}


/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        // Journaux -> console du navigateur (déjà installé si rechargement à chaud)
        let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
