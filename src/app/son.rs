// src/app/son.rs
//
// Clic sonore des boutons.
// - web : bip Web Audio (sinus 800 → 400 Hz, 50 ms, gain 0.15 → 0.01)
// - natif : rien (trace seulement)
//
// Un échec audio n’est jamais remonté à l’UI : il est journalisé puis ignoré.

/// Durée du bip (secondes).
pub const DUREE_CLIC: f64 = 0.05;

pub const FREQUENCE_DEBUT: f32 = 800.0;
pub const FREQUENCE_FIN: f32 = 400.0;
pub const GAIN_DEBUT: f32 = 0.15;
pub const GAIN_FIN: f32 = 0.01;

#[cfg(target_arch = "wasm32")]
pub fn clic() {
    if let Err(e) = web::bip() {
        tracing::debug!(erreur = ?e, "lecture du clic impossible");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clic() {
    tracing::trace!("clic");
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::JsValue;
    use web_sys::{AudioContext, OscillatorType};

    use super::{DUREE_CLIC, FREQUENCE_DEBUT, FREQUENCE_FIN, GAIN_DEBUT, GAIN_FIN};

    thread_local! {
        // Un seul contexte pour toute la page (les navigateurs en limitent le nombre).
        static CONTEXTE: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
    }

    pub fn bip() -> Result<(), JsValue> {
        CONTEXTE.with(|cell| {
            let mut cell = cell.borrow_mut();
            if cell.is_none() {
                *cell = Some(AudioContext::new()?);
            }
            match cell.as_ref() {
                Some(ctx) => jouer(ctx),
                None => Ok(()),
            }
        })
    }

    fn jouer(ctx: &AudioContext) -> Result<(), JsValue> {
        let oscillateur = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;

        oscillateur.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        let t0 = ctx.current_time();
        let t1 = t0 + DUREE_CLIC;

        oscillateur.set_type(OscillatorType::Sine);
        oscillateur.frequency().set_value_at_time(FREQUENCE_DEBUT, t0)?;
        oscillateur
            .frequency()
            .exponential_ramp_to_value_at_time(FREQUENCE_FIN, t1)?;

        gain.gain().set_value_at_time(GAIN_DEBUT, t0)?;
        gain.gain().exponential_ramp_to_value_at_time(GAIN_FIN, t1)?;

        oscillateur.start_with_when(t0)?;
        oscillateur.stop_with_when(t1)?;
        Ok(())
    }
}
