// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + saisie.rs + son.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB) : clavier, délais, thème, persistance

pub mod etat;
pub mod saisie;
pub mod son;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

use etat::{EtatPersistant, Theme, CLE_STOCKAGE};
use saisie::Touche;

impl AppCalc {
    /// Restaure préférences + historique depuis eframe::Storage (s’il existe).
    pub fn charger(storage: Option<&dyn eframe::Storage>) -> Self {
        let persistant: Option<EtatPersistant> =
            storage.and_then(|s| eframe::get_value(s, CLE_STOCKAGE));
        match persistant {
            Some(p) => {
                tracing::debug!(entrees = p.historique.len(), "état restauré");
                Self::depuis_persistant(p)
            }
            None => Self::default(),
        }
    }

    /// Clavier global : l’écran n’est pas un champ de saisie, on lit les événements bruts.
    fn lire_clavier(&mut self, ctx: &egui::Context, maintenant: f64) {
        let mut touches: Vec<Touche> = Vec::new();
        ctx.input(|i| {
            for ev in &i.events {
                match ev {
                    egui::Event::Text(t) => touches.extend(t.chars().map(Touche::Caractere)),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => touches.push(Touche::Entree),
                        egui::Key::Escape => touches.push(Touche::Echap),
                        egui::Key::Backspace => touches.push(Touche::RetourArriere),
                        _ => {}
                    },
                    _ => {}
                }
            }
        });

        for t in touches {
            self.touche_clavier(t, maintenant);
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        self.tick(maintenant);
        self.lire_clavier(ctx, maintenant);

        ctx.set_visuals(match self.preferences.theme {
            Theme::Sombre => egui::Visuals::dark(),
            Theme::Clair => egui::Visuals::light(),
        });

        if self.historique_ouvert {
            egui::SidePanel::right("historique")
                .resizable(true)
                .default_width(220.0)
                .show(ctx, |ui| self.ui_historique(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });

        // "Error" -> "0", "Copié" -> "Copier" : sans attendre une entrée utilisateur
        if let Some(t) = self.prochaine_echeance() {
            ctx.request_repaint_after(Duration::from_secs_f64((t - maintenant).max(0.0)));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CLE_STOCKAGE, &self.persistant());
    }
}
