// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : expression + résultat, couleur d’erreur, bouton copier
// - Barre : thème, mode basique/scientifique, son, historique
// - Pavé mémoire, pavé scientifique (mode scientifique), pavé principal
// - Panneau historique à droite
//
// Note : la vue ne calcule rien ; chaque bouton délègue à etat.rs / saisie.rs.

use eframe::egui;

use super::etat::{AppCalc, Mode, Theme};
use super::saisie::ActionMemoire;
use super::son;

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];
const TAILLE_BOUTON_SCI: [f32; 2] = [64.0, 34.0];
const TAILLE_BOUTON_MEMOIRE: [f32; 2] = [64.0, 26.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_barre(ui);
        ui.add_space(6.0);

        self.ui_ecran(ui, maintenant);
        ui.add_space(8.0);

        self.ui_memoire(ui, maintenant);

        if self.preferences.mode == Mode::Scientifique {
            ui.add_space(6.0);
            self.ui_pave_scientifique(ui, maintenant);
        }

        ui.add_space(6.0);
        self.ui_pave_principal(ui, maintenant);
    }

    fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let theme = match self.preferences.theme {
                Theme::Sombre => "Thème clair",
                Theme::Clair => "Thème sombre",
            };
            if ui.button(theme).clicked() {
                self.basculer_theme();
            }

            let sci = self.preferences.mode == Mode::Scientifique;
            if ui.selectable_label(sci, "Scientifique").clicked() {
                self.basculer_mode();
            }

            // clic de confirmation seulement à l’activation
            if ui.selectable_label(self.preferences.son, "Son").clicked() && self.basculer_son()
            {
                son::clic();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .selectable_label(self.historique_ouvert, "Historique")
                    .clicked()
                {
                    self.basculer_historique();
                }
            });
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let libelle = if self.copie_jusqua.is_some() {
                        "Copié"
                    } else {
                        "Copier"
                    };
                    if ui.small_button(libelle).clicked() {
                        let texte = self.copier_resultat(maintenant);
                        ui.ctx().copy_text(texte);
                    }
                    ui.monospace(self.expression.as_str());
                });

                let couleur = if self.en_erreur() {
                    ui.visuals().error_fg_color
                } else {
                    ui.visuals().strong_text_color()
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.resultat.as_str())
                            .monospace()
                            .size(34.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.horizontal(|ui| {
            for (label, action) in [
                ("MC", ActionMemoire::Effacer),
                ("MR", ActionMemoire::Rappeler),
                ("M+", ActionMemoire::Ajouter),
                ("M-", ActionMemoire::Soustraire),
            ] {
                if ui
                    .add_sized(TAILLE_BOUTON_MEMOIRE, egui::Button::new(label))
                    .clicked()
                {
                    self.cliquer();
                    self.memoire(action, maintenant);
                }
            }
        });
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for f in ["sin", "cos", "tan", "log", "ln"] {
                    self.bouton(ui, f, Bouton::Fonction(f), TAILLE_BOUTON_SCI, maintenant);
                }
                ui.end_row();

                self.bouton(ui, "√", Bouton::Fonction("sqrt"), TAILLE_BOUTON_SCI, maintenant);
                for f in ["x²", "x³", "x^y", "!"] {
                    self.bouton(ui, f, Bouton::Fonction(f), TAILLE_BOUTON_SCI, maintenant);
                }
                ui.end_row();

                self.bouton(ui, "π", Bouton::Constante("π"), TAILLE_BOUTON_SCI, maintenant);
                self.bouton(ui, "e", Bouton::Constante("e"), TAILLE_BOUTON_SCI, maintenant);
                self.bouton(ui, "%", Bouton::Fonction("%"), TAILLE_BOUTON_SCI, maintenant);
                self.bouton(ui, "+/-", Bouton::Fonction("+/-"), TAILLE_BOUTON_SCI, maintenant);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_pave_principal(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        use Bouton::*;

        let rangees: [[(&str, Bouton); 4]; 5] = [
            [
                ("C", Effacer),
                ("DEL", RetourArriere),
                ("(", Operateur('(')),
                (")", Operateur(')')),
            ],
            [
                ("7", Chiffre("7")),
                ("8", Chiffre("8")),
                ("9", Chiffre("9")),
                ("÷", Operateur('÷')),
            ],
            [
                ("4", Chiffre("4")),
                ("5", Chiffre("5")),
                ("6", Chiffre("6")),
                ("×", Operateur('×')),
            ],
            [
                ("1", Chiffre("1")),
                ("2", Chiffre("2")),
                ("3", Chiffre("3")),
                ("-", Operateur('-')),
            ],
            [
                ("0", Chiffre("0")),
                (".", Chiffre(".")),
                ("=", Egal),
                ("+", Operateur('+')),
            ],
        ];

        egui::Grid::new("pave_principal")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in rangees {
                    for (label, b) in rangee {
                        self.bouton(ui, label, b, TAILLE_BOUTON, maintenant);
                    }
                    ui.end_row();
                }
            });
    }

    /// Panneau latéral : liste cliquable (rappel) + vidage confirmé.
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.heading("Historique");
        ui.add_space(4.0);

        let libelle = if self.confirmer_vidage {
            "Confirmer le vidage ?"
        } else {
            "Vider l’historique"
        };
        if ui
            .add_enabled(!self.historique.is_empty(), egui::Button::new(libelle))
            .clicked()
        {
            self.demander_vidage_historique();
        }

        ui.separator();

        if self.historique.is_empty() {
            ui.weak("Aucun calcul pour l’instant");
            return;
        }

        let mut rappel: Option<usize> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (i, e) in self.historique.iter().enumerate() {
                    let resp = egui::Frame::group(ui.style())
                        .show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.weak(e.expression.as_str());
                            ui.monospace(egui::RichText::new(e.resultat.as_str()).strong());
                        })
                        .response
                        .interact(egui::Sense::click());
                    if resp.on_hover_text("Réutiliser cette expression").clicked() {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            self.rappeler_historique(i);
        }
    }

    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        bouton: Bouton,
        taille: [f32; 2],
        maintenant: f64,
    ) {
        let texte = egui::RichText::new(label).size(18.0);
        if !ui.add_sized(taille, egui::Button::new(texte)).clicked() {
            return;
        }
        self.cliquer();

        match bouton {
            Bouton::Chiffre(c) => self.saisir_chiffre(c),
            Bouton::Operateur(op) => self.saisir_operateur(op),
            Bouton::Fonction(f) => self.saisir_fonction(f, maintenant),
            Bouton::Constante(k) => self.saisir_constante(k),
            Bouton::Egal => self.egal(maintenant),
            Bouton::Effacer => self.effacer(),
            Bouton::RetourArriere => self.retour_arriere(),
        }
    }

    fn cliquer(&self) {
        if self.preferences.son {
            son::clic();
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Bouton {
    Chiffre(&'static str),
    Operateur(char),
    Fonction(&'static str),
    Constante(&'static str),
    Egal,
    Effacer,
    RetourArriere,
}
