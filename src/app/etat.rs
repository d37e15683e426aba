//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (expression, résultat affiché, mémoire,
//! historique, préférences) et offrir les opérations simples qui ne calculent rien.
//! Les saisies qui appellent le noyau vivent dans saisie.rs.
//!
//! Contrats :
//! - L’état appartient à l’appelant (AppCalc), le noyau reste sans état.
//! - Le temps est passé en paramètre (`maintenant`, secondes) : actions déterministes et testables.

use serde::{Deserialize, Serialize};

/// Historique borné (le plus récent en tête).
pub const HISTORIQUE_MAX: usize = 50;

/// Durée d’affichage de "Error" avant retour à "0" (secondes).
pub const DELAI_ERREUR: f64 = 2.0;

/// Durée du retour visuel après copie (secondes).
pub const DELAI_COPIE: f64 = 1.0;

/// Clé eframe::Storage de l’état persistant.
pub const CLE_STOCKAGE: &str = "calculatrice_sci";

const RESULTAT_INITIAL: &str = "0";
const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Basique,
    Scientifique,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub mode: Mode,
    /// Clic sonore sur les boutons (actif par défaut, absent des anciens états).
    #[serde(default = "son_actif")]
    pub son: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            mode: Mode::default(),
            son: son_actif(),
        }
    }
}

fn son_actif() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

/// Ce qui survit à un redémarrage (eframe::Storage).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EtatPersistant {
    pub historique: Vec<EntreeHistorique>,
    pub preferences: Preferences,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String,      // affichage principal ("0", "42", "Error")
    pub dernier_resultat: f64, // dernière valeur obtenue par "="
    pub erreur_jusqua: Option<f64>,

    // --- données ---
    pub memoire: f64,
    pub historique: Vec<EntreeHistorique>,

    // --- paramètres ---
    pub preferences: Preferences,

    // --- UX ---
    pub historique_ouvert: bool,
    pub confirmer_vidage: bool,
    pub copie_jusqua: Option<f64>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: RESULTAT_INITIAL.to_string(),
            dernier_resultat: 0.0,
            erreur_jusqua: None,
            memoire: 0.0,
            historique: Vec::new(),
            preferences: Preferences::default(),
            historique_ouvert: false,
            confirmer_vidage: false,
            copie_jusqua: None,
        }
    }
}

impl AppCalc {
    /// Reconstruit l’état à partir de ce qui a été sauvegardé.
    pub fn depuis_persistant(p: EtatPersistant) -> Self {
        let mut historique = p.historique;
        historique.truncate(HISTORIQUE_MAX);
        Self {
            historique,
            preferences: p.preferences,
            ..Self::default()
        }
    }

    pub fn persistant(&self) -> EtatPersistant {
        EtatPersistant {
            historique: self.historique.clone(),
            preferences: self.preferences,
        }
    }

    /* ------------------------ Affichage ------------------------ */

    pub fn en_erreur(&self) -> bool {
        self.erreur_jusqua.is_some()
    }

    /// Affiche "Error" ; `tick` le remplacera par "0" après DELAI_ERREUR.
    pub fn afficher_erreur(&mut self, maintenant: f64) {
        self.resultat = TEXTE_ERREUR.to_string();
        self.erreur_jusqua = Some(maintenant + DELAI_ERREUR);
    }

    fn effacer_erreur(&mut self) {
        self.erreur_jusqua = None;
    }

    pub fn set_resultat(&mut self, texte: impl Into<String>) {
        self.effacer_erreur();
        self.resultat = texte.into();
    }

    /// Expiration des délais (erreur, retour de copie). À appeler à chaque frame.
    pub fn tick(&mut self, maintenant: f64) {
        if self.erreur_jusqua.is_some_and(|t| maintenant >= t) {
            self.erreur_jusqua = None;
            self.resultat = RESULTAT_INITIAL.to_string();
        }
        if self.copie_jusqua.is_some_and(|t| maintenant >= t) {
            self.copie_jusqua = None;
        }
    }

    /// Prochaine échéance à laquelle l’affichage doit changer tout seul.
    pub fn prochaine_echeance(&self) -> Option<f64> {
        match (self.erreur_jusqua, self.copie_jusqua) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// C : remise à zéro de l’entrée et de l’affichage.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.set_resultat(RESULTAT_INITIAL);
    }

    /// Backspace : retire d’un coup "sin(", "sqrt(", … sinon un caractère.
    pub fn retour_arriere(&mut self) {
        for pat in ["sqrt(", "sin(", "cos(", "tan(", "log(", "ln("] {
            if let Some(reste) = self.expression.strip_suffix(pat) {
                let n = reste.len();
                self.expression.truncate(n);
                return;
            }
        }
        self.expression.pop();
    }

    /* ------------------------ Historique ------------------------ */

    pub fn ajouter_historique(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.historique.insert(
            0,
            EntreeHistorique {
                expression: expression.into(),
                resultat: resultat.into(),
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);
    }

    /// Recharge l’expression d’une entrée et ferme le panneau.
    pub fn rappeler_historique(&mut self, index: usize) {
        if let Some(e) = self.historique.get(index) {
            self.expression = e.expression.clone();
            self.historique_ouvert = false;
        }
    }

    /// Vidage en deux temps : le premier appel arme la confirmation, le second vide.
    pub fn demander_vidage_historique(&mut self) {
        if self.historique.is_empty() {
            self.confirmer_vidage = false;
            return;
        }
        if self.confirmer_vidage {
            self.historique.clear();
            self.confirmer_vidage = false;
        } else {
            self.confirmer_vidage = true;
        }
    }

    pub fn basculer_historique(&mut self) {
        self.historique_ouvert = !self.historique_ouvert;
        self.confirmer_vidage = false;
    }

    /* ------------------------ Préférences ------------------------ */

    pub fn basculer_theme(&mut self) {
        self.preferences.theme = match self.preferences.theme {
            Theme::Sombre => Theme::Clair,
            Theme::Clair => Theme::Sombre,
        };
    }

    pub fn basculer_mode(&mut self) {
        self.preferences.mode = match self.preferences.mode {
            Mode::Basique => Mode::Scientifique,
            Mode::Scientifique => Mode::Basique,
        };
    }

    /// Renvoie vrai si un clic doit confirmer l’activation.
    pub fn basculer_son(&mut self) -> bool {
        self.preferences.son = !self.preferences.son;
        self.preferences.son
    }

    /* ------------------------ Presse-papiers ------------------------ */

    /// Texte à copier (le résultat affiché) + arme le retour visuel.
    pub fn copier_resultat(&mut self, maintenant: f64) -> String {
        self.copie_jusqua = Some(maintenant + DELAI_COPIE);
        self.resultat.clone()
    }
}
