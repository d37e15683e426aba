// src/app/saisie.rs
//
// Saisies utilisateur (boutons + clavier) : seul endroit de l’UI qui appelle le noyau.
// Toute erreur du noyau devient l’affichage générique "Error" (voir etat.rs).

use tracing::{debug, info, warn};

use super::etat::AppCalc;
use crate::noyau::{self, CalcError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionMemoire {
    Effacer,    // MC
    Rappeler,   // MR
    Ajouter,    // M+
    Soustraire, // M-
}

/// Touche clavier déjà décodée par la vue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Caractere(char),
    Entree,
    Echap,
    RetourArriere,
}

impl AppCalc {
    /// Chiffres et point décimal.
    pub fn saisir_chiffre(&mut self, chiffre: &str) {
        self.expression.push_str(chiffre);
    }

    /// Opérateurs binaires : seulement après quelque chose, sauf '-' qui peut commencer.
    /// Parenthèses : toujours acceptées.
    pub fn saisir_operateur(&mut self, op: char) {
        match op {
            '(' | ')' => self.expression.push(op),
            '-' if self.expression.is_empty() => self.expression.push('-'),
            _ if !self.expression.is_empty() => self.expression.push(op),
            _ => {}
        }
    }

    /// π, e. Après un chiffre ou '.', un '×' explicite est inséré : "2e-1" serait relu
    /// comme le littéral 0.2, pas comme 2×e−1.
    pub fn saisir_constante(&mut self, constante: &str) {
        if self
            .expression
            .ends_with(|c: char| c.is_ascii_digit() || c == '.')
        {
            self.expression.push('×');
        }
        self.expression.push_str(constante);
    }

    /// Boutons scientifiques.
    /// - sin cos tan log ln sqrt : insèrent "nom("
    /// - x² x³ ! % +/-           : s’appliquent au total courant
    /// - x^y                     : insère '^'
    pub fn saisir_fonction(&mut self, fonction: &str, maintenant: f64) {
        match fonction {
            "sin" | "cos" | "tan" | "log" | "ln" | "sqrt" => {
                self.expression.push_str(fonction);
                self.expression.push('(');
            }
            "x^y" => self.expression.push('^'),
            "x²" | "x³" | "!" | "%" | "+/-" => {
                if self.expression.is_empty() {
                    return;
                }
                match self.appliquer_au_total(fonction) {
                    Ok(texte) => self.expression = texte,
                    Err(e) => {
                        warn!(fonction, expression = %self.expression, erreur = %e, "fonction refusée");
                        self.afficher_erreur(maintenant);
                    }
                }
            }
            _ => debug!(fonction, "bouton de fonction inconnu"),
        }
    }

    fn appliquer_au_total(&self, fonction: &str) -> Result<String, CalcError> {
        let courant = noyau::evaluate(&self.expression)?;
        let v = noyau::apply_function(fonction, courant)?;
        Ok(noyau::format_number(v))
    }

    /// "=" : évalue, affiche, historise, vide l’entrée.
    pub fn egal(&mut self, maintenant: f64) {
        if self.expression.is_empty() {
            return;
        }

        match noyau::evaluate(&self.expression) {
            Ok(v) => {
                let texte = noyau::format_number(v);
                info!(expression = %self.expression, resultat = %texte, "évaluation");
                self.dernier_resultat = v;
                self.set_resultat(texte.clone());
                let expression = std::mem::take(&mut self.expression);
                self.ajouter_historique(expression, texte);
            }
            Err(e) => {
                warn!(expression = %self.expression, erreur = %e, genre = ?e.kind(), "évaluation refusée");
                self.afficher_erreur(maintenant);
            }
        }
    }

    /// MC / MR / M+ / M-.
    /// M+ et M- utilisent l’entrée si elle existe, sinon le résultat affiché.
    pub fn memoire(&mut self, action: ActionMemoire, maintenant: f64) {
        match action {
            ActionMemoire::Effacer => self.memoire = 0.0,
            ActionMemoire::Rappeler => self.expression = noyau::format_number(self.memoire),
            ActionMemoire::Ajouter | ActionMemoire::Soustraire => {
                let courant = if self.expression.is_empty() {
                    noyau::evaluate(&self.resultat)
                } else {
                    noyau::evaluate(&self.expression)
                };
                match courant {
                    Ok(v) if action == ActionMemoire::Ajouter => self.memoire += v,
                    Ok(v) => self.memoire -= v,
                    Err(e) => {
                        warn!(?action, erreur = %e, "mémoire: valeur courante illisible");
                        self.afficher_erreur(maintenant);
                        return;
                    }
                }
            }
        }
        debug!(?action, memoire = self.memoire, "mémoire");
    }

    /// Clavier : chiffres . + - * / ( ), Entrée, Échap, Retour arrière.
    pub fn touche_clavier(&mut self, touche: Touche, maintenant: f64) {
        match touche {
            Touche::Caractere(c) if c.is_ascii_digit() || c == '.' => {
                self.saisir_chiffre(c.encode_utf8(&mut [0; 4]))
            }
            Touche::Caractere('*') => self.saisir_operateur('×'),
            Touche::Caractere('/') => self.saisir_operateur('÷'),
            Touche::Caractere(c @ ('+' | '-' | '(' | ')' | '^')) => self.saisir_operateur(c),
            Touche::Caractere(_) => {}
            Touche::Entree => self.egal(maintenant),
            Touche::Echap => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
        }
    }
}
