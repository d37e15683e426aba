//! Noyau de calcul (flottants f64)
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie des erreurs (CalcError / ErrorKind)
//! - constantes.rs : substitution π / e
//! - fonctions.rs  : sin cos tan log ln sqrt x² x³ ! +/- % + développement des appels
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + exécution de la RPN
//! - format.rs     : affichage canonique d’un résultat
//! - eval.rs       : pipeline complet

pub mod constantes;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{CalcError, ErrorKind};
pub use eval::evaluate;
pub use fonctions::apply_function;
pub use format::format_number;
