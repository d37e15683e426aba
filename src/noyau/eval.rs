//! Noyau — évaluation (pipeline réel)
//!
//! constantes -> fonctions `nom(...)` -> jetons -> RPN -> valeur -> contrôle de finitude
//!
//! Sans état : chaque appel possède ses piles, rien n’est partagé hormis la table
//! statique des opérateurs. Appelable depuis plusieurs threads sans verrou.

use tracing::debug;

use super::constantes::substituer_constantes;
use super::erreur::{CalcError, Result};
use super::fonctions::developper_fonctions;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression complète.
///
/// Grammaire : chiffres, `.`, `+ - × ÷ ^`, parenthèses, `π`, `e`,
/// et appels (imbriquables) `sin cos tan log ln sqrt`.
pub fn evaluate(expression: &str) -> Result<f64> {
    // 1) Constantes (avant les noms de fonctions)
    let s = substituer_constantes(expression);

    // 2) Appels de fonctions => valeurs
    let s = developper_fonctions(&s)?;

    // 3) Jetons -> RPN -> valeur
    let v = evaluer_infixe(&s)?;

    // 4) Résultat final fini uniquement
    if !v.is_finite() {
        return Err(CalcError::InvalidResult);
    }
    Ok(v)
}

/// Étapes 3 seules : l’entrée ne contient plus ni constante ni appel de fonction.
pub(crate) fn evaluer_infixe(s: &str) -> Result<f64> {
    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    debug!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        "expression convertie"
    );
    eval_rpn(&rpn)
}
