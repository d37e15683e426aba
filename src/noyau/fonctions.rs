// src/noyau/fonctions.rs
//
// Couche fonctions scientifiques.
//
// Deux usages:
// - apply_function(nom, valeur) : appelé par l’UI pour les opérations “sur le total courant”
//   (x², x³, !, +/-, %) et par le développement des appels ci-dessous.
// - developper_fonctions(s) : remplace chaque appel `nom(...)` par sa valeur entre parenthèses,
//   avant la tokenisation de l’expression englobante. Les appels imbriqués sont supportés :
//   la parenthèse fermante est trouvée par comptage de profondeur, l’argument est développé
//   récursivement.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use tracing::trace;

use super::erreur::{CalcError, Result};
use super::eval::evaluer_infixe;
use super::jetons::est_marqueur_exposant;

/// 170! est la plus grande factorielle finie en f64.
pub const FACTORIELLE_MAX: f64 = 170.0;

/// Fonctions utilisables sous la forme `nom(argument)` dans une expression.
pub const FONCTIONS_APPEL: [&str; 6] = ["sqrt", "sin", "cos", "tan", "log", "ln"];

/// Appels imbriqués au plus (chaque niveau = un cadre de pile).
pub const PROFONDEUR_MAX: usize = 64;

/// Applique une fonction nommée à une valeur (trigonométrie en radians).
pub fn apply_function(name: &str, value: f64) -> Result<f64> {
    let v = match name {
        "sin" => value.sin(),
        "cos" => value.cos(),
        "tan" => value.tan(),
        "log" | "ln" if value <= 0.0 => {
            return Err(CalcError::domain(format!("{name} d’un nombre négatif ou nul")))
        }
        "log" => value.log10(),
        "ln" => value.ln(),
        "sqrt" => {
            if value < 0.0 {
                return Err(CalcError::domain("racine carrée d’un nombre négatif"));
            }
            value.sqrt()
        }
        "x²" => value.powi(2),
        "x³" => value.powi(3),
        "!" => factorielle(value)?,
        "+/-" => -value,
        "%" => value / 100.0,
        _ => return Err(CalcError::syntax(format!("fonction inconnue: {name}"))),
    };

    if !v.is_finite() {
        return Err(CalcError::InvalidResult);
    }
    Ok(v)
}

/// n! exact (grands entiers) puis converti en f64.
fn factorielle(n: f64) -> Result<f64> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(CalcError::domain(
            "factorielle d’un nombre négatif ou non entier",
        ));
    }
    if n > FACTORIELLE_MAX {
        return Err(CalcError::overflow(format!("{n}! dépasse {FACTORIELLE_MAX}!")));
    }

    let k = n as u32;
    let exact = (2..=k).fold(BigUint::one(), |acc, i| acc * i);
    exact
        .to_f64()
        .ok_or_else(|| CalcError::overflow(format!("{n}! non représentable")))
}

/// Remplace chaque appel `nom(...)` par `(valeur)`.
///
/// - nom inconnu, ou nom sans '(' => erreur de syntaxe
/// - '(' sans ')' correspondante => erreur de syntaxe
/// - plus de PROFONDEUR_MAX appels imbriqués => erreur de syntaxe
/// - les erreurs de l’argument remontent telles quelles
pub fn developper_fonctions(s: &str) -> Result<String> {
    developper(s, 0)
}

fn developper(s: &str, profondeur: usize) -> Result<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if !c.is_ascii_alphabetic() || est_marqueur_exposant(&chars, i) {
            out.push(c);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_alphabetic() {
            i += 1;
        }
        let nom: String = chars[start..i].iter().collect::<String>().to_lowercase();

        if !FONCTIONS_APPEL.contains(&nom.as_str()) {
            return Err(CalcError::syntax(format!("fonction inconnue: {nom}")));
        }

        // espaces tolérés entre le nom et '('
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if chars.get(i) != Some(&'(') {
            return Err(CalcError::syntax(format!("'(' attendue après {nom}")));
        }

        if profondeur >= PROFONDEUR_MAX {
            return Err(CalcError::syntax(format!(
                "plus de {PROFONDEUR_MAX} appels de fonction imbriqués"
            )));
        }

        let fin = parenthese_fermante(&chars, i)
            .ok_or_else(|| CalcError::syntax(format!("parenthèse non fermée après {nom}")))?;

        let argument: String = chars[i + 1..fin].iter().collect();
        let argument = developper(&argument, profondeur + 1)?;
        let x = evaluer_infixe(&argument)?;
        let v = apply_function(&nom, x)?;
        trace!(fonction = %nom, argument = %argument, valeur = v, "appel développé");

        // Display f64 : jamais de notation exponentielle, relu exactement par tokenize().
        out.push('(');
        out.push_str(&v.to_string());
        out.push(')');

        i = fin + 1;
    }

    Ok(out)
}

/// Index de la ')' qui ferme la '(' en `ouvrante`, par comptage de profondeur.
fn parenthese_fermante(chars: &[char], ouvrante: usize) -> Option<usize> {
    let mut profondeur: usize = 0;
    for (j, &c) in chars.iter().enumerate().skip(ouvrante) {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur -= 1;
                if profondeur == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
    }
    None
}
