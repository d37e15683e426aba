// src/noyau/constantes.rs
//
// Substitution textuelle des constantes symboliques, AVANT les fonctions et la tokenisation.
// - π          => (3.141592653589793)
// - e isolé    => (2.718281828459045)
//
// Un `e` n’est PAS une constante quand:
// - il touche une lettre (fait partie d’un nom : on ne corrompt jamais un identifiant)
// - c’est le marqueur d’exposant d’un littéral (1.5e+11)
//
// Les parenthèses autour de la valeur donnent "2π" = 2×π via la multiplication implicite.

use std::f64::consts::{E, PI};

use super::jetons::est_marqueur_exposant;

pub fn substituer_constantes(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        match c {
            'π' => push_valeur(&mut out, PI),
            'e' if est_euler(&chars, i) => push_valeur(&mut out, E),
            _ => out.push(c),
        }
    }

    out
}

fn push_valeur(out: &mut String, v: f64) {
    out.push('(');
    out.push_str(&v.to_string());
    out.push(')');
}

fn est_euler(chars: &[char], i: usize) -> bool {
    let lettre = |c: Option<&char>| c.is_some_and(|c| c.is_alphabetic() && *c != 'π');
    let avant = if i == 0 { None } else { chars.get(i - 1) };
    let apres = chars.get(i + 1);

    !lettre(avant) && !lettre(apres) && !est_marqueur_exposant(chars, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_et_e() {
        assert_eq!(substituer_constantes("π"), "(3.141592653589793)");
        assert_eq!(substituer_constantes("e"), "(2.718281828459045)");
        assert_eq!(
            substituer_constantes("2×π+e"),
            "2×(3.141592653589793)+(2.718281828459045)"
        );
    }

    #[test]
    fn noms_proteges() {
        // aucun nom de fonction n’est touché, même ceux qui contiendraient un 'e'
        assert_eq!(substituer_constantes("sin(e)"), "sin((2.718281828459045))");
        assert_eq!(substituer_constantes("sec(1)"), "sec(1)");
        assert_eq!(substituer_constantes("log(10)"), "log(10)");
    }

    #[test]
    fn exposant_intact() {
        assert_eq!(substituer_constantes("1.000000e+11"), "1.000000e+11");
        assert_eq!(substituer_constantes("2e-7"), "2e-7");
    }

    #[test]
    fn e_apres_chiffre_sans_exposant() {
        assert_eq!(substituer_constantes("2e"), "2(2.718281828459045)");
    }

    #[test]
    fn constantes_consecutives() {
        assert_eq!(
            substituer_constantes("πe"),
            "(3.141592653589793)(2.718281828459045)"
        );
    }
}
