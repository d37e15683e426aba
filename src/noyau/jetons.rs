// src/noyau/jetons.rs

use super::erreur::{CalcError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Plus,
    Minus,
    Times,  // × (ou *)
    Divide, // ÷ (ou /)
    Power,  // ^

    LParen,
    RParen,

    // Moins unaire préfixé : jamais produit par tokenize(), seulement par to_rpn().
    Negate,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::Plus => '+',
            Symbol::Minus | Symbol::Negate => '-',
            Symbol::Times => '×',
            Symbol::Divide => '÷',
            Symbol::Power => '^',
            Symbol::LParen => '(',
            Symbol::RParen => ')',
        }
    }
}

/// Jeton immuable : un littéral fini ou un symbole.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Symbol(Symbol),
}

/// Vrai si `chars[i]` est le `e` d’un exposant de littéral (`1.5e+11`, `2e-7`, `3e8`) :
/// collé à un chiffre (ou '.') à gauche, suivi d’un chiffre ou d’un signe puis d’un chiffre.
///
/// Partagé avec la substitution des constantes et le développement des fonctions,
/// qui doivent laisser ce `e` intact.
pub fn est_marqueur_exposant(chars: &[char], i: usize) -> bool {
    if !matches!(chars.get(i), Some('e' | 'E')) || i == 0 {
        return false;
    }
    let avant = chars[i - 1];
    if !(avant.is_ascii_digit() || avant == '.') {
        return false;
    }
    match chars.get(i + 1) {
        Some(c) if c.is_ascii_digit() => true,
        Some('+' | '-') => matches!(chars.get(i + 2), Some(c) if c.is_ascii_digit()),
        _ => false,
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux décimaux (12, 3.5, .5) et exposants (1.5e+11)
/// - opérateurs + - × ÷ ^ (et * / comme alias)
/// - parenthèses ( )
/// - multiplication implicite : "2(3)", "(2)(3)", "(2)3"
///
/// Les espaces sont ignorés partout, y compris à l’intérieur d’un littéral ("1 2" == "12").
pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out: Vec<Token> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Littéral numérique
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            if est_marqueur_exposant(&chars, i) {
                i += 1;
                if matches!(chars[i], '+' | '-') {
                    i += 1;
                }
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            let texte: String = chars[start..i].iter().collect();
            let n: f64 = texte
                .parse()
                .map_err(|_| CalcError::syntax(format!("nombre invalide: '{texte}'")))?;
            if !n.is_finite() {
                return Err(CalcError::syntax(format!("nombre hors limites: '{texte}'")));
            }

            // ")2" => ")×2"
            if matches!(out.last(), Some(Token::Symbol(Symbol::RParen))) {
                out.push(Token::Symbol(Symbol::Times));
            }
            out.push(Token::Number(n));
            continue;
        }

        let sym = match c {
            '+' => Symbol::Plus,
            '-' => Symbol::Minus,
            '×' | '*' => Symbol::Times,
            '÷' | '/' => Symbol::Divide,
            '^' => Symbol::Power,
            '(' => Symbol::LParen,
            ')' => Symbol::RParen,
            _ => return Err(CalcError::syntax(format!("caractère inattendu: '{c}'"))),
        };

        // "2(" et ")(" => multiplication implicite
        if sym == Symbol::LParen
            && matches!(
                out.last(),
                Some(Token::Number(_)) | Some(Token::Symbol(Symbol::RParen))
            )
        {
            out.push(Token::Symbol(Symbol::Times));
        }

        out.push(Token::Symbol(sym));
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (journalisation) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::Number(n) => format!("{n}"),
            Token::Symbol(Symbol::Negate) => "neg".to_string(),
            Token::Symbol(s) => s.as_char().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
