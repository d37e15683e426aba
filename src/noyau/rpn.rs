// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Token en RPN (postfix)
// - Puis exécuter la RPN sur une pile numérique
//
// Règles:
// - Table des opérateurs binaires statique (lecture seule) : voir OPERATEURS.
// - Moins unaire:
//    - si '-' arrive quand on attend une valeur, il devient Symbol::Negate (préfixe)
//    - Negate lie moins fort que '^' (-2^2 = -4) et plus fort que '×' '÷'
// - Parenthèses déséquilibrées (dans les deux sens) => erreur de syntaxe.

use super::erreur::{CalcError, Result};
use super::jetons::{Symbol, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub precedence: u8,
    pub associativity: Associativity,
}

const fn desc(precedence: u8, associativity: Associativity) -> OperatorDescriptor {
    OperatorDescriptor {
        precedence,
        associativity,
    }
}

/// Les cinq opérateurs binaires.
pub const OPERATEURS: [(Symbol, OperatorDescriptor); 5] = [
    (Symbol::Plus, desc(1, Associativity::Left)),
    (Symbol::Minus, desc(1, Associativity::Left)),
    (Symbol::Times, desc(2, Associativity::Left)),
    (Symbol::Divide, desc(2, Associativity::Left)),
    (Symbol::Power, desc(3, Associativity::Right)),
];

/// Négation préfixée (hors table binaire).
const NEGATION: OperatorDescriptor = desc(2, Associativity::Right);

pub fn descriptor(sym: Symbol) -> Option<OperatorDescriptor> {
    if sym == Symbol::Negate {
        return Some(NEGATION);
    }
    OPERATEURS
        .iter()
        .find(|(s, _)| *s == sym)
        .map(|(_, d)| *d)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [2, ^, 3, ^, 2]
///   rpn:    [2, 3, 2, ^, ^]
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    // invariant: `ops` ne contient jamais de ')'
    let mut ops: Vec<Symbol> = Vec::new();

    // Vrai en début d’expression, après '(' et après un opérateur.
    let mut attend_valeur = true;

    for &tok in tokens {
        match tok {
            Token::Number(_) => {
                out.push(tok);
                attend_valeur = false;
            }

            Token::Symbol(Symbol::LParen) => {
                ops.push(Symbol::LParen);
                attend_valeur = true;
            }

            Token::Symbol(Symbol::RParen) => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Symbol::LParen) => break,
                        Some(op) => out.push(Token::Symbol(op)),
                        None => {
                            return Err(CalcError::syntax("parenthèse fermante sans ouvrante"))
                        }
                    }
                }
                attend_valeur = false;
            }

            // Préfixe : on empile sans rien dépiler.
            Token::Symbol(Symbol::Minus) if attend_valeur => ops.push(Symbol::Negate),
            Token::Symbol(Symbol::Negate) => ops.push(Symbol::Negate),

            Token::Symbol(sym) => {
                let Some(cur) = descriptor(sym) else {
                    return Err(CalcError::syntax(format!("opérateur inconnu: '{}'", sym.as_char())));
                };

                while let Some(&top) = ops.last() {
                    let Some(d_top) = descriptor(top) else {
                        break; // '('
                    };
                    let doit_pop = match cur.associativity {
                        Associativity::Left => d_top.precedence >= cur.precedence,
                        Associativity::Right => d_top.precedence > cur.precedence,
                    };
                    if !doit_pop {
                        break;
                    }
                    ops.pop();
                    out.push(Token::Symbol(top));
                }

                ops.push(sym);
                attend_valeur = true;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Symbol::LParen {
            return Err(CalcError::syntax("parenthèse non fermée"));
        }
        out.push(Token::Symbol(op));
    }

    Ok(out)
}

/// Exécute une RPN. Exactement une valeur doit rester sur la pile.
///
/// La finitude du résultat n’est pas vérifiée ici (voir `evaluate`).
pub fn eval_rpn(rpn: &[Token]) -> Result<f64> {
    let mut pile: Vec<f64> = Vec::new();

    for &tok in rpn {
        let sym = match tok {
            Token::Number(n) => {
                pile.push(n);
                continue;
            }
            Token::Symbol(sym) => sym,
        };

        if sym == Symbol::Negate {
            let a = pile.pop().ok_or_else(|| CalcError::syntax("opérande manquant"))?;
            pile.push(-a);
            continue;
        }

        let b = pile.pop().ok_or_else(|| CalcError::syntax("opérande manquant"))?;
        let a = pile.pop().ok_or_else(|| CalcError::syntax("opérande manquant"))?;

        let v = match sym {
            Symbol::Plus => a + b,
            Symbol::Minus => a - b,
            Symbol::Times => a * b,
            Symbol::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            Symbol::Power => a.powf(b),
            Symbol::LParen | Symbol::RParen | Symbol::Negate => {
                return Err(CalcError::syntax("parenthèse inattendue en RPN"))
            }
        };
        pile.push(v);
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        [] => Err(CalcError::syntax("expression vide")),
        _ => Err(CalcError::syntax("expression invalide")),
    }
}
