// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Toute opération publique retourne Result<_, CalcError> : jamais de panique sur une entrée utilisateur.

use thiserror::Error;

/// Discriminant simple, pour que l’appelant branche sur le type d’erreur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    DivisionByZero,
    Domain,
    Overflow,
    InvalidResult,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    /// Suite de jetons mal formée, parenthèses déséquilibrées, littéral illisible…
    #[error("erreur de syntaxe: {0}")]
    Syntax(String),

    #[error("division par zéro")]
    DivisionByZero,

    /// sqrt(<0), log(<=0), factorielle d’un négatif ou d’un non-entier.
    #[error("hors domaine: {0}")]
    Domain(String),

    /// Factorielle au-delà de 170.
    #[error("dépassement: {0}")]
    Overflow(String),

    /// Résultat final non fini (inf, -inf, NaN).
    #[error("résultat invalide")]
    InvalidResult,
}

impl CalcError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::Domain(_) => ErrorKind::Domain,
            Self::Overflow(_) => ErrorKind::Overflow,
            Self::InvalidResult => ErrorKind::InvalidResult,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
