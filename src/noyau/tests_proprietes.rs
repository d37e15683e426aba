//! Propriétés observables du noyau (API publique uniquement).

use super::{apply_function, evaluate, format_number, CalcError, ErrorKind};

fn ok(s: &str) -> f64 {
    evaluate(s).unwrap_or_else(|e| panic!("evaluate({s:?}) erreur: {e}"))
}

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-10
}

/* ------------------------ Grammaire ------------------------ */

#[test]
fn prop_precedence() {
    assert_eq!(ok("2+3×4"), 14.0);
}

#[test]
fn prop_puissance_a_droite() {
    assert_eq!(ok("2^3^2"), 512.0);
}

#[test]
fn prop_parentheses() {
    assert_eq!(ok("(2+3)×4"), 20.0);
}

#[test]
fn prop_division_par_zero() {
    assert_eq!(evaluate("5÷0"), Err(CalcError::DivisionByZero));
}

#[test]
fn prop_constante_pi() {
    assert!(proche(ok("π"), 3.14159265358979));
}

#[test]
fn prop_fonctions_dans_expression() {
    assert_eq!(ok("sin(0)"), 0.0);
    assert_eq!(ok("sqrt(16)"), 4.0);
}

#[test]
fn prop_fonctions_imbriquees() {
    assert!(proche(ok("sin(cos(0)-1)"), 0.0));
    assert!(proche(ok("sqrt(sqrt(81))+log(log(10^10))"), 4.0));
}

#[test]
fn prop_determinisme() {
    for s in ["2+3×4", "sqrt(2)", "5÷0", "(1+", "ln(0)"] {
        assert_eq!(evaluate(s), evaluate(s), "{s:?}");
    }
}

/* ------------------------ Fonctions “sur le total courant” ------------------------ */

#[test]
fn prop_racine_negative() {
    assert_eq!(
        apply_function("sqrt", -1.0).unwrap_err().kind(),
        ErrorKind::Domain
    );
}

#[test]
fn prop_factorielle_bornes() {
    assert!(apply_function("!", 170.0).is_ok());
    assert_eq!(
        apply_function("!", 171.0).unwrap_err().kind(),
        ErrorKind::Overflow
    );
    assert_eq!(
        apply_function("!", 3.5).unwrap_err().kind(),
        ErrorKind::Domain
    );
}

/* ------------------------ Formatage ------------------------ */

#[test]
fn prop_seuil_exponentielle() {
    assert!(format_number(1e11).contains('e'));
    assert_eq!(format_number(123.456), "123.456");
}

#[test]
fn prop_aller_retour() {
    for v in [
        0.0,
        1.0,
        -1.0,
        0.1 + 0.2,
        123.456,
        -98765.4321,
        std::f64::consts::PI,
        1e11,
        -3.5e-8,
        2.5e-7,
    ] {
        let texte = format_number(v);
        let relu = ok(&texte);
        let tol = if texte.contains('e') {
            v.abs() * 1e-6 + 1e-10
        } else {
            1e-10
        };
        assert!((relu - v).abs() <= tol, "v={v} texte={texte:?} relu={relu}");
    }
}

#[test]
fn prop_enchainement_ui() {
    // x² sur le résultat formaté d’une évaluation, puis ré-évaluation du texte
    let v = ok("1.5+1.5");
    let carre = apply_function("x²", v).unwrap();
    assert_eq!(ok(&format_number(carre)), 9.0);

    // +/- produit un négatif qui se relit
    let neg = apply_function("+/-", ok("sqrt(16)")).unwrap();
    assert_eq!(ok(&format_number(neg)), -4.0);
}
