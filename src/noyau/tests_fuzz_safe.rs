//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées : seules les erreurs “de calcul” sont admises
//! - bruit arbitraire : jamais de panique, toujours une erreur typée ou une valeur finie

use std::time::{Duration, Instant};

use super::{evaluate, format_number, ErrorKind};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(1000))
    } else {
        format!("{entier}")
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "π".to_string(),
        4 => "e".to_string(),
        _ => format!("sqrt({})", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(10) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}×{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}÷{})", gen_expr(rng, depth - 1)),
        5 => format!("({a})^{}", rng.pick(4)),
        6 => format!("sin({a})"),
        7 => format!("cos({a})"),
        8 => format!("ln({a})"),
        _ => format!("-{a}"),
    }
}

fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: [char; 22] = [
        '0', '1', '7', '.', '+', '-', '×', '÷', '^', '(', ')', ' ', 'π', 'e', 's', 'i', 'n', 'q',
        'r', 't', '*', '/',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        let r1 = evaluate(&expr);
        let r2 = evaluate(&expr);
        assert_eq!(r1, r2, "non déterministe: {expr:?}");

        match r1 {
            Ok(v) => {
                assert!(v.is_finite(), "résultat non fini: {expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                // une expression bien formée n’échoue jamais en syntaxe
                assert_ne!(
                    e.kind(),
                    ErrorKind::Syntax,
                    "erreur de syntaxe inattendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let len = 1 + rng.pick(24) as usize;
        let expr = gen_bruit(&mut rng, len);

        if let Ok(v) = evaluate(&expr) {
            assert!(v.is_finite(), "résultat non fini: {expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_aller_retour_format() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let Ok(v) = evaluate(&expr) else {
            continue;
        };

        let texte = format_number(v);
        let relu = evaluate(&texte).unwrap_or_else(|e| panic!("{texte:?} illisible: {e}"));

        // 6 décimales de mantisse en notation exponentielle => tolérance relative
        let tol = if texte.contains('e') {
            v.abs() * 1e-6 + 1e-10
        } else {
            1e-10
        };
        assert!(
            (relu - v).abs() <= tol,
            "aller-retour: expr={expr:?} v={v} texte={texte:?} relu={relu}"
        );
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let expr = somme_balancee("1÷2", 800);
    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_fonctions_imbriquees_profondes() {
    let expr = format!("{}16{}", "sqrt(".repeat(40), ")".repeat(40));
    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert!((v - 1.0).abs() < 1e-10);
}

#[test]
fn fuzz_safe_imbrication_excessive_erreur_typee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    for n in [3_000, 10_000] {
        let expr = format!("{}16{}", "sqrt(".repeat(n), ")".repeat(n));
        let err = evaluate(&expr).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax, "n={n}: {err}");
        budget(t0, max);
    }
}
