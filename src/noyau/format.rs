// src/noyau/format.rs
//
// Affichage canonique d’un résultat :
// - arrondi EXACT à 10 décimales (rationnels : pas de débordement de x·10^10)
// - notation exponentielle si |x| > 1e10 ou 0 < |x| < 1e-6 (6 décimales, exposant signé)
// - sinon décimal minimal
//
// La chaîne produite est relue par evaluate() (exposant compris).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

pub const DECIMALES_ARRONDI: u32 = 10;
pub const SEUIL_GRAND: f64 = 1e10;
pub const SEUIL_PETIT: f64 = 1e-6;
const CHIFFRES_EXPONENTIELLE: usize = 6;

pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let r = arrondir(value, DECIMALES_ARRONDI);
    // -0 => 0
    let r = if r == 0.0 { 0.0 } else { r };

    let m = r.abs();
    if m > SEUIL_GRAND || (m > 0.0 && m < SEUIL_PETIT) {
        return format_exponentielle(r);
    }
    format!("{r}")
}

/// Arrondi au plus proche à `decimales` (demi : loin de zéro).
fn arrondir(v: f64, decimales: u32) -> f64 {
    if v.fract() == 0.0 {
        return v;
    }
    let Some(q) = BigRational::from_float(v) else {
        return v;
    };
    let echelle = BigRational::from_integer(BigInt::from(10).pow(decimales));
    ((q * &echelle).round() / echelle).to_f64().unwrap_or(v)
}

/// 1e11 => "1.000000e+11" ; 1.5e-7 => "1.500000e-7"
fn format_exponentielle(v: f64) -> String {
    let s = format!("{:.*e}", CHIFFRES_EXPONENTIELLE, v);
    match s.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_minimal() {
        assert_eq!(format_number(123.456), "123.456");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn bruit_flottant_absorbe() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 - 0.9), "0.1");
    }

    #[test]
    fn zero_negatif() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1e-12), "0");
    }

    #[test]
    fn grands_nombres() {
        assert_eq!(format_number(1e11), "1.000000e+11");
        assert_eq!(format_number(-2.5e15), "-2.500000e+15");
        assert_eq!(format_number(1e10), "10000000000");
        assert_eq!(format_number(1e300), "1.000000e+300");
    }

    #[test]
    fn petits_nombres() {
        // arrondi à 10 décimales AVANT la mise en forme
        assert_eq!(format_number(1.2345678e-7), "1.235000e-7");
        assert_eq!(format_number(1.5e-7), "1.500000e-7");
        assert_eq!(format_number(-5e-7), "-5.000000e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn non_finis() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
