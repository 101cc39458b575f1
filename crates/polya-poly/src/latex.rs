//! LaTeX rendering of polynomials.
//!
//! The output is meant for the body of a `matrix*` environment: each monomial
//! becomes `coefficient&variables`, monomials on a row are joined with
//! `&+&`, and rows end in `\\`. Monomials appear in insertion order.

use polya_integers::Rational;

use crate::exponent::Exponents;
use crate::polynomial::Polynomial;

/// Layout knobs for [`LatexStyle::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatexStyle {
    /// Monomials per row. Values below one are treated as one.
    pub terms_per_row: usize,
    /// Placed between monomials on the same row.
    pub term_separator: String,
    /// Placed between rows.
    pub row_separator: String,
}

impl Default for LatexStyle {
    fn default() -> Self {
        Self {
            terms_per_row: 3,
            term_separator: "&+&".to_owned(),
            row_separator: "\\\\\n".to_owned(),
        }
    }
}

/// Renders one display fragment per monomial, in insertion order.
#[must_use]
pub fn fragments(poly: &Polynomial) -> Vec<String> {
    poly.terms()
        .map(|(exps, coeff)| monomial(exps, coeff))
        .collect()
}

impl LatexStyle {
    /// Renders the whole polynomial, grouped into rows.
    ///
    /// A polynomial without monomials renders as `0`.
    #[must_use]
    pub fn render(&self, poly: &Polynomial) -> String {
        if poly.is_empty() {
            return "0".to_owned();
        }

        fragments(poly)
            .chunks(self.terms_per_row.max(1))
            .map(|row| row.join(&self.term_separator))
            .collect::<Vec<_>>()
            .join(&self.row_separator)
    }
}

/// `n` for integers, `\frac{n}{d}` otherwise.
#[must_use]
pub fn rational(r: &Rational) -> String {
    if r.is_integer() {
        r.numerator().to_string()
    } else {
        format!("\\frac{{{}}}{{{}}}", r.numerator(), r.denominator())
    }
}

/// `x_{i}` or `x_{i}^{e}` for the 0-based variable `index`.
#[must_use]
pub fn power(index: usize, exponent: u64) -> String {
    if exponent == 1 {
        format!("x_{{{}}}", index + 1)
    } else {
        format!("x_{{{}}}^{{{exponent}}}", index + 1)
    }
}

/// A single monomial: the coefficient alone for constants, otherwise the
/// coefficient and the variable powers separated by an alignment tab.
#[must_use]
pub fn monomial(exps: &Exponents, coeff: &Rational) -> String {
    if exps.is_constant() {
        return rational(coeff);
    }
    let vars: Vec<_> = exps.nonzero().map(|(i, e)| power(i, e)).collect();
    format!("{}&{}", rational(coeff), vars.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    fn ex(exps: &[u64]) -> Exponents {
        Exponents::from(exps)
    }

    #[test]
    fn test_rational() {
        assert_eq!(rational(&q(4, 1)), "4");
        assert_eq!(rational(&q(-1, 6)), "\\frac{-1}{6}");
    }

    #[test]
    fn test_monomial() {
        assert_eq!(monomial(&ex(&[0, 0]), &q(1, 2)), "\\frac{1}{2}");
        assert_eq!(
            monomial(&ex(&[3, 0, 1]), &q(1, 6)),
            "\\frac{1}{6}&x_{1}^{3} x_{3}"
        );
        assert_eq!(monomial(&ex(&[0, 2]), &q(5, 1)), "5&x_{2}^{2}");
    }

    #[test]
    fn test_render_rows() {
        let p = Polynomial::from_terms(
            1,
            (0..5u64).map(|e| (ex(&[e]), q(i64::try_from(e).unwrap() + 1, 1))),
        )
        .unwrap();
        let style = LatexStyle::default();
        assert_eq!(
            style.render(&p),
            "1&+&2&x_{1}&+&3&x_{1}^{2}\\\\\n4&x_{1}^{3}&+&5&x_{1}^{4}"
        );
    }

    #[test]
    fn test_render_custom_style() {
        let p = Polynomial::var(1) + Polynomial::var(2);
        let style = LatexStyle {
            terms_per_row: 1,
            term_separator: " + ".to_owned(),
            row_separator: " | ".to_owned(),
        };
        assert_eq!(style.render(&p), "1&x_{2} | 1&x_{1}");
        assert_eq!(fragments(&p).len(), 2);
    }

    #[test]
    fn test_render_zero() {
        assert_eq!(LatexStyle::default().render(&Polynomial::zero(4)), "0");
    }
}
