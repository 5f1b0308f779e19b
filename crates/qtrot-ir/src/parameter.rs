//! Coefficients for parameterized rotation angles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{IrError, IrResult};

/// A concrete or symbolic scalar.
///
/// Scaling by a plain `f64` folds into a [`Coefficient::Constant`] when the
/// value is concrete and builds a deferred expression otherwise, so symbolic
/// angles survive decomposition untouched and are resolved by [`bind`].
///
/// [`bind`]: Coefficient::bind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Coefficient {
    /// A constant numeric value.
    Constant(f64),
    /// A named variable, bound later.
    Symbol(String),
    /// Negation.
    Neg(Box<Coefficient>),
    /// Addition.
    Add(Box<Coefficient>, Box<Coefficient>),
    /// Subtraction.
    Sub(Box<Coefficient>, Box<Coefficient>),
    /// Multiplication.
    Mul(Box<Coefficient>, Box<Coefficient>),
    /// Division.
    Div(Box<Coefficient>, Box<Coefficient>),
}

impl Coefficient {
    /// Create a constant coefficient.
    pub fn constant(value: f64) -> Self {
        Coefficient::Constant(value)
    }

    /// Create a symbolic coefficient.
    pub fn symbol(name: impl Into<String>) -> Self {
        Coefficient::Symbol(name.into())
    }

    /// The identity coefficient `1.0`.
    pub fn one() -> Self {
        Coefficient::Constant(1.0)
    }

    /// Check if this expression contains any symbols.
    pub fn is_symbolic(&self) -> bool {
        match self {
            Coefficient::Symbol(_) => true,
            Coefficient::Constant(_) => false,
            Coefficient::Neg(e) => e.is_symbolic(),
            Coefficient::Add(a, b)
            | Coefficient::Sub(a, b)
            | Coefficient::Mul(a, b)
            | Coefficient::Div(a, b) => a.is_symbolic() || b.is_symbolic(),
        }
    }

    /// Try to evaluate as a concrete f64 value.
    ///
    /// Returns `None` for unbound symbols and for division by zero.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Coefficient::Constant(v) => Some(*v),
            Coefficient::Symbol(_) => None,
            Coefficient::Neg(e) => e.as_f64().map(|v| -v),
            Coefficient::Add(a, b) => Some(a.as_f64()? + b.as_f64()?),
            Coefficient::Sub(a, b) => Some(a.as_f64()? - b.as_f64()?),
            Coefficient::Mul(a, b) => Some(a.as_f64()? * b.as_f64()?),
            Coefficient::Div(a, b) => {
                let divisor = b.as_f64()?;
                if divisor == 0.0 {
                    return None;
                }
                Some(a.as_f64()? / divisor)
            }
        }
    }

    /// Numeric multiplier of a product/quotient expression, counting every
    /// symbol as `1.0`.
    ///
    /// `(t / 4) * 0.5` gives `Some(0.125)`. Returns `None` when the value is
    /// not a single monomial (sums, differences, symbolic divisors).
    pub fn constant_factor(&self) -> Option<f64> {
        match self {
            Coefficient::Constant(v) => Some(*v),
            Coefficient::Symbol(_) => Some(1.0),
            Coefficient::Neg(e) => e.constant_factor().map(|v| -v),
            Coefficient::Mul(a, b) => Some(a.constant_factor()? * b.constant_factor()?),
            Coefficient::Div(a, b) => {
                let divisor = b.as_f64()?;
                if divisor == 0.0 {
                    return None;
                }
                Some(a.constant_factor()? / divisor)
            }
            Coefficient::Add(..) | Coefficient::Sub(..) => None,
        }
    }

    /// Evaluate to a concrete value, reporting why that is impossible.
    pub fn evaluate(&self) -> IrResult<f64> {
        if let Some(name) = self.symbols().into_iter().next() {
            return Err(IrError::UnboundParameter(name));
        }
        self.as_f64()
            .ok_or_else(|| IrError::DivisionByZero(self.to_string()))
    }

    /// Get all symbol names in this expression, sorted.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        self.collect_symbols(&mut set);
        set
    }

    pub(crate) fn collect_symbols(&self, set: &mut BTreeSet<String>) {
        match self {
            Coefficient::Constant(_) => {}
            Coefficient::Symbol(name) => {
                set.insert(name.clone());
            }
            Coefficient::Neg(e) => e.collect_symbols(set),
            Coefficient::Add(a, b)
            | Coefficient::Sub(a, b)
            | Coefficient::Mul(a, b)
            | Coefficient::Div(a, b) => {
                a.collect_symbols(set);
                b.collect_symbols(set);
            }
        }
    }

    /// Bind a symbol to a value, returning a new expression.
    pub fn bind(&self, name: &str, value: f64) -> Self {
        match self {
            Coefficient::Symbol(n) if n == name => Coefficient::Constant(value),
            Coefficient::Constant(_) | Coefficient::Symbol(_) => self.clone(),
            Coefficient::Neg(e) => Coefficient::Neg(Box::new(e.bind(name, value))),
            Coefficient::Add(a, b) => Coefficient::Add(
                Box::new(a.bind(name, value)),
                Box::new(b.bind(name, value)),
            ),
            Coefficient::Sub(a, b) => Coefficient::Sub(
                Box::new(a.bind(name, value)),
                Box::new(b.bind(name, value)),
            ),
            Coefficient::Mul(a, b) => Coefficient::Mul(
                Box::new(a.bind(name, value)),
                Box::new(b.bind(name, value)),
            ),
            Coefficient::Div(a, b) => Coefficient::Div(
                Box::new(a.bind(name, value)),
                Box::new(b.bind(name, value)),
            ),
        }
    }

    /// Collapse the expression to a constant if every leaf is concrete.
    pub fn simplify(&self) -> Self {
        match self.as_f64() {
            Some(v) => Coefficient::Constant(v),
            None => self.clone(),
        }
    }

    /// Multiply by a plain number.
    ///
    /// Constants fold immediately; a factor of exactly `1.0` leaves the
    /// expression unchanged.
    pub fn scale(&self, factor: f64) -> Self {
        match self {
            Coefficient::Constant(v) => Coefficient::Constant(v * factor),
            _ if factor == 1.0 => self.clone(),
            _ => Coefficient::Mul(
                Box::new(self.clone()),
                Box::new(Coefficient::Constant(factor)),
            ),
        }
    }

    /// Divide by a plain number.
    ///
    /// Constants fold immediately; a divisor of exactly `1.0` leaves the
    /// expression unchanged.
    pub fn divide(&self, divisor: f64) -> Self {
        match self {
            Coefficient::Constant(v) => Coefficient::Constant(v / divisor),
            _ if divisor == 1.0 => self.clone(),
            _ => Coefficient::Div(
                Box::new(self.clone()),
                Box::new(Coefficient::Constant(divisor)),
            ),
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Constant(v) => write!(f, "{v}"),
            Coefficient::Symbol(name) => write!(f, "{name}"),
            Coefficient::Neg(e) => write!(f, "-({e})"),
            Coefficient::Add(a, b) => write!(f, "({a} + {b})"),
            Coefficient::Sub(a, b) => write!(f, "({a} - {b})"),
            Coefficient::Mul(a, b) => write!(f, "({a} * {b})"),
            Coefficient::Div(a, b) => write!(f, "({a} / {b})"),
        }
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Coefficient::Constant(value)
    }
}

impl From<i32> for Coefficient {
    fn from(value: i32) -> Self {
        Coefficient::Constant(f64::from(value))
    }
}

impl std::ops::Add for Coefficient {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Coefficient::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Sub for Coefficient {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Coefficient::Sub(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for Coefficient {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Coefficient::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Div for Coefficient {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Coefficient::Div(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for Coefficient {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Coefficient::Constant(v) => Coefficient::Constant(-v),
            other => Coefficient::Neg(Box::new(other)),
        }
    }
}

impl std::ops::Mul<f64> for Coefficient {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Mul<f64> for &Coefficient {
    type Output = Coefficient;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Div<f64> for Coefficient {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

impl std::ops::Div<f64> for &Coefficient {
    type Output = Coefficient;

    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant() {
        let c = Coefficient::constant(1.5);
        assert!(!c.is_symbolic());
        assert_eq!(c.as_f64(), Some(1.5));
        assert_eq!(c.evaluate().unwrap(), 1.5);
    }

    #[test]
    fn test_symbol() {
        let c = Coefficient::symbol("t");
        assert!(c.is_symbolic());
        assert_eq!(c.as_f64(), None);
        assert!(c.symbols().contains("t"));
        assert!(matches!(c.evaluate(), Err(IrError::UnboundParameter(n)) if n == "t"));
    }

    #[test]
    fn test_scalar_ops_fold_constants() {
        let c = Coefficient::constant(3.0);
        assert_eq!(&c * 2.0, Coefficient::Constant(6.0));
        assert_eq!(&c / 2.0, Coefficient::Constant(1.5));
        assert_eq!(-c, Coefficient::Constant(-3.0));
    }

    #[test]
    fn test_scalar_ops_defer_symbols() {
        let t = Coefficient::symbol("t");
        let scaled = (&t / 4.0) * 0.5;
        assert!(scaled.is_symbolic());
        assert_eq!(scaled.to_string(), "((t / 4) * 0.5)");

        let bound = scaled.bind("t", 2.0);
        assert!(!bound.is_symbolic());
        assert!((bound.as_f64().unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_unit_scaling_is_identity() {
        let t = Coefficient::symbol("t");
        assert_eq!(&t / 1.0, t);
        assert_eq!(&t * 1.0, t);
    }

    #[test]
    fn test_division_by_zero() {
        let c = Coefficient::constant(1.0) / Coefficient::constant(0.0);
        assert_eq!(c.as_f64(), None);
        assert!(matches!(c.evaluate(), Err(IrError::DivisionByZero(_))));
    }

    #[test]
    fn test_arithmetic_and_simplify() {
        let a = Coefficient::constant(2.0);
        let b = Coefficient::symbol("b");

        let expr = a.clone() + b.clone() * a.clone();
        assert_eq!(expr.simplify(), expr);
        assert_eq!(expr.bind("b", 3.0).simplify(), Coefficient::Constant(8.0));
    }

    #[test]
    fn test_symbols_sorted() {
        let expr = Coefficient::symbol("z") + Coefficient::symbol("a") - Coefficient::symbol("m");
        let names: Vec<String> = expr.symbols().into_iter().collect();
        assert_eq!(names, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_constant_factor() {
        let t = Coefficient::symbol("t");
        assert_eq!(Coefficient::constant(2.0).constant_factor(), Some(2.0));
        assert_eq!(t.constant_factor(), Some(1.0));
        assert_eq!(t.divide(4.0).scale(0.5).constant_factor(), Some(0.125));
        assert_eq!((-t.scale(3.0)).constant_factor(), Some(-3.0));
        assert_eq!((t.clone() + Coefficient::one()).constant_factor(), None);
        assert_eq!((Coefficient::one() / t).constant_factor(), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let expr = Coefficient::symbol("t") / 2.0;
        let json = serde_json::to_string(&expr).unwrap();
        let back: Coefficient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }
}
