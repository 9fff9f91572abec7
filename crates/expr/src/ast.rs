use std::{fmt, str::FromStr};

use crate::{ParseError, parser};

/// A parsed expression in the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),

    /// The free variable `x`.
    Var,

    /// A named constant such as `pi`.
    Const(Constant),

    /// Arithmetic negation.
    Neg(Box<Expr>),

    /// A call to one of the permitted functions.
    Call(Func, Box<Expr>),

    /// A binary arithmetic operation.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Parses an expression from text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem in `source`.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        parser::parse(source)
    }

    pub(crate) fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Returns true if the expression references `x`.
    #[must_use]
    pub fn depends_on_x(&self) -> bool {
        match self {
            Self::Var => true,
            Self::Number(_) | Self::Const(_) => false,
            Self::Neg(inner) | Self::Call(_, inner) => inner.depends_on_x(),
            Self::Binary(_, lhs, rhs) => lhs.depends_on_x() || rhs.depends_on_x(),
        }
    }
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the expression fully parenthesized, so the tree shape is explicit.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Var => f.write_str("x"),
            Self::Const(constant) => write!(f, "{constant}"),
            Self::Neg(inner) => write!(f, "-({inner})"),
            Self::Call(func, arg) => write!(f, "{func}({arg})"),
            Self::Binary(op, lhs, rhs) => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

/// Functions that may appear in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
    Sqrt,
    Abs,
}

impl Func {
    pub const ALL: [Func; 7] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Exp,
        Self::Log,
        Self::Sqrt,
        Self::Abs,
    ];

    /// Looks up a function by its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named constants that may appear in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
    Tau,
}

impl Constant {
    pub const ALL: [Constant; 3] = [Self::Pi, Self::E, Self::Tau];

    /// Looks up a constant by its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|constant| constant.name() == name)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
            Self::Tau => "tau",
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
            Self::Tau => std::f64::consts::TAU,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for func in Func::ALL {
            assert_eq!(Func::from_name(func.name()), Some(func));
        }
        for constant in Constant::ALL {
            assert_eq!(Constant::from_name(constant.name()), Some(constant));
        }
        assert_eq!(Func::from_name("eval"), None);
        assert_eq!(Constant::from_name("x"), None);
    }

    #[test]
    fn display_is_fully_parenthesized() {
        let expr = Expr::binary(
            BinaryOp::Add,
            Expr::binary(BinaryOp::Pow, Expr::Var, Expr::Number(2.0)),
            Expr::Call(Func::Sin, Box::new(Expr::Const(Constant::Pi))),
        );
        assert_eq!(expr.to_string(), "((x ** 2) + sin(pi))");
    }

    #[test]
    fn detects_dependence_on_x() {
        assert!(Expr::Neg(Box::new(Expr::Var)).depends_on_x());
        assert!(!Expr::Call(Func::Exp, Box::new(Expr::Number(1.0))).depends_on_x());
    }
}
