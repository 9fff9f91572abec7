use thiserror::Error;

use crate::{BinaryOp, Expr, Func};

/// Errors that can occur when evaluating an expression at a point.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    #[error("{func}({arg}) is undefined")]
    Domain { func: Func, arg: f64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{base} ** {exponent} is not a real number")]
    ComplexPower { base: f64, exponent: f64 },

    #[error("numeric overflow")]
    Overflow,
}

impl Expr {
    /// Evaluates the expression with `x` bound to the given value.
    ///
    /// Addition, subtraction, and multiplication follow IEEE semantics and
    /// may produce infinities. Functions, division, and powers report
    /// undefined or overflowing results as errors.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if any subexpression is undefined at `x`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Var => Ok(x),
            Self::Const(constant) => Ok(constant.value()),
            Self::Neg(inner) => Ok(-inner.eval(x)?),
            Self::Call(func, arg) => func.apply(arg.eval(x)?),
            Self::Binary(op, lhs, rhs) => op.apply(lhs.eval(x)?, rhs.eval(x)?),
        }
    }
}

impl Func {
    /// Applies the function to a single argument.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Domain`] outside the function's real domain and
    /// [`EvalError::Overflow`] if `exp` overflows.
    pub fn apply(self, arg: f64) -> Result<f64, EvalError> {
        let domain = || EvalError::Domain { func: self, arg };
        match self {
            Self::Sin | Self::Cos | Self::Tan if arg.is_infinite() => Err(domain()),
            Self::Sin => Ok(arg.sin()),
            Self::Cos => Ok(arg.cos()),
            Self::Tan => Ok(arg.tan()),
            Self::Exp => {
                let value = arg.exp();
                if value.is_infinite() && arg.is_finite() {
                    Err(EvalError::Overflow)
                } else {
                    Ok(value)
                }
            }
            Self::Log if arg <= 0.0 || arg.is_nan() => Err(domain()),
            Self::Log => Ok(arg.ln()),
            Self::Sqrt if arg < 0.0 => Err(domain()),
            Self::Sqrt => Ok(arg.sqrt()),
            Self::Abs => Ok(arg.abs()),
        }
    }
}

impl BinaryOp {
    /// Applies the operator to two operands.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] for division by zero, for non-real or
    /// overflowing powers.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
            Self::Pow => pow(lhs, rhs),
        }
    }
}

fn pow(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(EvalError::ComplexPower { base, exponent });
    }
    let value = base.powf(exponent);
    if value.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(EvalError::Overflow);
    }
    Ok(value)
}
