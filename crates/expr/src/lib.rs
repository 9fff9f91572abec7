//! A small expression language for objectives in one variable.
//!
//! Expressions are parsed into an [`Expr`] tree over a closed grammar and
//! evaluated by walking that tree. Nothing outside the grammar below can be
//! named, so a formula cannot reach any capability of the host program.
//!
//! # Grammar
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/") unary)*
//! unary   := ("+" | "-") unary | power
//! power   := primary (("**" | "^") unary)?
//! primary := number | name | name "(" expr ")" | "(" expr ")"
//! name    := ident | "math" "." ident
//! ```
//!
//! Power is right-associative and binds tighter than unary minus, so
//! `-x**2` is `-(x**2)` and `2**3**2` is `2**9`.
//!
//! The only variable is `x`. Functions: `sin`, `cos`, `tan`, `exp`, `log`
//! (natural), `sqrt`, `abs`. Constants: `pi`, `e`, `tau`. Functions and
//! constants may also be written with a `math.` prefix, as in
//! `math.sin(x) + math.pi`.
//!
//! # Example
//!
//! ```
//! use goldsect_expr::Expr;
//!
//! let expr: Expr = "(x - 2)**2 + math.sin(x)".parse().unwrap();
//! assert_eq!(expr.eval(2.0).unwrap(), 2.0_f64.sin());
//! ```

mod ast;
mod error;
mod eval;
mod lexer;
mod parser;

pub use ast::{BinaryOp, Constant, Expr, Func};
pub use error::ParseError;
pub use eval::EvalError;
