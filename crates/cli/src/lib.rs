//! Golden-section search from the command line.
//!
//! The `goldsect` binary minimizes or maximizes either a built-in
//! [`Example`] or a formula in `x` written in the `goldsect-expr` language.
//! [`run`] holds everything except argument parsing, logging setup, and
//! printing, so it can be driven directly from tests.

pub mod builtin;

use std::fmt;

use anyhow::{Context, bail};
use clap::{ArgGroup, Parser};
use goldsect_core::Observer;
use goldsect_expr::{EvalError, Expr};
use goldsect_observers::{EvalBudget, LogEvents};
use goldsect_solvers::optimization::{
    Goal,
    golden_section::{Action, Config, DEFAULT_MAX_ITERS, DEFAULT_TOL, Event, Solution, optimize},
};
use serde::Serialize;
use tracing::{info, warn};

pub use builtin::Example;

/// Command-line arguments for `goldsect`.
#[derive(Debug, Clone, Parser)]
#[command(name = "goldsect", version)]
#[command(about = "Golden-section search (1D optimization)")]
#[command(group(ArgGroup::new("function").required(true).args(["example", "expr"])))]
pub struct Args {
    /// Left endpoint of the interval.
    #[arg(long, allow_negative_numbers = true)]
    pub a: f64,

    /// Right endpoint of the interval.
    #[arg(long, allow_negative_numbers = true)]
    pub b: f64,

    /// Stop once the bracket is no wider than this.
    #[arg(long, default_value_t = DEFAULT_TOL)]
    pub tol: f64,

    /// Maximum number of shrink iterations.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERS)]
    pub max_iter: usize,

    /// Search for a maximum instead of a minimum.
    #[arg(long)]
    pub maximize: bool,

    /// Use a built-in example function.
    #[arg(long, value_enum)]
    pub example: Option<Example>,

    /// Expression in x to optimize, e.g. "(x-2)**2 + math.sin(x)".
    #[arg(long)]
    pub expr: Option<String>,

    /// Stop after this many observed interior evaluations.
    #[arg(long)]
    pub max_evals: Option<usize>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Resolves the objective named by `--example` or `--expr`.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one of the two is given, or if the
    /// expression does not parse.
    pub fn function(&self) -> anyhow::Result<Function> {
        match (self.example, &self.expr) {
            (Some(example), None) => Ok(Function::Example(example)),
            (None, Some(text)) => {
                let expr = Expr::parse(text)
                    .with_context(|| format!("invalid expression {text:?}"))?;
                Ok(Function::Expr {
                    text: text.clone(),
                    expr,
                })
            }
            (Some(_), Some(_)) => bail!("choose either --example or --expr, not both"),
            (None, None) => bail!("provide --example or --expr"),
        }
    }
}

/// An objective chosen on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    Example(Example),
    Expr { text: String, expr: Expr },
}

impl Function {
    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if an expression is undefined at `x`.
    /// Built-in examples never fail.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Self::Example(example) => Ok(example.eval(x)),
            Self::Expr { expr, .. } => expr.eval(x),
        }
    }

    /// Returns true if the function does not depend on `x`.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Example(_) => false,
            Self::Expr { expr, .. } => !expr.depends_on_x(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Example(example) => write!(f, "{example}"),
            Self::Expr { text, .. } => f.write_str(text.trim()),
        }
    }
}

/// The outcome of a search, ready for printing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub function: String,
    pub goal: Goal,

    #[serde(flatten)]
    pub solution: Solution,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Solution {
            status,
            x,
            objective,
            bracket: [left, right],
            iters,
            evals,
        } = &self.solution;

        writeln!(f, "Result:")?;
        writeln!(f, "  x_opt = {x}")?;
        writeln!(f, "  f(x_opt) = {objective}")?;
        writeln!(f, "  iterations = {iters}")?;
        writeln!(f, "  evaluations = {evals}")?;
        writeln!(f, "  status = {status}")?;
        writeln!(f, "  final bracket = [{left}, {right}]")?;
        writeln!(f, "  final interval length = {}", self.solution.width())
    }
}

/// Runs the search described by `args`.
///
/// Every interior evaluation is logged through [`LogEvents`]. With
/// `--max-evals`, an [`EvalBudget`] stops the search once it is spent.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or if the objective cannot
/// be evaluated at a probed point.
pub fn run(args: &Args) -> anyhow::Result<Report> {
    let function = args.function()?;
    let config = Config::new(args.tol, args.max_iter).context("invalid --tol")?;
    let goal = Goal::from_maximize(args.maximize);

    if function.is_constant() {
        warn!(%function, "expression does not depend on x; every point is optimal");
    }
    info!(%function, a = args.a, b = args.b, ?goal, "starting search");

    let mut log = LogEvents;
    let mut budget = args.max_evals.map(EvalBudget::new);
    let observer = |event: &Event<'_, EvalError>| -> Option<Action> {
        let _: Option<Action> = log.observe(event);
        budget.as_mut().and_then(|budget| budget.observe(event))
    };

    let objective = |x: f64| function.eval(x);
    let solution = optimize(&objective, [args.a, args.b], &config, observer, goal)
        .with_context(|| format!("search for {function} on [{}, {}] failed", args.a, args.b))?;

    info!(
        x = solution.x,
        objective = solution.objective,
        status = %solution.status,
        "search finished"
    );

    Ok(Report {
        function: function.to_string(),
        goal,
        solution,
    })
}
