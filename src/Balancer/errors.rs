use thiserror::Error;

/// Errors of the balancing pipeline. Parsing problems carry the concrete
/// reason as text, solver outcomes are unit variants.
#[derive(Debug, Error, PartialEq)]
pub enum BalanceError {
    #[error("Formula syntax error: {0}")]
    FormulaSyntax(String),
    #[error("Equation syntax error: {0}")]
    EquationSyntax(String),
    #[error("No non-trivial solution; equation cannot be balanced with given compounds")]
    NoSolution,
    #[error("Division by zero in rational arithmetic")]
    DivisionByZero,
}
