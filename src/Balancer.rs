/// Errors shared across the balancing pipeline: formula and equation syntax
/// problems, unbalanceable systems and the rational division guard
pub mod errors;
/// Exact rational number with reduced-fraction invariant, plus gcd and lcm
/// helpers. The solver works on these instead of floats so that rank
/// decisions are never a rounding question.
pub mod fraction;
/// The module takes a chemical formula as text and produces a HashMap of
/// element symbols to atom counts. Nested groups in all three bracket kinds
/// and a leading multiplier are supported:
/// "K4[ON(SO3)2]2" gives {"K": 4, "O": 14, "N": 2, "S": 4}
/// and "2H2O" gives {"H": 4, "O": 2}
///
///  # Examples
/// ```
/// use ChemBalancer::Balancer::formula_parser::parse_formula;
/// let atomic_composition = parse_formula("Ca(OH)2").unwrap();
/// assert_eq!(atomic_composition["Ca"], 1);
/// assert_eq!(atomic_composition["O"], 2);
/// assert_eq!(atomic_composition["H"], 2);
/// ```
pub mod formula_parser;
/// The module takes an equation as text and produces the following data:
/// 1) the element conservation matrix given as a vector of vectors, one row
///    per element in first-seen order, one column per compound, product
///    columns negated
/// 2) a vector of compounds, reactants first
/// 3) the number of reactants
/// Arrows "->", "=>", "<-" and "<->" are accepted as equation separators
/// along with "=". A dense nalgebra view of the matrix is available for
/// display and numeric consumers.
pub mod equation_parser;
/// Exact Gauss-Jordan elimination over rationals and extraction of the
/// smallest integer null-space vector, which is the coefficient vector of
/// the balanced equation
pub mod linear_solver;
/// High level API: the whole balance pipeline, result types for reports and
/// pretty printed tables
///
///  # Examples
/// ```
/// use ChemBalancer::Balancer::balancer_api::balance_equation;
/// let balanced = balance_equation("H2+O2=H2O").unwrap();
/// assert_eq!(balanced.equation, "2H2 + O2 = 2H2O");
/// assert_eq!(balanced.coefficients, vec![2, 1, 2]);
/// ```
pub mod balancer_api;
