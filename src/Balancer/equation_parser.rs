//! Turns an equation string into the element conservation matrix.
//!
//! ## Matrix convention
//! One row per distinct element in order of first appearance across the
//! compounds, one column per compound in input order, reactants first. A
//! cell holds the atom count of the element in that compound, negated for
//! product columns, so a coefficient vector x balances the equation exactly
//! when A*x = 0.
use crate::Balancer::errors::BalanceError;
use crate::Balancer::formula_parser::{element_order, parse_formula};
use log::debug;
use nalgebra::DMatrix;
use regex::Regex;
use std::collections::HashMap;

// longest arrow first, otherwise "->" would eat the middle of "<->"
fn normalize_arrows(eq: &str) -> String {
    let re = Regex::new(r"<->|=>|->|<-").unwrap();
    re.replace_all(eq, "=").to_string()
}

fn split_compounds(side: &str) -> Vec<String> {
    side.split('+')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Ordered deduplicated union of element symbols over all compounds,
/// first seen first. This fixes the row order of the matrix.
pub fn collect_elements(compounds: &[String]) -> Vec<String> {
    let mut elements: Vec<String> = Vec::new();
    for compound in compounds {
        for elem in element_order(compound) {
            if !elements.contains(&elem) {
                elements.push(elem);
            }
        }
    }
    elements
}

/// Parses an equation like "H2+O2=H2O" or "H2 + O2 -> H2O" and returns the
/// conservation matrix, the compounds in order (reactants then products) and
/// the number of reactants.
pub fn parse_equation(eq: &str) -> Result<(Vec<Vec<i64>>, Vec<String>, usize), BalanceError> {
    let normalized = normalize_arrows(eq);
    let sides: Vec<&str> = normalized.split('=').collect();
    if sides.len() != 2 {
        return Err(BalanceError::EquationSyntax(
            "Equation must contain a single '=' or arrow".to_string(),
        ));
    }
    let mut compounds = split_compounds(sides[0]);
    let n_reactants = compounds.len();
    compounds.extend(split_compounds(sides[1]));

    let mut compositions: Vec<HashMap<String, usize>> = Vec::new();
    for compound in compounds.iter() {
        compositions.push(parse_formula(compound)?);
    }

    let elements = collect_elements(&compounds);
    let mut matrix = vec![vec![0i64; compounds.len()]; elements.len()];
    for (j, composition) in compositions.iter().enumerate() {
        for (i, element) in elements.iter().enumerate() {
            if let Some(&count) = composition.get(element) {
                let count = i64::try_from(count).map_err(|_| {
                    BalanceError::FormulaSyntax(
                        "Numeric overflow in element count".to_string(),
                    )
                })?;
                matrix[i][j] = if j < n_reactants { count } else { -count };
            }
        }
    }
    debug!(
        "conservation matrix for '{}': {} elements x {} compounds",
        eq.trim(),
        elements.len(),
        compounds.len()
    );
    Ok((matrix, compounds, n_reactants))
}

/// Dense f64 view of the conservation matrix together with the element row
/// labels and the compound column labels. The exact solver never touches
/// this, it exists for display and for numeric consumers.
pub fn create_conservation_matrix(
    eq: &str,
) -> Result<(DMatrix<f64>, Vec<String>, Vec<String>), BalanceError> {
    let (matrix, compounds, _) = parse_equation(eq)?;
    let elements = collect_elements(&compounds);
    let num_rows = elements.len();
    let num_cols = compounds.len();
    let mut dense = DMatrix::zeros(num_rows, num_cols);
    for i in 0..num_rows {
        for j in 0..num_cols {
            dense[(i, j)] = matrix[i][j] as f64;
        }
    }
    Ok((dense, elements, compounds))
}
