//! High level API of the balancer: the parse -> solve -> format pipeline,
//! serializable result types and pretty printed tables.
use crate::Balancer::equation_parser::{create_conservation_matrix, parse_equation};
use crate::Balancer::errors::BalanceError;
use crate::Balancer::linear_solver::solve;
use log::info;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// A balanced equation with everything a report needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancedEquation {
    pub equation: String,
    pub coefficients: Vec<i64>,
    pub compounds: Vec<String>,
    pub n_reactants: usize,
}

/// One row of a batch balancing report: either the balanced form with its
/// coefficients or the error text for this input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub input: String,
    pub balanced: Option<String>,
    pub coefficients: Option<Vec<i64>>,
    pub error: Option<String>,
}

/// Renders coefficients and compounds back into equation text. A coefficient
/// of 1 is omitted, terms are joined with " + " and the sides with " = ".
pub fn format_equation(coefficients: &[i64], compounds: &[String], n_reactants: usize) -> String {
    let mut terms: Vec<String> = Vec::new();
    for (c, compound) in coefficients.iter().zip(compounds.iter()) {
        if *c == 1 {
            terms.push(compound.clone());
        } else {
            terms.push(format!("{}{}", c, compound));
        }
    }
    let n = n_reactants.min(terms.len());
    format!("{} = {}", terms[..n].join(" + "), terms[n..].join(" + "))
}

/// The whole pipeline: parse the equation, solve the conservation system,
/// format the result.
pub fn balance_equation(eq: &str) -> Result<BalancedEquation, BalanceError> {
    let (matrix, compounds, n_reactants) = parse_equation(eq)?;
    let coefficients = solve(&matrix)?;
    let equation = format_equation(&coefficients, &compounds, n_reactants);
    info!("balanced '{}' as '{}'", eq.trim(), equation);
    Ok(BalancedEquation {
        equation,
        coefficients,
        compounds,
        n_reactants,
    })
}

/// Prints the balancing result as a table of compounds, sides and
/// coefficients, followed by the balanced equation itself
pub fn pretty_print_balance(result: &BalancedEquation) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("compound"),
        Cell::new("side"),
        Cell::new("coefficient"),
    ]));
    for (j, compound) in result.compounds.iter().enumerate() {
        let side = if j < result.n_reactants {
            "reactant"
        } else {
            "product"
        };
        let coefficient = result
            .coefficients
            .get(j)
            .map(|c| c.to_string())
            .unwrap_or_default();
        table.add_row(Row::new(vec![
            Cell::new(compound),
            Cell::new(side),
            Cell::new(&coefficient),
        ]));
    }
    table.printstd();
    println!("{}", result.equation);
}

/// Prints the element conservation matrix of an equation with element row
/// labels and compound column headers
pub fn pretty_print_matrix(eq: &str) -> Result<(), BalanceError> {
    let (dense, elements, compounds) = create_conservation_matrix(eq)?;
    let mut table = Table::new();
    let mut header = vec![Cell::new("element")];
    for compound in compounds.iter() {
        header.push(Cell::new(compound));
    }
    table.add_row(Row::new(header));
    for (i, element) in elements.iter().enumerate() {
        let mut row = vec![Cell::new(element)];
        for j in 0..compounds.len() {
            row.push(Cell::new(&dense[(i, j)].to_string()));
        }
        table.add_row(Row::new(row));
    }
    table.printstd();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_equation() {
        let compounds: Vec<String> = vec!["H2", "O2", "H2O"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            format_equation(&[2, 1, 2], &compounds, 2),
            "2H2 + O2 = 2H2O"
        );
    }

    #[test]
    fn test_format_omits_unit_coefficients() {
        let compounds: Vec<String> = vec!["C3H8", "O2", "CO2", "H2O"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            format_equation(&[1, 5, 3, 4], &compounds, 2),
            "C3H8 + 5O2 = 3CO2 + 4H2O"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let balanced = BalancedEquation {
            equation: "2H2 + O2 = 2H2O".to_string(),
            coefficients: vec![2, 1, 2],
            compounds: vec!["H2".to_string(), "O2".to_string(), "H2O".to_string()],
            n_reactants: 2,
        };
        let json = serde_json::to_string_pretty(&balanced).unwrap();
        let parsed: BalancedEquation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, balanced);
    }

    #[test]
    fn test_pretty_print_does_not_panic() {
        let balanced = balance_equation("H2+O2=H2O").unwrap();
        pretty_print_balance(&balanced);
        pretty_print_matrix("H2+O2=H2O").unwrap();
    }
}
