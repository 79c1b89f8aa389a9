use crate::Balancer::errors::BalanceError;
use log::debug;
use std::collections::HashMap;

// reads an optional run of digits starting at i, returns (count, next position)
fn read_count(chars: &[char], mut i: usize) -> Result<(Option<usize>, usize), BalanceError> {
    let start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == start {
        return Ok((None, i));
    }
    let digits: String = chars[start..i].iter().collect();
    match digits.parse::<usize>() {
        Ok(n) => Ok((Some(n), i)),
        Err(_) => Err(BalanceError::FormulaSyntax(format!(
            "Numeric overflow in count '{}'",
            digits
        ))),
    }
}

fn closing_for(opener: char) -> char {
    match opener {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

fn bump(
    base: &mut HashMap<String, usize>,
    elem: String,
    count: usize,
) -> Result<(), BalanceError> {
    let entry = base.entry(elem).or_insert(0);
    *entry = entry
        .checked_add(count)
        .ok_or_else(|| BalanceError::FormulaSyntax("Numeric overflow in element count".to_string()))?;
    Ok(())
}

/// Folds a finished bracket group into the enclosing map, scaling every
/// count by the group multiplier
fn merge_counts(
    base: &mut HashMap<String, usize>,
    add: HashMap<String, usize>,
    mult: usize,
) -> Result<(), BalanceError> {
    for (elem, count) in add {
        let scaled = count.checked_mul(mult).ok_or_else(|| {
            BalanceError::FormulaSyntax("Numeric overflow in element count".to_string())
        })?;
        bump(base, elem, scaled)?;
    }
    Ok(())
}

/// Parses a chemical formula into a map of element symbols to atom counts.
///
/// An element symbol is one uppercase ASCII letter followed by lowercase
/// letters, with an optional count after it, like "H2" or "Cl3". The three
/// bracket kinds `()`, `[]`, `{}` nest arbitrarily and are interchangeable
/// as long as every closer matches its opener. A leading integer multiplies
/// the whole formula, so "2H2O" gives {H: 4, O: 2}. Any other character is
/// skipped, which keeps phase marks like "(g)" harmless. Empty input gives
/// an empty map.
pub fn parse_formula(formula: &str) -> Result<HashMap<String, usize>, BalanceError> {
    let chars: Vec<char> = formula.trim().chars().collect();
    let (lead, mut i) = read_count(&chars, 0)?;
    let lead = lead.unwrap_or(1);

    let mut stack: Vec<HashMap<String, usize>> = vec![HashMap::new()];
    let mut bracket_stack: Vec<char> = Vec::new();

    while i < chars.len() {
        let ch = chars[i];
        if ch == '(' || ch == '[' || ch == '{' {
            stack.push(HashMap::new());
            bracket_stack.push(ch);
            i += 1;
        } else if ch == ')' || ch == ']' || ch == '}' {
            let opener = match bracket_stack.pop() {
                Some(op) => op,
                None => {
                    return Err(BalanceError::FormulaSyntax(
                        "Mismatched closing bracket in formula".to_string(),
                    ));
                }
            };
            if closing_for(opener) != ch {
                return Err(BalanceError::FormulaSyntax(
                    "Mismatched brackets in formula".to_string(),
                ));
            }
            let (mult, next) = read_count(&chars, i + 1)?;
            i = next;
            // the base map is never popped, so after a matched closer both
            // the group and its parent are present
            if let (Some(group), Some(top)) = (stack.pop(), stack.last_mut()) {
                merge_counts(top, group, mult.unwrap_or(1))?;
            }
        } else if ch.is_ascii_uppercase() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            let elem: String = chars[start..i].iter().collect();
            let (count, next) = read_count(&chars, i)?;
            i = next;
            if let Some(top) = stack.last_mut() {
                bump(top, elem, count.unwrap_or(1))?;
            }
        } else {
            // whitespace, stray punctuation, lowercase with no uppercase lead
            i += 1;
        }
    }

    if !bracket_stack.is_empty() {
        return Err(BalanceError::FormulaSyntax(
            "Unmatched opening bracket in formula".to_string(),
        ));
    }

    let mut counts = stack.pop().unwrap_or_default();
    if lead != 1 {
        for count in counts.values_mut() {
            *count = count.checked_mul(lead).ok_or_else(|| {
                BalanceError::FormulaSyntax("Numeric overflow in element count".to_string())
            })?;
        }
    }
    debug!("parsed formula '{}' into {:?}", formula.trim(), counts);
    Ok(counts)
}

/// Element symbols of one formula in order of first appearance. Brackets and
/// counts do not matter here, only the text order of the symbols.
pub fn element_order(formula: &str) -> Vec<String> {
    let chars: Vec<char> = formula.chars().collect();
    let mut order: Vec<String> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_uppercase() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            let elem: String = chars[start..i].iter().collect();
            if !order.contains(&elem) {
                order.push(elem);
            }
        } else {
            i += 1;
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formula() {
        let expected_counts = HashMap::from([("H".to_string(), 2), ("O".to_string(), 1)]);
        assert_eq!(parse_formula("H2O").unwrap(), expected_counts);

        let expected_counts = HashMap::from([
            ("Ca".to_string(), 1),
            ("O".to_string(), 2),
            ("H".to_string(), 2),
        ]);
        assert_eq!(parse_formula("Ca(OH)2").unwrap(), expected_counts);

        let expected_counts = HashMap::from([
            ("C".to_string(), 6),
            ("H".to_string(), 8),
            ("O".to_string(), 6),
        ]);
        assert_eq!(parse_formula("C6H8O6").unwrap(), expected_counts);
    }

    #[test]
    fn test_leading_multiplier() {
        let expected_counts = HashMap::from([("H".to_string(), 4), ("O".to_string(), 2)]);
        assert_eq!(parse_formula("2H2O").unwrap(), expected_counts);
    }

    #[test]
    fn test_nested_brackets() {
        let expected_counts = HashMap::from([
            ("K".to_string(), 4),
            ("O".to_string(), 14),
            ("N".to_string(), 2),
            ("S".to_string(), 4),
        ]);
        assert_eq!(parse_formula("K4[ON(SO3)2]2").unwrap(), expected_counts);

        // all three bracket kinds work the same way
        let expected_counts = HashMap::from([
            ("Ca".to_string(), 1),
            ("O".to_string(), 2),
            ("H".to_string(), 2),
        ]);
        assert_eq!(parse_formula("Ca{OH}2").unwrap(), expected_counts);
        assert_eq!(parse_formula("Ca[OH]2").unwrap(), expected_counts);
    }

    #[test]
    fn test_bracket_errors() {
        let err = parse_formula("Ca(OH2").unwrap_err();
        assert_eq!(
            err,
            BalanceError::FormulaSyntax("Unmatched opening bracket in formula".to_string())
        );

        let err = parse_formula("CaOH)2").unwrap_err();
        assert_eq!(
            err,
            BalanceError::FormulaSyntax("Mismatched closing bracket in formula".to_string())
        );

        let err = parse_formula("Ca(OH]2").unwrap_err();
        assert_eq!(
            err,
            BalanceError::FormulaSyntax("Mismatched brackets in formula".to_string())
        );
    }

    #[test]
    fn test_noise_is_skipped() {
        // phase marks and whitespace do not contribute atoms
        let expected_counts = HashMap::from([("H".to_string(), 2), ("O".to_string(), 1)]);
        assert_eq!(parse_formula("H2O(g)").unwrap(), expected_counts);
        assert_eq!(parse_formula(" H2 O ").unwrap(), expected_counts);
    }

    #[test]
    fn test_empty_formula() {
        assert!(parse_formula("").unwrap().is_empty());
        assert!(parse_formula("   ").unwrap().is_empty());
    }

    #[test]
    fn test_count_overflow() {
        let result = parse_formula("H99999999999999999999999999");
        assert!(matches!(result, Err(BalanceError::FormulaSyntax(_))));
    }

    #[test]
    fn test_element_order() {
        assert_eq!(
            element_order("K4[ON(SO3)2]2"),
            vec!["K", "O", "N", "S"]
        );
        assert_eq!(element_order("C3H8"), vec!["C", "H"]);
        assert_eq!(element_order("HOH"), vec!["H", "O"]);
    }
}
