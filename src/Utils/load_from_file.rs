use crate::Balancer::balancer_api::{BalanceRecord, balance_equation};
use log::{info, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

pub struct LoadEquations {
    pub file_name: String,
}

impl LoadEquations {
    pub fn new(file_name: String) -> Self {
        LoadEquations { file_name }
    }
    pub fn load(&self) -> Result<Vec<String>, String> {
        load_equations_from_file(&self.file_name)
    }
    pub fn balance(&self) -> Result<Vec<BalanceRecord>, String> {
        balance_equations_from_file(&self.file_name)
    }
}

fn read_all_lines(file_name: &str) -> Result<Vec<String>, String> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(format!("File '{}' does not exist", file_name));
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(format!("Failed to open file '{}': {}", file_name, e)),
    };

    let reader = BufReader::new(file);
    Ok(reader.lines().filter_map(Result::ok).collect())
}

// A section header is a non-empty line of capital letters, underscores and
// spaces, like "EQUATIONS" or "BALANCED EQUATIONS". Equations themselves
// always contain digits, '+' or '=' and never qualify.
fn is_section_header(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_uppercase() || c == '_' || c == ' ')
}

fn find_section(lines: &[String], headers: &[&str]) -> Option<(usize, usize)> {
    let mut start_index = None;
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim().to_uppercase();
        if headers.contains(&trimmed.as_str()) {
            start_index = Some(i + 1); // Start from the line after the header
            break;
        }
    }
    let start_index = start_index?;

    // Find the end index (next header or end of file)
    let mut end_index = lines.len();
    for (i, line) in lines.iter().enumerate().skip(start_index) {
        if is_section_header(line) {
            end_index = i;
            break;
        }
    }
    Some((start_index, end_index))
}

/// Parses a document for chemical equations under the "EQUATIONS" or
/// "REACTIONS" header. Every non-empty line up to the next ALL-CAPS header
/// (or the end of the file) is one equation.
pub fn load_equations_from_file(file_name: &str) -> Result<Vec<String>, String> {
    let lines = read_all_lines(file_name)?;

    let (start_index, end_index) = match find_section(&lines, &["EQUATIONS", "REACTIONS"]) {
        Some(section) => section,
        None => {
            return Err(format!(
                "No 'EQUATIONS' or 'REACTIONS' header found in file '{}'",
                file_name
            ));
        }
    };

    let equations: Vec<String> = lines[start_index..end_index]
        .iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    if equations.is_empty() {
        return Err(format!("No equations found in file '{}'", file_name));
    }

    info!(
        "Loaded {} equations from file '{}'",
        equations.len(),
        file_name
    );
    Ok(equations)
}

/// Balances every equation of the document, collecting one record per
/// equation. A bad equation yields an error record and a warning, it never
/// aborts the rest of the batch.
pub fn balance_equations_from_file(file_name: &str) -> Result<Vec<BalanceRecord>, String> {
    let equations = load_equations_from_file(file_name)?;

    let mut records: Vec<BalanceRecord> = Vec::new();
    let mut n_failed = 0;
    for eq in equations {
        match balance_equation(&eq) {
            Ok(balanced) => records.push(BalanceRecord {
                input: eq,
                balanced: Some(balanced.equation),
                coefficients: Some(balanced.coefficients),
                error: None,
            }),
            Err(e) => {
                warn!("Failed to balance '{}': {}", eq, e);
                n_failed += 1;
                records.push(BalanceRecord {
                    input: eq,
                    balanced: None,
                    coefficients: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    info!(
        "Balanced {} of {} equations from file '{}'",
        records.len() - n_failed,
        records.len(),
        file_name
    );
    Ok(records)
}

/// Appends a "BALANCED EQUATIONS" header followed by the records as pretty
/// printed JSON to the file. Existing content is kept, so the report can
/// live in the same document as the equations themselves.
pub fn create_balance_document(file_name: &str, records: &[BalanceRecord]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| format!("Failed to serialize balance records: {}", e))?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_name)
        .map_err(|e| format!("Failed to open file '{}': {}", file_name, e))?;

    writeln!(file, "BALANCED EQUATIONS")
        .and_then(|_| writeln!(file, "{}", json))
        .map_err(|e| format!("Failed to write to file '{}': {}", file_name, e))?;

    info!(
        "Wrote {} balance records to file '{}'",
        records.len(),
        file_name
    );
    Ok(())
}

/// Reads the records of a "BALANCED EQUATIONS" section back from the file
pub fn load_balance_document(file_name: &str) -> Result<Vec<BalanceRecord>, String> {
    let lines = read_all_lines(file_name)?;

    let (start_index, end_index) = match find_section(&lines, &["BALANCED EQUATIONS"]) {
        Some(section) => section,
        None => {
            return Err(format!(
                "No 'BALANCED EQUATIONS' header found in file '{}'",
                file_name
            ));
        }
    };

    let report_section = lines[start_index..end_index].join("\n");
    let records: Vec<BalanceRecord> = serde_json::from_str(&report_section)
        .map_err(|e| format!("Error parsing balance records: {}", e))?;

    info!(
        "Loaded {} balance records from file '{}'",
        records.len(),
        file_name
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_equations_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Some header text").unwrap();
        writeln!(temp_file, "EQUATIONS").unwrap();
        writeln!(temp_file, "H2+O2=H2O").unwrap();
        writeln!(temp_file, "").unwrap();
        writeln!(temp_file, "C3H8 + O2 -> CO2 + H2O").unwrap();
        writeln!(temp_file, "ANOTHER_HEADER").unwrap();
        writeln!(temp_file, "Some other content").unwrap();

        let file_path = temp_file.path().to_str().unwrap();
        let equations = load_equations_from_file(file_path).unwrap();
        assert_eq!(equations, vec!["H2+O2=H2O", "C3H8 + O2 -> CO2 + H2O"]);
    }

    #[test]
    fn test_load_equations_with_reactions_header() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "REACTIONS").unwrap();
        writeln!(temp_file, "Fe+O2=Fe2O3").unwrap();

        let file_path = temp_file.path().to_str().unwrap();
        let equations = load_equations_from_file(file_path).unwrap();
        assert_eq!(equations, vec!["Fe+O2=Fe2O3"]);
    }

    #[test]
    fn test_load_equations_file_not_found() {
        let result = load_equations_from_file("non_existent_file.txt");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("does not exist"));
    }

    #[test]
    fn test_load_equations_no_header() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "H2+O2=H2O").unwrap();

        let file_path = temp_file.path().to_str().unwrap();
        let result = load_equations_from_file(file_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .contains("No 'EQUATIONS' or 'REACTIONS' header found")
        );
    }

    #[test]
    fn test_load_equations_empty_section() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "EQUATIONS").unwrap();
        writeln!(temp_file, "").unwrap();
        writeln!(temp_file, "ANOTHER_HEADER").unwrap();

        let file_path = temp_file.path().to_str().unwrap();
        let result = load_equations_from_file(file_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("No equations found"));
    }

    #[test]
    fn test_balance_equations_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "EQUATIONS").unwrap();
        writeln!(temp_file, "H2+O2=H2O").unwrap();
        writeln!(temp_file, "H2+O2").unwrap(); // no separator, must not abort the batch
        writeln!(temp_file, "Ca(OH)2+HCl=CaCl2+H2O").unwrap();

        let file_path = temp_file.path().to_str().unwrap();
        let records = balance_equations_from_file(file_path).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].balanced.as_deref(), Some("2H2 + O2 = 2H2O"));
        assert_eq!(records[0].coefficients, Some(vec![2, 1, 2]));
        assert!(records[0].error.is_none());

        assert!(records[1].balanced.is_none());
        assert!(records[1].error.as_deref().unwrap().contains("syntax"));

        assert_eq!(
            records[2].balanced.as_deref(),
            Some("Ca(OH)2 + 2HCl = CaCl2 + 2H2O")
        );
    }

    #[test]
    fn test_balance_document_round_trip() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "EQUATIONS").unwrap();
        writeln!(temp_file, "H2+O2=H2O").unwrap();
        writeln!(temp_file, "Fe+O2=Fe2O3").unwrap();

        let file_path = temp_file.path().to_str().unwrap().to_owned();
        let records = balance_equations_from_file(&file_path).unwrap();

        // the report lands in the same document as the equations
        create_balance_document(&file_path, &records).unwrap();
        let equations = load_equations_from_file(&file_path).unwrap();
        assert_eq!(equations.len(), 2);

        let parsed = load_balance_document(&file_path).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_load_balance_document_no_header() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "EQUATIONS").unwrap();
        writeln!(temp_file, "H2+O2=H2O").unwrap();

        let file_path = temp_file.path().to_str().unwrap();
        let result = load_balance_document(file_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .contains("No 'BALANCED EQUATIONS' header found")
        );
    }

    #[test]
    fn test_load_equations_wrapper() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "EQUATIONS").unwrap();
        writeln!(temp_file, "H2+O2=H2O").unwrap();

        let le = LoadEquations::new(temp_file.path().to_str().unwrap().to_owned());
        assert_eq!(le.load().unwrap(), vec!["H2+O2=H2O"]);
        let records = le.balance().unwrap();
        assert_eq!(records[0].coefficients, Some(vec![2, 1, 2]));
    }
}
