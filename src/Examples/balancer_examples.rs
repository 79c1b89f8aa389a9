pub fn balancer_examples(task: usize) {
    //

    match task {
        0 => {
            // FORMULA PARSING
            use crate::Balancer::formula_parser::parse_formula;
            let formula = "Ca(OH)2";
            let atomic_composition = parse_formula(formula).unwrap();
            println!("Element counts of {}: {:?}", formula, atomic_composition);

            // nested groups with all three bracket kinds
            let formula = "K4[ON(SO3)2]2";
            let atomic_composition = parse_formula(formula).unwrap();
            println!("Element counts of {}: {:?}", formula, atomic_composition);
            assert_eq!(atomic_composition["K"], 4);
            assert_eq!(atomic_composition["O"], 14);
            assert_eq!(atomic_composition["N"], 2);
            assert_eq!(atomic_composition["S"], 4);

            // a leading integer multiplies the whole formula
            let atomic_composition = parse_formula("2H2O").unwrap();
            println!("Element counts of 2H2O: {:?}", atomic_composition);
            assert_eq!(atomic_composition["H"], 4);
            assert_eq!(atomic_composition["O"], 2);

            // malformed brackets are rejected, not silently ignored
            let err = parse_formula("Ca(OH2").unwrap_err();
            println!("Ca(OH2 is rejected: {}", err);
        }
        1 => {
            // BALANCING CLASSIC EQUATIONS
            use crate::Balancer::balancer_api::{balance_equation, pretty_print_balance};
            for eq in [
                "H2+O2=H2O",
                "C3H8+O2=CO2+H2O",
                "Ca(OH)2+HCl=CaCl2+H2O",
                "KMnO4+HCl=KCl+MnCl2+H2O+Cl2",
            ] {
                let balanced = balance_equation(eq).unwrap();
                pretty_print_balance(&balanced);
            }
            // arrows are accepted as separators too
            let balanced = balance_equation("Fe + O2 -> Fe2O3").unwrap();
            println!("{}", balanced.equation);
            assert_eq!(balanced.coefficients, vec![4, 3, 2]);
        }
        2 => {
            // CONSERVATION MATRIX VIEW
            use crate::Balancer::balancer_api::pretty_print_matrix;
            use crate::Balancer::equation_parser::create_conservation_matrix;
            let eq = "C3H8+O2=CO2+H2O";
            pretty_print_matrix(eq).unwrap();

            let (matrix, elements, compounds) = create_conservation_matrix(eq).unwrap();
            println!("elements (rows): {:?}", elements);
            println!("compounds (columns): {:?}", compounds);
            println!("{}", matrix);
        }
        3 => {
            // BATCH DOCUMENT ROUND TRIP
            use crate::Utils::load_from_file::{
                balance_equations_from_file, create_balance_document, load_balance_document,
            };
            use std::io::Write;
            use tempfile::NamedTempFile;

            //CREATING AN EQUATIONS DOCUMENT//////////////////////////////////////////////
            let mut temp_file = NamedTempFile::new().unwrap();
            writeln!(temp_file, "EQUATIONS").unwrap();
            writeln!(temp_file, "H2+O2=H2O").unwrap();
            writeln!(temp_file, "C3H8+O2=CO2+H2O").unwrap();
            writeln!(temp_file, "H2+O2").unwrap();
            let file_path = temp_file.path().to_str().unwrap().to_owned();

            //BALANCING THE WHOLE DOCUMENT////////////////////////////////////////////////
            let records = balance_equations_from_file(&file_path).unwrap();
            for record in records.iter() {
                println!("{:?}", record);
            }

            //WRITING AND READING BACK THE JSON REPORT////////////////////////////////////
            create_balance_document(&file_path, &records).unwrap();
            let parsed = load_balance_document(&file_path).unwrap();
            assert_eq!(parsed, records);
            println!("report round trip of {} records succeeded", parsed.len());
        }

        _ => {
            println!("Wrong task number");
        }
    }
}
