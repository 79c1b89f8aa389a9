use super::balance_help::print_balance_help;
use crate::Balancer::balancer_api::{balance_equation, pretty_print_balance, pretty_print_matrix};
use crate::Balancer::equation_parser::create_conservation_matrix;
use crate::Examples::balancer_examples::balancer_examples;
use crate::Utils::load_from_file::{balance_equations_from_file, create_balance_document};
use std::io::{self, Write};
use std::path::PathBuf;

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => balance_one_equation(),
            "2" => balance_from_file(),
            "3" => show_matrix(),
            "4" => examples_menu(),
            "5" => show_help(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options (1, 2, 0)

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Wellcome to ChemBalancer: balancing of chemical equations with\n
    exact rational arithmetic \n \x1b[0m"
    );
    println!("\x1b[33m1. Balance an equation\x1b[0m");
    println!("\x1b[33m2. Balance equations from file\x1b[0m");
    println!("\x1b[33m3. Show conservation matrix\x1b[0m");
    println!("\x1b[33m4. Examples\x1b[0m");
    println!("\x1b[33m5. Read help\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
}

fn balance_one_equation() {
    print!("\x1b[36mEquation (e.g. Ca(OH)2+HCl=CaCl2+H2O): \x1b[0m");
    io::stdout().flush().unwrap();
    let eq = get_user_input();

    match balance_equation(eq.trim()) {
        Ok(balanced) => pretty_print_balance(&balanced),
        Err(e) => println!("Error: {}", e),
    }
}

fn balance_from_file() {
    print!("\x1b[36mEnter file path: \x1b[0m");
    io::stdout().flush().unwrap();
    let file_path = get_user_input();
    let path = PathBuf::from(file_path.trim());

    if !path.exists() {
        println!("File not found: {}", file_path.trim());
        return;
    }

    let records = match balance_equations_from_file(file_path.trim()) {
        Ok(records) => records,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    for record in records.iter() {
        match (&record.balanced, &record.error) {
            (Some(balanced), _) => println!("{}  ->  {}", record.input, balanced),
            (None, Some(error)) => println!("{}  ->  Error: {}", record.input, error),
            _ => {}
        }
    }

    print!("\x1b[36mAppend JSON report to the file? (y/n): \x1b[0m");
    io::stdout().flush().unwrap();
    let choice = get_user_input();
    if choice.trim().to_lowercase() == "y" || choice.trim().to_lowercase() == "yes" {
        match create_balance_document(file_path.trim(), &records) {
            Ok(()) => println!("Report written to {}", file_path.trim()),
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn show_matrix() {
    print!("\x1b[36mEquation (e.g. H2+O2=H2O): \x1b[0m");
    io::stdout().flush().unwrap();
    let eq = get_user_input();

    if let Err(e) = pretty_print_matrix(eq.trim()) {
        println!("Error: {}", e);
        return;
    }
    // the same matrix as nalgebra prints it
    if let Ok((dense, _, _)) = create_conservation_matrix(eq.trim()) {
        println!("{}", dense);
    }
}

fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Formula parsing");
        println!("2. Balancing classic equations");
        println!("3. Conservation matrix view");
        println!("4. Batch document round trip");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        io::stdout().flush().unwrap();

        let choice = get_user_input();
        match choice.trim() {
            "1" => balancer_examples(0),
            "2" => balancer_examples(1),
            "3" => balancer_examples(2),
            "4" => balancer_examples(3),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn show_help() {
    println!("\n=== Chemical Equation Balancer Help ===");
    print_balance_help();
    println!("\nPress Enter to return to menu...");
    let _ = get_user_input();
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
