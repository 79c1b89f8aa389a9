/// Help text of the balancer CLI
pub mod balance_help;
/// Interactive menu: balance a single equation, balance a whole document,
/// inspect the conservation matrix, run examples
pub mod cli_main;
