#[allow(non_snake_case)]
pub mod Balancer;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
