/// Runnable demo tasks for the balancer, wired into the CLI menu
pub mod balancer_examples;
