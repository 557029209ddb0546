// ============================================================================
// Basic Usage Example
// ============================================================================

use mathutils::ops::decimal;
use mathutils::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== mathutils {} ===\n", mathutils::VERSION);

    println!("add(2, 3)         = {}", add(2.0, 3.0));
    println!("subtract(2, 3)    = {}", subtract(2.0, 3.0));
    println!("multiply(4, 2.5)  = {}", multiply(4.0, 2.5));
    println!("divide(10, 2)     = {:?}", divide(10.0, 2.0));
    println!("power(2, 10)      = {:?}", power(2.0, 10.0));
    println!("square_root(16)   = {:?}", square_root(16.0));
    println!("factorial(5)      = {:?}", factorial(5));

    println!("\nErrors:");
    for (name, args) in [
        ("divide", vec![1.0, 0.0]),
        ("square_root", vec![-1.0]),
        ("factorial", vec![2.5]),
        ("power", vec![10.0, 400.0]),
        ("modulo", vec![4.0, 2.0]),
    ] {
        match evaluate(name, &args) {
            Ok(value) => println!("  {}({:?}) = {}", name, args, value),
            Err(err) => println!("  {}({:?}) failed: {}", name, args, err),
        }
    }

    println!("\nExact decimals:");
    let tenth = Decimal::new(1, 1);
    let fifth = Decimal::new(2, 1);
    println!("  0.1 + 0.2 (f64)     = {}", add(0.1, 0.2));
    println!("  0.1 + 0.2 (decimal) = {:?}", decimal::add(tenth, fifth));
    println!("  27! (decimal)       = {:?}", decimal::factorial(27));

    let tol = Tolerance::default();
    println!(
        "\n0.1 + 0.2 ~= 0.3 within {:?}: {}",
        tol,
        tol.approx_eq(add(0.1, 0.2), 0.3)
    );
}
