use primer_math::*;

fn main() {
    println!("Checked arithmetic walkthrough");
    println!("==============================");

    let values = [1, 2, 3, 4, 5];
    match sum(&values) {
        Ok(total) => println!("sum({:?}) = {}", values, total),
        Err(e) => eprintln!("sum({:?}) failed: {}", values, e),
    }
    match max(&values) {
        Some(largest) => println!("max({:?}) = {}", values, largest),
        None => println!("max({:?}) is undefined for an empty slice", values),
    }

    println!();
    println!("add(10, 5)      = {:?}", add(10, 5));
    println!("multiply(10, 5) = {:?}", multiply(10, 5));
    match divide(10.0, 4.0) {
        Ok(quotient) => println!("divide(10, 4)   = {}", quotient),
        Err(e) => eprintln!("divide(10, 4) failed: {}", e),
    }
    match divide(1.0, 0.0) {
        Ok(quotient) => println!("divide(1, 0)    = {}", quotient),
        Err(MathError::DivisionByZero(msg)) => {
            println!("divide(1, 0) rejected as expected: {}", msg);
        }
        Err(e) => eprintln!("divide(1, 0) failed unexpectedly: {}", e),
    }

    println!();
    println!("Factorials until the u64 range runs out:");
    for n in 0.. {
        match factorial(n) {
            Ok(value) => println!("  {:2}! = {}", n, value),
            Err(e) => {
                println!("  {:2}! is out of range: {}", n, e);
                break;
            }
        }
    }

    println!();
    println!("gcd(12, 18) = {}", gcd(12, 18));
    println!("gcd(17, 5)  = {}", gcd(17, 5));
    println!("gcd(9, 0)   = {}", gcd(9, 0));
}
