use primer_random::BoundedGenerator;

fn main() {
    match BoundedGenerator::new(100) {
        Ok(mut generator) => {
            println!("Five draws below {} from OS entropy:", generator.upper());
            for value in generator.sequence(5) {
                println!("{}", value);
            }
        }
        Err(e) => eprintln!("could not build generator: {}", e),
    }

    println!();
    println!("Two generators sharing seed 42 draw the same sequence:");
    for run in 1..=2 {
        match BoundedGenerator::with_seed(100, 42) {
            Ok(mut generator) => println!("run {}: {:?}", run, generator.sequence(5)),
            Err(e) => eprintln!("could not build generator: {}", e),
        }
    }
}
