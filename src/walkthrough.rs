use std::io;

use anyhow::Context;
use tracing::{info, warn};

use primer_common::{Color, Point};
use primer_random::BoundedGenerator;

use crate::config::{NumberSettings, PointSettings, RandomSettings, Settings, WalkthroughSettings};
use crate::console;

/// Runs every walkthrough step in order.
///
/// Steps that merely showcase a fallible computation log the failure and
/// move on. Steps that cannot proceed at all, a favorite color missing
/// from the palette or an unusable random bound, abort the walkthrough.
pub fn run(settings: &Settings) -> anyhow::Result<()> {
    greeting(&settings.numbers, settings.walkthrough.loop_iterations);
    convergence(settings.numbers.converge_start, settings.numbers.converge_target);
    number_crunching(&settings.numbers);
    point_tour(&settings.point);
    color_tour(&settings.walkthrough.favorite_color)?;
    random_tour(&settings.random)?;
    name_greeting(&settings.walkthrough)
}

/// Greets the world, or counts aloud when the first number does not win.
fn greeting(numbers: &NumberSettings, loop_iterations: u32) {
    if numbers.first > numbers.second {
        println!("Hello, world!");
    } else {
        for i in 0..loop_iterations {
            println!("Loop iteration: {}", i);
        }
    }
}

/// Steps from `start` toward `target` one unit at a time.
fn convergence(start: i64, target: i64) {
    let steps = convergence_steps(start, target);
    println!("Counted from {} to {} in {} steps", start, target, steps);
}

fn convergence_steps(start: i64, target: i64) -> u64 {
    let mut current = start;
    let mut steps: u64 = 0;
    while current != target {
        // Stepping toward the target terminates from either side.
        current += if current < target { 1 } else { -1 };
        steps += 1;
    }
    steps
}

/// Tours the arithmetic helpers with the configured numbers.
fn number_crunching(numbers: &NumberSettings) {
    match primer_math::sum(&numbers.values) {
        Ok(total) => println!("Sum of numbers: {}", total),
        Err(e) => warn!("Summing {:?} failed: {}", numbers.values, e),
    }

    match primer_math::max(&numbers.values) {
        Some(largest) => println!("Largest number: {}", largest),
        None => println!("Largest number: none, the list is empty"),
    }

    let (mut first, mut second) = (numbers.first, numbers.second);
    println!("Before swap: first = {}, second = {}", first, second);
    std::mem::swap(&mut first, &mut second);
    println!("After swap: first = {}, second = {}", first, second);

    match primer_math::add(numbers.first, numbers.second) {
        Ok(total) => println!("{} + {} = {}", numbers.first, numbers.second, total),
        Err(e) => warn!("Adding failed: {}", e),
    }
    match primer_math::multiply(numbers.first, numbers.second) {
        Ok(product) => println!("{} * {} = {}", numbers.first, numbers.second, product),
        Err(e) => warn!("Multiplying failed: {}", e),
    }
    match primer_math::divide(numbers.dividend, numbers.divisor) {
        Ok(quotient) => println!("{} / {} = {}", numbers.dividend, numbers.divisor, quotient),
        Err(e) => warn!(
            "Dividing {} by {} failed: {}",
            numbers.dividend, numbers.divisor, e
        ),
    }

    match primer_math::factorial(numbers.factorial_of) {
        Ok(value) => println!("Factorial of {}: {}", numbers.factorial_of, value),
        Err(e) => warn!("Factorial of {} failed: {}", numbers.factorial_of, e),
    }

    println!(
        "Greatest common divisor of {} and {}: {}",
        numbers.gcd_first,
        numbers.gcd_second,
        primer_math::gcd(numbers.gcd_first, numbers.gcd_second)
    );
}

/// Shows the configured point and its distance from the origin.
fn point_tour(point: &PointSettings) {
    let spot = Point::new(point.x, point.y);
    println!("Point: {}", spot);

    let origin = Point::new(0, 0);
    println!("Distance from origin: {:.2}", origin.distance(&spot));
}

/// Prints the palette and highlights the configured favorite.
fn color_tour(favorite: &str) -> anyhow::Result<()> {
    for color in Color::ALL {
        println!("{}", color);
    }

    let favorite = favorite
        .parse::<Color>()
        .with_context(|| format!("favorite color {:?} is not in the palette", favorite))?;
    println!("Favorite color: {}", favorite);
    Ok(())
}

/// Prints the configured number of bounded pseudo-random values.
fn random_tour(random: &RandomSettings) -> anyhow::Result<()> {
    println!("This is a random function.");

    let mut generator = match random.seed {
        Some(seed) => BoundedGenerator::with_seed(random.upper_bound, seed),
        None => BoundedGenerator::new(random.upper_bound),
    }
    .context("failed to build the bounded random generator")?;

    info!(
        "Printing {} pseudo-random values below {}",
        random.count,
        generator.upper()
    );
    for value in generator.sequence(random.count) {
        println!("{}", value);
    }
    Ok(())
}

/// Asks for a name on stdin and greets it, or skips quietly at end of input.
fn name_greeting(walkthrough: &WalkthroughSettings) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let name = console::prompt_name(
        &mut input,
        &mut output,
        &walkthrough.name_prompt,
        walkthrough.max_name_len,
    )?;
    match name {
        Some(name) => println!("Hello, {}!", name),
        None => info!("No name given, skipping the personal greeting"),
    }
    Ok(())
}
