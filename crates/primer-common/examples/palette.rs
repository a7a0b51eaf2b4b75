use primer_common::{Color, Point};

fn main() {
    println!("Point demo");
    println!("----------");
    let origin = Point::new(0, 0);
    let p = Point::new(3, 4);
    println!("origin     = {}", origin);
    println!("p          = {}", p);
    println!("translated = {}", p.translated(-3, -4));
    println!("distance from origin to p = {}", origin.distance(&p));

    println!();
    println!("Color demo");
    println!("----------");
    for color in Color::ALL {
        println!("{} has code {}", color, color.as_u8());
    }

    for name in ["green", "BLUE", "cyan"] {
        match name.parse::<Color>() {
            Ok(color) => println!("parsed {:?} as {}", name, color),
            Err(e) => println!("could not parse {:?}: {}", name, e),
        }
    }

    match Color::try_from(3) {
        Ok(color) => println!("code 3 decoded as {}", color),
        Err(e) => println!("code 3 rejected: {}", e),
    }
}
