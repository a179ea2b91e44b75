use std::error::Error;

use butler_helpers::{
    SlugConfig, cents_to_dollars, get_random_string, is_number, is_typical_utf8, is_valid_email,
    slugify, to_int, to_utf8_string,
};

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // Slugs with the default options
    // ────────────────────────────────────────────────────────────────
    let defaults = SlugConfig::default();
    println!("{}", slugify("🧟 Zombie 🧟 Zombie", &defaults)?);
    // → zombie-zombie
    println!("{}", slugify("HÉllo wőrld, fűn!", &defaults)?);
    // → hello-world-fun

    // ────────────────────────────────────────────────────────────────
    // UTF-8 checks and repair
    // ────────────────────────────────────────────────────────────────
    let upload: &[u8] = b"invoice \x8F total";
    println!("typical? {}", is_typical_utf8(upload));
    // → typical? false
    println!("repaired: {:?}", to_utf8_string(upload));
    // → repaired: "invoice  total"

    // ────────────────────────────────────────────────────────────────
    // Numbers, money, emails, tokens
    // ────────────────────────────────────────────────────────────────
    println!("{} {}", is_number("+1.5"), is_number("1.07e58"));
    // → true false
    println!("{}", to_int("7.992")?);
    // → 7
    println!("{}", cents_to_dollars(-999));
    // → $-9.99
    println!("{}", is_valid_email("_test_@example.com."));
    // → true
    println!("token: {}", get_random_string(24));

    Ok(())
}
