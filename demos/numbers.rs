//! Lossless number storage and exact narrowing.
//!
//! Run with: cargo run --example numbers

use jsondoc::{from_str, Decimal, Error, Value};
use std::error::Error as StdError;

fn main() -> Result<(), Box<dyn StdError>> {
    let doc = from_str(
        r#"{
            "small": 300,
            "huge": 123456789012345678901234567890,
            "price": 19.990,
            "ratio": 0.1,
            "integral": 4.0
        }"#,
    )?;

    // Scale and magnitude survive the round trip
    println!("Round trip: {}\n", doc);

    let obj = doc.as_object().ok_or("expected an object")?;
    let small = obj.get("small").ok_or("missing 'small'")?;

    println!("Narrowing 300:");
    report("i8", small.to_number::<i8>());
    report("u8", small.to_number::<u8>());
    report("i16", small.to_number::<i16>());
    report("f32", small.to_number::<f32>());

    if let Some(huge) = obj.get("huge") {
        println!("\nNarrowing a 30-digit integer:");
        report("u128", huge.to_number::<u128>());
        println!("  BigInt -> {}", huge.as_integer().ok_or("not an integer")?);
    }

    if let Some(price) = obj.get("price").and_then(Value::as_decimal) {
        println!("\nDecimal 'price': unscaled {}, scale {}", price.unscaled(), price.scale());
        let same: Decimal = "19.99".parse()?;
        println!("  equal to 19.99: {}", *price == same);
    }

    println!("\nFloat reads:");
    for key in ["ratio", "integral"] {
        if let Some(value) = obj.get(key) {
            report(key, value.to_number::<f64>());
        }
    }
    report("integral as i32", obj.get("integral").map_or(Ok(0), |v| v.to_number::<i32>()));

    Ok(())
}

fn report<T: std::fmt::Display>(target: &str, result: Result<T, Error>) {
    match result {
        Ok(v) => println!("  {} -> {}", target, v),
        Err(e) => println!("  {} -> error: {}", target, e),
    }
}
