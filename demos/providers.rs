//! Resolving a provider once and passing the handle to callers.
//!
//! Run with: cargo run --example providers

use jsondoc::provider::{Json, ProviderConfig, Registry, TextProvider};
use jsondoc::{JsonOptions, Value};
use std::error::Error;

fn audit_event(json: &Json, user: &str, bytes: &[u8], tags: &[&str]) -> Value {
    json.new_object_with(4, |event| {
        event
            .set("user", json.new_string(user))
            .set("size", json.new_integer(bytes.len() as u64))
            .set("digest", json.new_binary(bytes))
            .set_if_with(!tags.is_empty(), "tags", || {
                json.new_array_with(tags.len(), |arr| {
                    arr.append(tags.iter().copied());
                })
            });
    })
    .into()
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut registry = Registry::with_defaults();
    registry.register(TextProvider::new(JsonOptions::new().with_ascii_only(true)));

    // First registered wins when nothing is configured
    let json = registry.resolve()?;
    println!("Resolved provider: {}", json.name());

    let event = audit_event(&json, "zoë", &[0xde, 0xad, 0xbe, 0xef], &["login"]);
    println!("{}\n", json.to_pretty_text(&event));

    let parsed = json.deserialize(&json.to_text(&event))?;
    let digest = parsed
        .as_object()
        .and_then(|obj| obj.get("digest"))
        .ok_or("missing digest")?;
    println!("Digest bytes: {:?}", digest.binary_value()?);

    match json.deserialize("{\"user\": \"x\",}") {
        Ok(_) => println!("unexpectedly parsed"),
        Err(e) => println!("Rejected input: {}", e),
    }

    let missing = registry.resolve_with(&ProviderConfig::new().with_preferred("simd"));
    if let Err(e) = missing {
        println!("Preferred provider: {}", e);
    }

    Ok(())
}
