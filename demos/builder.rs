//! Building a document with conditional combinators.
//!
//! Run with: cargo run --example builder

use jsondoc::{Array, Object, With};

struct Deployment {
    service: &'static str,
    replicas: u32,
    region: Option<&'static str>,
    canary: bool,
    env: Vec<(&'static str, &'static str)>,
}

fn describe(deploy: &Deployment) -> Object {
    let mut doc = Object::new();
    doc.set("service", deploy.service)
        .set("replicas", deploy.replicas)
        .set_if(deploy.region.is_some(), "region", deploy.region)
        .set_null_if(deploy.region.is_none(), "region_pending")
        // Only computed for canary rollouts
        .set_if_with(deploy.canary, "canary", || {
            let mut canary = Object::new();
            canary.set("weight", 0.05).set("steps", vec![5, 25, 100]);
            canary
        })
        .with_if(!deploy.env.is_empty(), |obj| {
            let mut env = Object::new();
            for (k, v) in &deploy.env {
                env.set(*k, *v);
            }
            obj.set("env", env);
        });
    doc
}

fn main() {
    let full = Deployment {
        service: "api",
        replicas: 3,
        region: Some("eu-west-1"),
        canary: true,
        env: vec![("LOG_LEVEL", "debug"), ("PORT", "8080")],
    };
    let minimal = Deployment {
        service: "worker",
        replicas: 1,
        region: None,
        canary: false,
        env: vec![],
    };

    let mut all = Array::new();
    all.add(describe(&full))
        .add(describe(&minimal))
        .add_null_if(false);

    println!("{}", jsondoc::to_string_pretty(&all.into()));
}
