// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drives one array of a trivially relocatable type and one of an owning
//! type through the same lifecycle, printing after every step.
//!
//! Build with `--features demo`; set `RUST_LOG=debug` to see growth decisions.

use std::error::Error;

use growable_array::{Element, GrowableArray};
use log::info;

fn show<T: std::fmt::Display>(label: &str, a: &GrowableArray<T>) {
    info!("{label}: len={} capacity={}", a.len(), a.capacity());
    println!("{a}");
}

fn run<T: Element + std::fmt::Display>(
    label: &str,
    seed: &[T],
    extra: &T,
) -> Result<(), Box<dyn Error>> {
    let mut a = GrowableArray::new();
    a.init(seed)?;
    show(label, &a);

    a.push(extra)?;
    show(label, &a);

    a.pop()?;
    show(label, &a);

    a.destroy();
    show(label, &a);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    run("ints", &[10, 20, 30, 40], &5)?;

    let words: Vec<String> = ["true", "false", "false", "true"]
        .into_iter()
        .map(String::from)
        .collect();
    run("strings", &words, &String::from("hola"))?;
    Ok(())
}
