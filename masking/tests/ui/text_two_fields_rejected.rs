// A text wrapper must hold exactly one field.

#![allow(dead_code)]

use masking::Maskable;

#[derive(Maskable)]
#[mask(text)]
struct Pair(String, String);

fn main() {}
