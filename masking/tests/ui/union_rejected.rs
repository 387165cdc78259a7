// Unions cannot be walked field by field.

#![allow(dead_code)]

use masking::Maskable;

#[derive(Maskable)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
