// #[mask(text)] wraps a single string field and cannot apply to enums.

#![allow(dead_code)]

use masking::Maskable;

#[derive(Maskable)]
#[mask(text)]
enum Label {
    Short(String),
}

fn main() {}
