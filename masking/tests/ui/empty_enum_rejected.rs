// An enum without variants has no zero value to mask into.

#![allow(dead_code)]

use masking::Maskable;

#[derive(Maskable)]
enum Never {}

fn main() {}
