#![allow(dead_code)]

use waymeet::Patch;

#[derive(Patch)]
struct Pair(String, u32);

fn main() {}
