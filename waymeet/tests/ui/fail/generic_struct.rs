#![allow(dead_code)]

use waymeet::Patch;

#[derive(Patch)]
struct Wrapper<T> {
    value: T,
}

fn main() {}
