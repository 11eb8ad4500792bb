#![allow(dead_code)]

use waymeet::Patch;

#[derive(Patch)]
enum Mode {
    On,
    Off,
}

fn main() {}
