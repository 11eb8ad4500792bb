#![allow(dead_code)]

use waymeet::Patch;

#[derive(Patch)]
struct Marker {
    #[patch(skip)]
    id: String,
}

fn main() {}
