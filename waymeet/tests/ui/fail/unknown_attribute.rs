#![allow(dead_code)]

use waymeet::Patch;

#[derive(Patch)]
struct Profile {
    #[patch(rename = "full_name")]
    name: String,
}

fn main() {}
