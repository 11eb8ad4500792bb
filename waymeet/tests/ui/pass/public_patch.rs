mod model {
    use waymeet::Patch;

    /// Venue record.
    #[derive(Patch, Clone, Default)]
    pub struct Venue {
        /// Display name.
        pub name: String,
        pub capacity: u32,
        pub open: bool,
    }
}

use model::{Venue, VenuePatch};
use waymeet::patch::Patch as _;

fn main() {
    let venue = Venue::default();
    let patch = VenuePatch {
        open: Some(true),
        ..VenuePatch::default()
    };
    let next = patch.applied_to(&venue);
    assert!(next.open);
    assert_eq!(next.capacity, 0);
    assert!(next.name.is_empty());
}
