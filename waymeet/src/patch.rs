//! Partial updates.
//!
//! `#[derive(Patch)]` generates a `<Name>Patch` struct for a record; this trait is
//! what the generated type implements.

pub use waymeet_macros::Patch;

/// A set of optional field overrides for `T`.
pub trait Patch<T> {
    /// Overwrite every field of `target` that is set on this patch.
    fn apply(self, target: &mut T);

    /// Apply to a copy of `target` and return it.
    fn applied_to(self, target: &T) -> T
    where
        Self: Sized,
        T: Clone,
    {
        let mut next = target.clone();
        self.apply(&mut next);
        next
    }
}
