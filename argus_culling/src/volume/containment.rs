/// Result of a 3-way containment classification.
///
/// Used by spatial acceleration structures (octrees, loose grids) for
/// hierarchical culling:
/// - `Outside` → skip the entire subtree
/// - `Inside` → collect all objects without further testing
/// - `Intersect` → test individual objects and recurse into children
///
/// Variants are ordered `Outside < Intersect < Inside`, so `max` yields
/// the more permissive of two verdicts and `min` the more restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Containment {
    /// Shape is entirely outside the volume
    Outside,
    /// Shape straddles the volume boundary
    Intersect,
    /// Shape is entirely inside the volume
    Inside,
}

impl Containment {
    /// Verdict against the union of two volumes, given the verdict against
    /// each one: the more permissive of the two.
    ///
    /// A shape inside either volume is inside the union, a shape outside
    /// both is outside the union, and anything else straddles it.
    pub fn union(self, other: Containment) -> Containment {
        self.max(other)
    }

    /// True unless the verdict is `Outside`.
    ///
    /// Converts a verdict into the keep/prune decision a traversal needs.
    pub fn touches(self) -> bool {
        self != Containment::Outside
    }
}

#[cfg(test)]
#[path = "containment_tests.rs"]
mod tests;
