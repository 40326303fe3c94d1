use crate::error::Result;

/// Check an entity against its documented domain or structural invariants.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> Option<(Self::Point, Self::Point)>;
}
