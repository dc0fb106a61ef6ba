mod bezier;
mod frustum;
mod transform;

pub use bezier::{lerp, PathSegment};
pub use frustum::{sphere_in_frustum, NdcSphere};
pub use transform::{AffineTransform, Order};
