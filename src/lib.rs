pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod light;
pub mod math;
pub mod scene;
pub mod types;

pub use camera::{Camera, NavigationMode, SceneNavigationState};
pub use error::CameraError;
pub use math::{AffineTransform, Order, PathSegment};
pub use scene::Scene;
