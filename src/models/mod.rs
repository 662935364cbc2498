pub mod error;
pub mod palette;
pub mod route;
pub mod spec;
pub mod viewport;

pub use error::ViewError;
pub use palette::{ColorScheme, Status};
pub use route::Route;
pub use spec::VisualizationSpec;
pub use viewport::{Viewport, ViewportSource};
