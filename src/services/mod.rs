pub mod spec_loader;

pub use spec_loader::{spec_from_response, SpecLoader, SpecSource};
