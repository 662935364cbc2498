pub mod view_controller;

pub use view_controller::{initialize, ViewController};
