//! Gesture-driven virtual painter.
//!
//! A camera frame goes through the [`landmarks::LandmarkAdapter`], then a
//! [`session::Session`] smooths the fingertip, classifies the gesture,
//! sizes or selects the tool, strokes the canvas and composes the output.

pub mod camera;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod gesture;
pub mod landmarks;
pub mod palette;
pub mod session;
pub mod sim;
pub mod sizer;
pub mod smoother;
pub mod timing;
pub mod types;

pub use error::{Error, Result};
