//! Utilities used for testing and benchmarking.

mod picture;
pub use picture::{board_from_picture, parse_picture, PictureError};
