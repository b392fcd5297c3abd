//! Core value types.
//!
//! - `Position` - a pair of board coordinates
//! - `Destinations` - ordered, fixed-capacity list of knight destinations

mod destinations;
mod position;

pub use destinations::{Destinations, DestinationsIntoIter};
pub use position::Position;
