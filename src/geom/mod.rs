pub mod convert;
pub mod parse;

pub use convert::{polygon_to_ring, ring_to_polygon};
pub use parse::{parse_point, parse_polygon, try_parse_point, try_parse_polygon};
