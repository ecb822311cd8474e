pub mod batch;

pub use batch::{
    GpsCoordinatesToRd, RdCoordinatesToGps, gps_to_rd_batch, polygon_to_gps, rd_to_gps_batch,
};
