pub mod cell;
pub mod encoder;
pub mod raster;
