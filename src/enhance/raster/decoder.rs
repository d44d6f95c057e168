use crate::enhance::common::error::Result;
use crate::enhance::raster::types::RasterImage;

pub trait ImageDecoder {
    fn decode(&self, data: &[u8]) -> Result<RasterImage>;
}
