pub mod custom_scan;
pub mod point;
pub mod sample;
pub mod wire_format;

pub use custom_scan::CustomScanParams;
pub use point::Point3D;
pub use sample::ScanSample;
pub use wire_format::{WireFormat, BAUD_RATE};
