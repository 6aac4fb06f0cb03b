/// H.265/HEVC configuration record support
pub mod hevc;

// Re-export common types and functions
pub use hevc::HevcDecoderConfig;
pub use hevc::NalUnitType;
