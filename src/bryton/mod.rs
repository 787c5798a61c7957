//! Bryton device file model and encoders
//!
//! Converts a parsed GPX document into the three fixed-layout binary files a
//! Bryton Rider head unit navigates from:
//!
//! - **`.smy`**: one 24-byte summary record (point count, bounding box, total
//!   distance)
//! - **`.track`**: 16 bytes per track point, in recorded order
//! - **`.tinfo`**: 44 bytes per turn instruction, referencing track points by
//!   index
//!
//! All multi-byte fields are little-endian and the `.smy` record opens with
//! an explicit `0x0001` initialization flag. [`Route::from_gpx`] populates
//! the in-memory model from the parser's output; [`Route::export`] writes the
//! three files next to a shared basename. Turn markers follow the GPSies.com
//! waypoint symbol convention (see [`DirectionCode`]).

pub mod coords;
mod direction;
mod route;
mod summary;
mod track;
mod waypoint;

// Public API exports
pub use direction::DirectionCode;
pub use route::{Route, first_segment_points};
pub use summary::{SUMMARY_LEN, Summary};
pub use track::{GeoPoint, TRACK_RECORD_LEN, Track};
pub use waypoint::{DESCRIPTION_LEN, TINFO_RECORD_LEN, Waypoint, encode_tinfo};

/// Error types for the conversion pipeline
#[derive(Debug, thiserror::Error)]
pub enum BrytonError {
    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no track points in input")]
    EmptyTrack,

    #[error("invalid track data: {0}")]
    InvalidTrackData(String),
}

pub type Result<T> = std::result::Result<T, BrytonError>;
