//! Convert GPX routes into the binary navigation files used by Bryton Rider
//! GPS devices.
//!
//! The [`bryton`] module holds the whole pipeline: fixed-point coordinate
//! encoding, GPSies turn-marker mapping, and the `.smy`/`.track`/`.tinfo`
//! encoders. The `gpx2bryton` binary is a thin CLI around
//! [`bryton::Route::from_gpx_file`] and [`bryton::Route::export`].

pub mod bryton;

// Public API exports
pub use bryton::{BrytonError, Result, Route};
