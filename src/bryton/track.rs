//! Track point storage and the `.track` encoding

use crate::bryton::coords::degrees_to_fixed;
use crate::bryton::{BrytonError, Result};

/// Record width of one `.track` entry: two coordinates plus eight reserved
/// zero bytes.
pub const TRACK_RECORD_LEN: usize = 16;

/// One track point in the device's fixed-point representation.
///
/// Equality is exact integer equality on both axes: two points are the same
/// only if they encode to identical microdegree values, with no tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeoPoint {
    /// Latitude in microdegrees.
    pub lat: i32,
    /// Longitude in microdegrees.
    pub lon: i32,
}

impl GeoPoint {
    /// Encode a degree pair into a fixed-point track point.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat: degrees_to_fixed(lat),
            lon: degrees_to_fixed(lon),
        }
    }
}

/// The ordered track point sequence backing the `.track` file.
///
/// Insertion order is chronological order along the recorded path and is
/// load-bearing: `.tinfo` records reference positions in this sequence, so it
/// is never reordered or deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Track {
    points: Vec<GeoPoint>,
}

impl Track {
    /// Wrap an ordered point sequence.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// The points in recorded order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of points in the sequence.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sequence holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Resolve a point to its position in the sequence.
    ///
    /// Linear scan returning the first exact match. A point that appears
    /// nowhere in the sequence resolves to `0`, which the `.tinfo` format
    /// cannot distinguish from a genuine match at index 0; the device format
    /// has no sentinel, so the ambiguity is inherent.
    pub fn coordinate_index(&self, point: GeoPoint) -> u16 {
        self.points
            .iter()
            .position(|&p| p == point)
            .map_or(0, |i| i as u16)
    }

    /// Serialize to the `.track` layout: per point, latitude and longitude as
    /// little-endian `i32` followed by eight reserved zero bytes.
    ///
    /// The file has no header or footer; its length divided by 16 is the
    /// point count. Output order matches the sequence order exactly, which is
    /// what `.tinfo` coordinate indices refer to.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.points.len() * TRACK_RECORD_LEN);
        for point in &self.points {
            buf.extend_from_slice(&point.lat.to_le_bytes());
            buf.extend_from_slice(&point.lon.to_le_bytes());
            buf.extend_from_slice(&[0u8; 8]);
        }
        buf
    }

    /// Read a `.track` buffer back into a point sequence.
    ///
    /// Fails if the buffer length is not a whole number of 16-byte records.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % TRACK_RECORD_LEN != 0 {
            return Err(BrytonError::InvalidTrackData(format!(
                "length {} is not a multiple of {TRACK_RECORD_LEN}",
                bytes.len()
            )));
        }

        let points = bytes
            .chunks_exact(TRACK_RECORD_LEN)
            .map(|record| GeoPoint {
                lat: i32::from_le_bytes([record[0], record[1], record[2], record[3]]),
                lon: i32::from_le_bytes([record[4], record[5], record[6], record[7]]),
            })
            .collect();

        Ok(Self { points })
    }
}
