//! Route summary record and the `.smy` encoding

/// Byte length of the single `.smy` record.
pub const SUMMARY_LEN: usize = 24;

/// Constant initialization flag leading every `.smy` record.
const SMY_INIT_FLAG: i16 = 0x0001;

/// The route summary backing the `.smy` file, one record per export.
///
/// The count, bounding box, and distance describe the whole source route
/// (every track and segment), not just the sequence exported to `.track`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Number of track points recorded in the source route.
    pub coordinate_count: i16,
    /// Bounding-box north edge, latitude in microdegrees.
    pub bbox_north: i32,
    /// Bounding-box south edge, latitude in microdegrees.
    pub bbox_south: i32,
    /// Bounding-box east edge, longitude in microdegrees.
    pub bbox_east: i32,
    /// Bounding-box west edge, longitude in microdegrees.
    pub bbox_west: i32,
    /// Total path length in meters.
    pub total_distance_m: i32,
}

impl Summary {
    /// Serialize to the 24-byte `.smy` layout: init flag `0x0001`, point
    /// count, the four bounding-box edges (north, south, east, west), total
    /// distance. All fields little-endian.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(SUMMARY_LEN);
        buf.extend_from_slice(&SMY_INIT_FLAG.to_le_bytes());
        buf.extend_from_slice(&self.coordinate_count.to_le_bytes());
        buf.extend_from_slice(&self.bbox_north.to_le_bytes());
        buf.extend_from_slice(&self.bbox_south.to_le_bytes());
        buf.extend_from_slice(&self.bbox_east.to_le_bytes());
        buf.extend_from_slice(&self.bbox_west.to_le_bytes());
        buf.extend_from_slice(&self.total_distance_m.to_le_bytes());
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_exactly_24_bytes() {
        let summary = Summary {
            coordinate_count: 0,
            bbox_north: 0,
            bbox_south: 0,
            bbox_east: 0,
            bbox_west: 0,
            total_distance_m: 0,
        };
        assert_eq!(summary.encode().len(), SUMMARY_LEN);
    }

    #[test]
    fn test_encode_layout() {
        let summary = Summary {
            coordinate_count: 3,
            bbox_north: 2_000_000,
            bbox_south: -127_758,
            bbox_east: 2_000_000,
            bbox_west: 0,
            total_distance_m: 314,
        };
        let bytes = summary.encode();

        // Init flag 0x0001, little-endian.
        assert_eq!(&bytes[0..2], &[0x01, 0x00]);
        assert_eq!(&bytes[2..4], &[0x03, 0x00]);
        // 2_000_000 = 0x001E8480.
        assert_eq!(&bytes[4..8], &[0x80, 0x84, 0x1E, 0x00]);
        // -127_758 = 0xFFFE0CF2 in two's complement.
        assert_eq!(&bytes[8..12], &[0xF2, 0x0C, 0xFE, 0xFF]);
        assert_eq!(&bytes[12..16], &[0x80, 0x84, 0x1E, 0x00]);
        assert_eq!(&bytes[16..20], &[0x00, 0x00, 0x00, 0x00]);
        // 314 = 0x0000013A.
        assert_eq!(&bytes[20..24], &[0x3A, 0x01, 0x00, 0x00]);
    }
}
