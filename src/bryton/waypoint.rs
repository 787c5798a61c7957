//! Waypoint records and the `.tinfo` encoding

use crate::bryton::direction::DirectionCode;

/// Record width of one `.tinfo` entry.
pub const TINFO_RECORD_LEN: usize = 44;

/// Byte length of the fixed-width description field.
pub const DESCRIPTION_LEN: usize = 32;

/// One turn instruction tied to a track point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Waypoint {
    /// Position of the matching point in the track sequence (`0` when the
    /// waypoint matched nothing, see `Track::coordinate_index`).
    pub coordinate_index: u16,
    /// Turn arrow the device should display.
    pub direction: DirectionCode,
    /// Distance to the waypoint in meters. Currently always zero, reserved
    /// for future use.
    pub distance_m: u16,
    /// Time to the waypoint in seconds. Currently always zero, reserved for
    /// future use.
    pub time_sec: u16,
    /// Fixed-width description shown next to the turn arrow.
    pub description: [u8; DESCRIPTION_LEN],
}

impl Waypoint {
    /// Build a waypoint record with the reserved distance and time fields
    /// zeroed and the name fitted into the fixed description field.
    pub fn new(coordinate_index: u16, direction: DirectionCode, name: &str) -> Self {
        Self {
            coordinate_index,
            direction,
            distance_m: 0,
            time_sec: 0,
            description: fit_description(name),
        }
    }

    /// Serialize to one 44-byte `.tinfo` record.
    ///
    /// Layout: coordinate index (2), direction code (1), one reserved byte,
    /// distance (2), two reserved bytes, time in seconds (2), two reserved
    /// bytes, description (32). Multi-byte fields little-endian.
    pub fn encode(&self) -> [u8; TINFO_RECORD_LEN] {
        let mut record = [0u8; TINFO_RECORD_LEN];
        record[0..2].copy_from_slice(&self.coordinate_index.to_le_bytes());
        record[2] = self.direction.as_u8();
        record[4..6].copy_from_slice(&self.distance_m.to_le_bytes());
        record[8..10].copy_from_slice(&self.time_sec.to_le_bytes());
        record[12..44].copy_from_slice(&self.description);
        record
    }
}

/// Serialize a waypoint sequence to the `.tinfo` layout, one 44-byte record
/// per waypoint in sequence order. No header or footer.
pub fn encode_tinfo(waypoints: &[Waypoint]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(waypoints.len() * TINFO_RECORD_LEN);
    for waypoint in waypoints {
        buf.extend_from_slice(&waypoint.encode());
    }
    buf
}

/// Fit a name into the fixed 32-byte description field.
///
/// The name's bytes are copied up to the field width and the remainder is
/// zero padded; anything beyond 32 bytes is silently dropped.
fn fit_description(name: &str) -> [u8; DESCRIPTION_LEN] {
    let mut description = [0u8; DESCRIPTION_LEN];
    let bytes = name.as_bytes();
    let len = bytes.len().min(DESCRIPTION_LEN);
    description[..len].copy_from_slice(&bytes[..len]);
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let waypoint = Waypoint::new(1, DirectionCode::Left, "Turn");
        let record = waypoint.encode();

        assert_eq!(record.len(), TINFO_RECORD_LEN);
        assert_eq!(&record[0..2], &[0x01, 0x00]);
        assert_eq!(record[2], 0x03);
        assert_eq!(&record[12..16], b"Turn");
        assert_eq!(&record[16..44], &[0u8; 28]);
    }

    #[test]
    fn test_encode_reserved_bytes_are_zero() {
        let waypoint = Waypoint {
            coordinate_index: u16::MAX,
            direction: DirectionCode::CloseRight,
            distance_m: u16::MAX,
            time_sec: u16::MAX,
            description: [0xFF; DESCRIPTION_LEN],
        };
        let record = waypoint.encode();

        assert_eq!(record[3], 0);
        assert_eq!(&record[6..8], &[0, 0]);
        assert_eq!(&record[10..12], &[0, 0]);
    }

    #[test]
    fn test_encode_field_offsets() {
        let waypoint = Waypoint {
            coordinate_index: 0x0201,
            direction: DirectionCode::SlightRight,
            distance_m: 0x0403,
            time_sec: 0x0605,
            description: [b'x'; DESCRIPTION_LEN],
        };
        let record = waypoint.encode();

        assert_eq!(&record[0..2], &[0x01, 0x02]);
        assert_eq!(record[2], 0x04);
        assert_eq!(&record[4..6], &[0x03, 0x04]);
        assert_eq!(&record[8..10], &[0x05, 0x06]);
        assert_eq!(&record[12..44], &[b'x'; DESCRIPTION_LEN]);
    }

    #[test]
    fn test_long_description_truncates_silently() {
        let name = "a waypoint description well beyond the thirty-two byte field";
        assert!(name.len() > DESCRIPTION_LEN);

        let waypoint = Waypoint::new(0, DirectionCode::GoAhead, name);
        assert_eq!(&waypoint.description, &name.as_bytes()[..DESCRIPTION_LEN]);
        assert_eq!(waypoint.encode().len(), TINFO_RECORD_LEN);
    }

    #[test]
    fn test_empty_description_is_all_zeros() {
        let waypoint = Waypoint::new(0, DirectionCode::GoAhead, "");
        assert_eq!(waypoint.description, [0u8; DESCRIPTION_LEN]);
    }

    #[test]
    fn test_tinfo_length_is_multiple_of_record_len() {
        for n in 0..5 {
            let waypoints: Vec<Waypoint> = (0..n)
                .map(|i| Waypoint::new(i as u16, DirectionCode::Right, "w"))
                .collect();
            assert_eq!(encode_tinfo(&waypoints).len(), n * TINFO_RECORD_LEN);
        }
    }

    #[test]
    fn test_tinfo_concatenates_in_order() {
        let waypoints = vec![
            Waypoint::new(0, DirectionCode::Left, "first"),
            Waypoint::new(1, DirectionCode::Right, "second"),
        ];
        let buf = encode_tinfo(&waypoints);

        assert_eq!(&buf[0..44], &waypoints[0].encode());
        assert_eq!(&buf[44..88], &waypoints[1].encode());
    }
}
