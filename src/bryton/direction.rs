//! Turn direction codes for the device's navigation arrows

/// One-byte code selecting which turn arrow icon the device displays.
///
/// The numeric values are the wire representation written into `.tinfo`
/// records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DirectionCode {
    /// Go ahead / continue straight. Also the fallback for markers outside
    /// the supported convention.
    GoAhead = 0x01,
    /// Right turn.
    Right = 0x02,
    /// Left turn.
    Left = 0x03,
    /// Slight right turn.
    SlightRight = 0x04,
    /// Slight left turn.
    SlightLeft = 0x05,
    /// Close (sharp) right turn.
    CloseRight = 0x06,
    /// Close (sharp) left turn.
    CloseLeft = 0x07,
}

impl DirectionCode {
    /// Map a GPSies.com waypoint symbol to a direction code.
    ///
    /// Matching is case-insensitive. Symbols outside the GPSies convention
    /// degrade to [`DirectionCode::GoAhead`] with a warning; an unsupported
    /// marker is never a conversion error.
    pub fn from_marker(marker: &str) -> Self {
        Self::try_from_marker(marker).unwrap_or_else(|| {
            tracing::warn!("unsupported direction marker {marker:?}, using go-ahead");
            Self::GoAhead
        })
    }

    /// Strict variant of [`DirectionCode::from_marker`]: `None` for symbols
    /// outside the GPSies convention.
    pub fn try_from_marker(marker: &str) -> Option<Self> {
        match marker.to_lowercase().as_str() {
            "tshl" => Some(Self::CloseLeft),
            "left" => Some(Self::Left),
            "tsll" => Some(Self::SlightLeft),
            "straight" => Some(Self::GoAhead),
            "tslr" => Some(Self::SlightRight),
            "right" => Some(Self::Right),
            "tshr" => Some(Self::CloseRight),
            _ => None,
        }
    }

    /// Wire value written to `.tinfo` records.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
