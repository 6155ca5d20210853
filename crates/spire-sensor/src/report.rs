use crate::error::ReportError;
use crate::types::Axes;

/// Size of one device report in bytes.
pub const REPORT_LEN: usize = 8;

/// One sample from the tilt sensor: three axes and the auxiliary channel the
/// pause button is derived from. Fields are little-endian `i16` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub aux: i16,
}

impl Report {
    /// Decode a report, rejecting buffers shorter than [`REPORT_LEN`].
    /// Trailing bytes are ignored.
    pub fn decode(buf: &[u8]) -> Result<Self, ReportError> {
        if buf.len() < REPORT_LEN {
            return Err(ReportError::Short {
                len: buf.len(),
                expected: REPORT_LEN,
            });
        }
        let field = |i: usize| i16::from_le_bytes([buf[i * 2], buf[i * 2 + 1]]);
        Ok(Self {
            x: field(0),
            y: field(1),
            z: field(2),
            aux: field(3),
        })
    }

    pub fn encode(&self) -> [u8; REPORT_LEN] {
        let mut out = [0u8; REPORT_LEN];
        for (i, value) in [self.x, self.y, self.z, self.aux].into_iter().enumerate() {
            out[i * 2..i * 2 + 2].copy_from_slice(&value.to_le_bytes());
        }
        out
    }
}

/// How raw report fields turn into axis values and the button level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportMapping {
    /// The button reads as held while `aux` is below this value.
    pub aux_threshold: i16,
    /// Raw units per output unit.
    pub scale: f32,
    pub invert_x: bool,
}

impl Default for ReportMapping {
    fn default() -> Self {
        Self {
            aux_threshold: 2000,
            scale: 100.0,
            invert_x: true,
        }
    }
}

impl ReportMapping {
    #[inline]
    pub fn button_level(&self, report: &Report) -> bool {
        report.aux < self.aux_threshold
    }

    /// The sensor's Y channel drives the game's Z axis.
    #[inline]
    pub fn axes(&self, report: &Report) -> Axes {
        let x = f32::from(report.x) / self.scale;
        Axes {
            x: if self.invert_x { -x } else { x },
            z: f32::from(report.y) / self.scale,
        }
    }
}
