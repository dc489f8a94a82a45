//! Detection-line parsing. Only lines of the exact shape
//! `FACE:<integer>` are meaningful; everything else is noise from the
//! transport and is ignored.

use tally_core::constants::DETECTION_PREFIX;

/// Extract the identifier from a raw transport line, if it is a
/// detection line.
pub fn parse_detection(line: &str) -> Option<i64> {
    let line = line.trim();
    let payload = line.strip_prefix(DETECTION_PREFIX)?;
    payload.trim().parse().ok()
}
