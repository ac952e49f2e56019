//! Decoder for the encoded polyline format used by the directions service.
//!
//! Coordinates are delta-encoded at 1e-5 precision, five bits per byte with
//! a continuation flag, offset into the printable ASCII range.

use geo::{Coord, LineString};

use crate::Error;

/// Decode an encoded polyline into a line string (x = longitude,
/// y = latitude).
///
/// # Errors
///
/// [`Error::MalformedPolyline`] if a byte falls outside the encoding
/// alphabet or the input ends in the middle of a coordinate chunk.
pub fn decode(encoded: &str) -> Result<LineString<f64>, Error> {
    let bytes = encoded.as_bytes();
    let mut coords: Vec<Coord<f64>> = Vec::new();
    let mut pos = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while pos < bytes.len() {
        lat += next_delta(bytes, &mut pos)?;
        lng += next_delta(bytes, &mut pos)?;
        coords.push(Coord {
            x: lng as f64 / 1e5,
            y: lat as f64 / 1e5,
        });
    }

    Ok(LineString::new(coords))
}

/// Read one zigzag-encoded delta starting at `pos`.
fn next_delta(bytes: &[u8], pos: &mut usize) -> Result<i64, Error> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*pos) else {
            return Err(Error::MalformedPolyline(
                "input ends inside a coordinate chunk".to_string(),
            ));
        };
        if !(63..=126).contains(&byte) {
            return Err(Error::MalformedPolyline(format!(
                "invalid byte {byte:#04x} at offset {pos}",
                pos = *pos
            )));
        }
        if shift > 35 {
            return Err(Error::MalformedPolyline(
                "coordinate chunk too long".to_string(),
            ));
        }
        *pos += 1;

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk & 0x20 == 0 {
            break;
        }
    }

    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference vector from the format documentation.
    const REFERENCE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    #[test]
    fn decodes_reference_vector() {
        let line = decode(REFERENCE).unwrap();
        let coords: Vec<(f64, f64)> = line.coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            coords,
            vec![(-120.2, 38.5), (-120.95, 40.7), (-126.453, 43.252)]
        );
    }

    #[test]
    fn empty_input_is_an_empty_line() {
        let line = decode("").unwrap();
        assert_eq!(line.coords().count(), 0);
    }

    #[test]
    fn truncated_chunk_is_malformed() {
        // A latitude with the continuation bit set and nothing after it.
        assert!(matches!(
            decode("_"),
            Err(Error::MalformedPolyline(_))
        ));
    }

    #[test]
    fn missing_longitude_is_malformed() {
        // "_p~iF" is a complete latitude but no longitude follows.
        assert!(matches!(
            decode("_p~iF"),
            Err(Error::MalformedPolyline(_))
        ));
    }

    #[test]
    fn byte_outside_alphabet_is_malformed() {
        assert!(matches!(
            decode("_p~iF p"),
            Err(Error::MalformedPolyline(_))
        ));
    }
}
