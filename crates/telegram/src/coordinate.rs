//! ICAO compact coordinate codec.
//!
//! Two formats are recognized, picked by input length:
//!
//! | length | layout | latitude | longitude |
//! |--------|--------|----------|-----------|
//! | 11–12  | DMM    | `DDMM[N\|S]` | `DDDMM[E\|W]` or `DDMM[E\|W]` |
//! | 15–16  | DMS    | `DDMMSS[N\|S]` | `DDDMMSS[E\|W]` |
//!
//! Both components are rounded to 6 decimal places. Parsing is total: any
//! malformed input yields `None`, never a panic.

use serde::{Deserialize, Serialize};

/// Decimal-degree position, south and west negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Parses a compact DMM/DMS position string into decimal degrees.
pub fn parse_compact(raw: &str) -> Option<Coordinate> {
    match raw.len() {
        11 | 12 => parse_dmm(raw.as_bytes()),
        15 | 16 => parse_dms(raw.as_bytes()),
        _ => None,
    }
}

fn parse_dmm(b: &[u8]) -> Option<Coordinate> {
    let lat_deg = digits(&b[0..2])?;
    let lat_min = digits(&b[2..4])?;
    let lat_sign = lat_hemisphere(b[4])?;

    let rest = &b[5..];
    // Longitude degrees take three digits when the slice allows it,
    // otherwise two.
    let (lon_deg, lon_min, lon_hemi) =
        if rest.len() >= 6 && rest[..3].iter().all(|d| d.is_ascii_digit()) {
            (digits(&rest[0..3])?, digits(&rest[3..5])?, rest[5])
        } else if rest.len() >= 5 {
            (digits(&rest[0..2])?, digits(&rest[2..4])?, rest[4])
        } else {
            return None;
        };
    let lon_sign = lon_hemisphere(lon_hemi)?;

    finish(
        lat_sign * (f64::from(lat_deg) + f64::from(lat_min) / 60.0),
        lon_sign * (f64::from(lon_deg) + f64::from(lon_min) / 60.0),
    )
}

fn parse_dms(b: &[u8]) -> Option<Coordinate> {
    let lat_deg = digits(&b[0..2])?;
    let lat_min = digits(&b[2..4])?;
    let lat_sec = digits(&b[4..6])?;
    let lat_sign = lat_hemisphere(b[6])?;

    let lon_deg = digits(&b[7..10])?;
    let lon_min = digits(&b[10..12])?;
    let lon_sec = digits(&b[12..14])?;
    let lon_sign = lon_hemisphere(b[14])?;

    finish(
        lat_sign * (f64::from(lat_deg) + f64::from(lat_min) / 60.0 + f64::from(lat_sec) / 3600.0),
        lon_sign * (f64::from(lon_deg) + f64::from(lon_min) / 60.0 + f64::from(lon_sec) / 3600.0),
    )
}

fn digits(slice: &[u8]) -> Option<u32> {
    slice.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            Some(acc * 10 + u32::from(b - b'0'))
        } else {
            None
        }
    })
}

fn lat_hemisphere(b: u8) -> Option<f64> {
    match b {
        b'N' => Some(1.0),
        b'S' => Some(-1.0),
        _ => None,
    }
}

fn lon_hemisphere(b: u8) -> Option<f64> {
    match b {
        b'E' => Some(1.0),
        b'W' => Some(-1.0),
        _ => None,
    }
}

fn finish(lat: f64, lon: f64) -> Option<Coordinate> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }
    Some(Coordinate {
        lat: round6(lat),
        lon: round6(lon),
    })
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
