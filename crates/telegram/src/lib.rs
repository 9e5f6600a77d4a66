//! Flight telegram parsing.
//!
//! Civilian-aviation flight notifications arrive as spreadsheet rows whose
//! columns carry three free-text ICAO-style telegrams: the SHR main flight
//! plan, the DEP departure confirmation and the ARR arrival confirmation.
//! This crate decomposes one such row into a typed [`FlightRecord`]:
//! identifiers, aircraft type and count, operator identity, compact
//! takeoff/landing coordinates, UTC instants and the derived flight
//! duration.
//!
//! # Pipeline position
//!
//! ```text
//! spreadsheet row ──▶ telegram ──▶ region tagging ──▶ dedup ──▶ store
//!                        ↑
//!                   (this crate)
//! ```
//!
//! Parsing is forgiving: every clause is extracted with a fixed,
//! pre-compiled pattern, and a clause that is missing or malformed leaves
//! its field at the default. The one exception is the datetime codec,
//! which panics on a malformed non-empty date (see [`parse_instant`]);
//! [`parse_row`] itself never fails.
//!
//! ```
//! use telegram::parse_row;
//!
//! let row = vec![
//!     String::new(),
//!     "(SHR-ZZZZZ\n-ZZZZ0705\n-DEP/5530N03730E DOF/240615 SID/123456)".to_string(),
//!     String::new(),
//!     String::new(),
//! ];
//! let record = parse_row(&row);
//! assert_eq!(record.shr.sid, 123456);
//! assert_eq!(record.shr.time_dep, "0705");
//! ```

mod coordinate;
mod datetime;
mod parser;
mod patterns;
mod record;

pub use coordinate::{parse_compact, Coordinate};
pub use datetime::parse_instant;
pub use parser::{parse_arrival, parse_departure, parse_row, parse_shr};
pub use record::{ArrBlock, DepBlock, FlightRecord, SearchFields, ShrBlock};
