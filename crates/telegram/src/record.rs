//! Typed flight-notification record.
//!
//! Field names serialize in camelCase so a serialized record matches the
//! persisted document layout (`shr.rawText`, `searchFields.arrDatetime`,
//! `dep.coordinates.lat`, …) byte for byte.

use chrono::{DateTime, Utc};
use operator::OperatorKind;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// One parsed flight notification: the three telegram blocks plus the
/// derived search instants and the region tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub shr: ShrBlock,
    pub dep: DepBlock,
    pub arr: ArrBlock,
    #[serde(rename = "searchFields")]
    pub search: SearchFields,
    /// Federal subject of the takeoff point; the literal
    /// `Регион не определен` when it cannot be resolved.
    pub region: String,
}

/// Fields extracted from the SHR main flight plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShrBlock {
    pub raw_text: String,
    /// Stable identifier of the notification; the deduplication key.
    /// 0 when the telegram carries no `SID/` clause.
    pub sid: i64,
    /// Aircraft registration index; `None` for the ICAO `Z…ZZZZZ`
    /// "unknown" sentinels.
    pub aircraft_index: Option<String>,
    pub aircraft_type: Option<String>,
    pub aircraft_quantity: u32,
    pub coordinates_dep: Option<Coordinate>,
    pub coordinates_arr: Option<Coordinate>,
    /// Date of flight at midnight UTC, from the `DOF/` clause.
    pub date_time: Option<DateTime<Utc>>,
    /// Flight duration in minutes; set only when strictly positive.
    pub flight_duration: Option<f64>,
    pub time_dep: String,
    pub time_arr: String,
    /// Raw `YYMMDD` date of flight.
    pub date: String,
    pub operator: String,
    pub operator_type: OperatorKind,
}

/// Fields extracted from the DEP departure telegram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepBlock {
    pub raw_text: String,
    pub date_time: Option<DateTime<Utc>>,
    pub coordinates: Option<Coordinate>,
}

/// Fields extracted from the ARR arrival telegram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrBlock {
    pub raw_text: String,
    pub date_time: Option<DateTime<Utc>>,
    pub coordinates: Option<Coordinate>,
}

/// Indexed instants derived from the three blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFields {
    /// Best-known departure instant.
    pub date_time: Option<DateTime<Utc>>,
    /// Arrival instant; dropped when it precedes the departure.
    pub arr_datetime: Option<DateTime<Utc>>,
}
