//! Row parser: three raw telegram blobs in, one [`FlightRecord`] out.
//!
//! Extraction is best-effort: a clause that is absent or fails its pattern
//! simply leaves the field at its default. Parsing is pure and stateless;
//! the same row always produces an equal record.

use crate::coordinate;
use crate::datetime;
use crate::patterns::{self, capture};
use crate::record::{ArrBlock, DepBlock, FlightRecord, SearchFields, ShrBlock};

/// Registration indexes the ICAO grammar uses for "no index assigned".
const UNKNOWN_AIRCRAFT_INDEXES: [&str; 5] = ["Z", "ZZ", "ZZZ", "ZZZZ", "ZZZZZ"];

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or_default()
}

/// Parses one spreadsheet row. Column 1 is the SHR plan, column 2 the DEP
/// telegram, column 3 the ARR telegram; missing columns read as empty.
/// The `region` field is left empty for the tagging stage.
pub fn parse_row(row: &[String]) -> FlightRecord {
    let mut shr = parse_shr(cell(row, 1));
    let dep = parse_departure(cell(row, 2));
    let arr = parse_arrival(cell(row, 3));

    let search = derive_search(&shr, &dep, &arr);
    if let (Some(departed), Some(arrived)) = (search.date_time, search.arr_datetime) {
        let minutes = (arrived - departed).num_seconds() as f64 / 60.0;
        if minutes > 0.0 {
            shr.flight_duration = Some(minutes);
        }
    }

    FlightRecord {
        shr,
        dep,
        arr,
        search,
        region: String::new(),
    }
}

/// Parses the SHR main-plan block.
pub fn parse_shr(raw_text: &str) -> ShrBlock {
    let aircraft_index = capture(&patterns::AIRCRAFT_INDEX, raw_text)
        .filter(|index| !UNKNOWN_AIRCRAFT_INDEXES.contains(index))
        .map(str::to_owned);
    let aircraft_type = capture(&patterns::AIRCRAFT_TYPE, raw_text).map(str::to_owned);
    let aircraft_quantity = capture(&patterns::TYPE_COUNT, raw_text)
        .and_then(|count| count.parse().ok())
        .unwrap_or(1);

    let coordinates_dep =
        capture(&patterns::DEP_COORD, raw_text).and_then(coordinate::parse_compact);
    let coordinates_arr =
        capture(&patterns::DEST_COORD, raw_text).and_then(coordinate::parse_compact);

    let date = capture(&patterns::DOF, raw_text).unwrap_or_default().to_owned();
    let date_time = datetime::parse_instant(&date, "");
    let sid = capture(&patterns::SID, raw_text)
        .and_then(|sid| sid.parse().ok())
        .unwrap_or(0);

    let (operator, operator_type) = operator::extract_and_classify(raw_text);

    ShrBlock {
        raw_text: raw_text.to_owned(),
        sid,
        aircraft_index,
        aircraft_type,
        aircraft_quantity,
        coordinates_dep,
        coordinates_arr,
        date_time,
        flight_duration: None,
        time_dep: dashed_line_time(raw_text, 1),
        time_arr: dashed_line_time(raw_text, 3),
        date,
        operator,
        operator_type,
    }
}

/// Parses the DEP departure telegram (`-ADD`, `-ATD`, `-ADEPZ`).
pub fn parse_departure(raw_text: &str) -> DepBlock {
    DepBlock {
        raw_text: raw_text.to_owned(),
        date_time: datetime::parse_instant(
            capture(&patterns::ADD_DATE, raw_text).unwrap_or_default(),
            capture(&patterns::ATD_TIME, raw_text).unwrap_or_default(),
        ),
        coordinates: capture(&patterns::ADEPZ_COORD, raw_text).and_then(coordinate::parse_compact),
    }
}

/// Parses the ARR arrival telegram (`-ADA`, `-ATA`, `-ADARRZ`).
pub fn parse_arrival(raw_text: &str) -> ArrBlock {
    ArrBlock {
        raw_text: raw_text.to_owned(),
        date_time: datetime::parse_instant(
            capture(&patterns::ADA_DATE, raw_text).unwrap_or_default(),
            capture(&patterns::ATA_TIME, raw_text).unwrap_or_default(),
        ),
        coordinates: capture(&patterns::ADARRZ_COORD, raw_text).and_then(coordinate::parse_compact),
    }
}

/// `HHMM` time carried by the Nth dashed line of an SHR block.
///
/// SHR bodies list position-sorted lines of the form `-XXXX0800 …`; the
/// first such line carries the planned departure time and the third the
/// planned arrival time.
fn dashed_line_time(raw_text: &str, ordinal: usize) -> String {
    let mut dashed = 0;
    for line in raw_text.lines() {
        let line = line.trim();
        if !line.starts_with('-') {
            continue;
        }
        dashed += 1;
        if dashed == ordinal {
            return capture(&patterns::FIELD_LINE, line)
                .map(str::to_owned)
                .unwrap_or_default();
        }
    }
    String::new()
}

fn derive_search(shr: &ShrBlock, dep: &DepBlock, arr: &ArrBlock) -> SearchFields {
    let departed = dep
        .date_time
        .or_else(|| datetime::parse_instant(&shr.date, &shr.time_dep));
    let mut arrived = arr
        .date_time
        .or_else(|| datetime::parse_instant(&shr.date, &shr.time_arr));

    if let (Some(departure), Some(arrival)) = (departed, arrived) {
        if arrival < departure {
            arrived = None;
        }
    }

    SearchFields {
        date_time: departed.or(arrived),
        arr_datetime: arrived,
    }
}
