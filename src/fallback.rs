//! Synthetic `Etc/GMT±N` results for points with no polygon coverage.
//!
//! Oceans, the poles, and the antimeridian are not covered by boundary
//! polygons; queries there resolve to nautical timezones derived from
//! longitude alone. The identifiers use POSIX-style signs, opposite to
//! common UTC-offset notation: longitudes east of Greenwich (positive
//! offset from UTC) map to `Etc/GMT-N`.

/// All identifiers this resolver can produce, indexed by `n + 12` where
/// `n` ranges over `-12..=12`.
const GMT_IDS: [&str; 25] = [
    "Etc/GMT+12",
    "Etc/GMT+11",
    "Etc/GMT+10",
    "Etc/GMT+9",
    "Etc/GMT+8",
    "Etc/GMT+7",
    "Etc/GMT+6",
    "Etc/GMT+5",
    "Etc/GMT+4",
    "Etc/GMT+3",
    "Etc/GMT+2",
    "Etc/GMT+1",
    "Etc/GMT",
    "Etc/GMT-1",
    "Etc/GMT-2",
    "Etc/GMT-3",
    "Etc/GMT-4",
    "Etc/GMT-5",
    "Etc/GMT-6",
    "Etc/GMT-7",
    "Etc/GMT-8",
    "Etc/GMT-9",
    "Etc/GMT-10",
    "Etc/GMT-11",
    "Etc/GMT-12",
];

/// The 25 identifiers returned for the north pole, in fixed order.
const POLAR_IDS: [&str; 25] = [
    "Etc/GMT",
    "Etc/GMT+1",
    "Etc/GMT+2",
    "Etc/GMT+3",
    "Etc/GMT+4",
    "Etc/GMT+5",
    "Etc/GMT+6",
    "Etc/GMT+7",
    "Etc/GMT+8",
    "Etc/GMT+9",
    "Etc/GMT+10",
    "Etc/GMT+11",
    "Etc/GMT+12",
    "Etc/GMT-1",
    "Etc/GMT-2",
    "Etc/GMT-3",
    "Etc/GMT-4",
    "Etc/GMT-5",
    "Etc/GMT-6",
    "Etc/GMT-7",
    "Etc/GMT-8",
    "Etc/GMT-9",
    "Etc/GMT-10",
    "Etc/GMT-11",
    "Etc/GMT-12",
];

/// Both sides of the antimeridian.
const DATELINE_IDS: [&str; 2] = ["Etc/GMT+12", "Etc/GMT-12"];

/// Resolve `(lat, lon)` to nautical identifiers. Rules in order:
///
/// 1. `lat == 90` exactly: every nautical zone meets at the pole.
/// 2. `lon == ±180` exactly: both dateline zones.
/// 3. Otherwise the zone(s) whose 15°-wide band contains `lon`; band-edge
///    longitudes belong to both neighbors, so the result has 1 or 2 entries.
pub fn resolve(lat: f64, lon: f64) -> Vec<&'static str> {
    if lat == 90.0 {
        return POLAR_IDS.to_vec();
    }
    if lon == -180.0 || lon == 180.0 {
        return DATELINE_IDS.to_vec();
    }
    let n_min = (lon / 15.0 - 0.5).ceil() as i32;
    let n_max = (lon / 15.0 + 0.5).floor() as i32;
    (n_min..=n_max)
        .map(|n| GMT_IDS[(n + 12) as usize])
        .collect()
}
