#![no_main]

use libfuzzer_sys::fuzz_target;
use lltz::IndexReader;

// First 16 bytes seed the query point; the rest is the candidate index.
fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let lat = f64::from_le_bytes(data[0..8].try_into().unwrap());
    let lon = f64::from_le_bytes(data[8..16].try_into().unwrap());
    if let Ok(reader) = IndexReader::open(&data[16..]) {
        let _ = reader.lookup(lat, lon);
        // A few fixed probes reach paths the seeded point may miss.
        let _ = reader.lookup(90.0, 180.0);
        let _ = reader.lookup(0.0, 0.0);
        let _ = reader.lookup(-45.0, -140.0);
    }
});
