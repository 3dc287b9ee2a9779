#![no_main]

use libfuzzer_sys::fuzz_target;
use lltz::IndexReader;

fuzz_target!(|data: &[u8]| {
    let _ = IndexReader::open(data);
});
