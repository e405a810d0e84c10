#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Document and raster decode must never panic
    let _ = zenpaint::decode(data);
    let _ = zenpaint::decode_rgba(data);
});
