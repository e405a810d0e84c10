#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpaint::*;

fuzz_target!(|data: &[u8]| {
    // If a file decodes to a valid canvas, re-encoding and decoding again must
    // reproduce the same document
    let Ok(doc) = decode(data) else {
        return;
    };
    if doc.validate().is_err() {
        return;
    }
    // Text outside the single-byte range or over the headroom is rejected, not truncated
    let Ok(reencoded) = EncodeRequest::new().with_headroom(1 << 20).encode_document(&doc) else {
        return;
    };
    let Ok(doc2) = decode(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(doc.pixels, doc2.pixels, "roundtrip pixel mismatch");
    assert_eq!(doc.geometry(), doc2.geometry());
    assert_eq!(doc.author, doc2.author);
    assert_eq!(doc.title, doc2.title);
    assert_eq!(doc.version, doc2.version);
});
