#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn name(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u16).to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

fn paint(ct_as_int: bool, pixels_as_list: bool, width: usize, height: usize) -> Vec<u8> {
    let mut out = vec![10u8];
    name(&mut out, "");
    if ct_as_int {
        out.push(3);
        name(&mut out, "ct");
        let ct: i32 = match (width, height) {
            (16, 16) => 0,
            (32, 32) => 1,
            (32, 16) => 2,
            _ => 3,
        };
        out.extend_from_slice(&ct.to_be_bytes());
    } else {
        out.push(1);
        name(&mut out, "ct");
        out.push(0);
    }
    if pixels_as_list {
        out.push(9);
        name(&mut out, "pixels");
        out.push(3);
    } else {
        out.push(11);
        name(&mut out, "pixels");
    }
    let count = width * height;
    out.extend_from_slice(&(count as i32).to_be_bytes());
    for i in 0..count {
        let color = 0xFF00_0000u32 | (i as u32 * 0x0001_0203 & 0x00FF_FFFF);
        out.extend_from_slice(&color.to_be_bytes());
    }
    out.push(8);
    name(&mut out, "author");
    name(&mut out, "seed");
    out.push(0);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Canonical Byte ct + IntArray pixels, 16x16
    fs::write(format!("{dir}/small.paint"), paint(false, false, 16, 16)).unwrap();

    // Legacy Int ct + List<Int> pixels, 32x16 and 16x32
    fs::write(format!("{dir}/long_legacy.paint"), paint(true, true, 32, 16)).unwrap();
    fs::write(format!("{dir}/tall_legacy.paint"), paint(true, false, 16, 32)).unwrap();

    // Two-pixel file: parses, fails geometry validation
    let mut tiny = vec![10u8, 0, 0, 1, 0, 2, b'c', b't', 0, 11];
    name(&mut tiny, "pixels");
    tiny.extend_from_slice(&2i32.to_be_bytes());
    tiny.extend_from_slice(&[0xFF, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0]);
    fs::write(format!("{dir}/tiny.paint"), tiny).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_root.bin"), b"\x0a\x00\x00").unwrap();
    fs::write(format!("{dir}/bad_root.bin"), b"\x08\x00\x00\x00").unwrap();
    fs::write(format!("{dir}/nested.bin"), b"\x0a\x00\x00\x0a\x00\x01x\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
