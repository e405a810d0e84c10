use zenpaint::*;

fn gradient(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 4;
            pixels[off] = (x * 8) as u8;
            pixels[off + 1] = (y * 8) as u8;
            pixels[off + 2] = ((x + y) * 4) as u8;
            pixels[off + 3] = 255;
        }
    }
    pixels
}

#[test]
fn document_roundtrip_preserves_fields() {
    let doc = PaintDocument {
        canvas_type: Some(CanvasType::Large),
        generation: 1,
        version: 4,
        pixels: (0..1024).map(|i| pack_rgb(i as u8, (i >> 2) as u8, 7)).collect(),
        author: "Ada".into(),
        name: "zenpaint_1700000000".into(),
        title: "Sunset over the bay".into(),
    };

    let encoded = encode(&doc).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.canvas_type, doc.canvas_type);
    assert_eq!(decoded.pixels, doc.pixels);
    assert_eq!(decoded.author, doc.author);
    assert_eq!(decoded.title, doc.title);
    assert_eq!(decoded.version, doc.version);
    assert_eq!(decoded, doc);
}

#[test]
fn unrecognized_canvas_type_roundtrips() {
    let doc = PaintDocument {
        canvas_type: Some(CanvasType::Other(99)),
        pixels: vec![-1; 256],
        ..Default::default()
    };
    let decoded = decode(&encode(&doc).unwrap()).unwrap();
    assert_eq!(decoded.canvas_type, Some(CanvasType::Other(99)));
    assert_eq!(decoded.geometry(), Geometry::new(16, 16));
}

#[test]
fn huge_headroom_is_an_error_not_a_panic() {
    let doc = PaintDocument {
        canvas_type: Some(CanvasType::Small),
        pixels: vec![-1; 256],
        ..Default::default()
    };
    let err = EncodeRequest::new()
        .with_headroom(usize::MAX)
        .encode_document(&doc)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Limit);
    assert!(EncodeRequest::new().with_headroom(1 << 40).encode_document(&doc).is_ok());
}

#[test]
fn every_canvas_type_roundtrips() {
    for (ct, w, h) in [
        (CanvasType::Small, 16, 16),
        (CanvasType::Large, 32, 32),
        (CanvasType::Long, 32, 16),
        (CanvasType::Tall, 16, 32),
    ] {
        let doc = PaintDocument {
            canvas_type: Some(ct),
            pixels: vec![pack_rgb(1, 2, 3); w * h],
            ..Default::default()
        };
        let decoded = decode(&encode(&doc).unwrap()).unwrap();
        assert_eq!(decoded.canvas_type, Some(ct));
        assert_eq!(decoded.geometry(), Geometry::new(w as u32, h as u32));
    }
}

#[test]
fn rgba_roundtrip_forces_opaque_alpha() {
    let mut pixels = gradient(16, 32);
    // Alpha is not stored; translucent input comes back opaque.
    pixels[3] = 10;

    let encoded = EncodeRequest::new()
        .with_author("ann")
        .with_title("tower")
        .with_timestamp(42)
        .encode(&pixels, 16, 32, PixelLayout::Rgba8)
        .unwrap();

    let decoded = decode_rgba(&encoded).unwrap();
    assert_eq!(decoded.width, 16);
    assert_eq!(decoded.height, 32);
    assert_eq!(decoded.layout, PixelLayout::Rgba8);
    assert_eq!(decoded.canvas_type, Some(CanvasType::Tall));
    assert_eq!(decoded.document.name, "zenpaint_42");
    assert_eq!(decoded.document.author, "ann");

    pixels[3] = 255;
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn bgr_input_matches_rgb_input() {
    let rgb: Vec<u8> = (0..256 * 3).map(|i| (i % 251) as u8).collect();
    let bgr: Vec<u8> = rgb
        .chunks_exact(3)
        .flat_map(|p| [p[2], p[1], p[0]])
        .collect();
    let req = EncodeRequest::new().with_timestamp(0);
    assert_eq!(
        req.encode(&rgb, 16, 16, PixelLayout::Rgb8).unwrap(),
        req.encode(&bgr, 16, 16, PixelLayout::Bgr8).unwrap()
    );
}

#[test]
fn encode_rejects_mismatched_pixel_count() {
    let doc = PaintDocument {
        canvas_type: Some(CanvasType::Small),
        pixels: vec![-1; 255],
        ..Default::default()
    };
    let err = encode(&doc).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(matches!(
        err,
        PaintError::GeometryMismatch {
            expected: 256,
            actual: 255,
            ..
        }
    ));
}

#[test]
fn encode_rejects_unsupported_pixel_count() {
    let doc = PaintDocument {
        pixels: vec![-1; 2048],
        ..Default::default()
    };
    let err = encode(&doc).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn minimal_stream_decodes_then_fails_validation() {
    let data = [
        10, 0, 0, // root
        1, 0, 2, b'c', b't', 0, // ct = Byte(0)
        11, 0, 6, b'p', b'i', b'x', b'e', b'l', b's', 0, 0, 0, 2, // pixels, 2 ints
        0xFF, 0, 0, 0, // -16777216
        0xFF, 0xFF, 0xFF, 0xFF, // -1
        0, // end
    ];
    let doc = decode(&data).unwrap();
    assert_eq!(doc.canvas_type, Some(CanvasType::Small));
    assert_eq!(doc.pixels, vec![-16_777_216, -1]);
    assert_eq!(unpack_rgb(doc.pixels[0]), (0, 0, 0));
    assert_eq!(unpack_rgb(doc.pixels[1]), (255, 255, 255));

    let err = doc.validate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(matches!(decode_rgba(&data), Err(PaintError::GeometryMismatch { .. })));
}

#[test]
fn wrong_root_is_format_error() {
    let err = decode(&[1, 0, 0, 0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn unknown_tag_is_format_error() {
    let data = [10, 0, 0, 6, 0, 1, b'x', 0, 0, 0, 0, 0, 0, 0, 0, 0];
    let err = decode(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, PaintError::UnknownTag { tag: 6, offset: 3, .. }));
}

#[test]
fn limits_reject_large() {
    let pixels = gradient(32, 32);
    let encoded = EncodeRequest::new()
        .encode(&pixels, 32, 32, PixelLayout::Rgba8)
        .unwrap();

    let limits = Limits {
        max_pixels: Some(256),
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode();
    match result.unwrap_err() {
        PaintError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let result = EncodeRequest::new()
        .with_limits(&limits)
        .encode(&pixels, 32, 32, PixelLayout::Rgba8);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Limit);
}

#[test]
fn text_limit_applies_to_decode() {
    let encoded = EncodeRequest::new()
        .with_author("a fairly long author name")
        .encode(&gradient(16, 16), 16, 16, PixelLayout::Rgba8)
        .unwrap();
    let limits = Limits {
        max_text_len: Some(20),
        ..Default::default()
    };
    assert!(DecodeRequest::new(&encoded).with_limits(&limits).decode().is_err());
}

#[test]
fn oversized_metadata_is_capacity_error() {
    let doc = PaintDocument {
        canvas_type: Some(CanvasType::Small),
        pixels: vec![-1; 256],
        title: "t".repeat(1000),
        ..Default::default()
    };
    let err = encode(&doc).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);

    let encoded = EncodeRequest::new()
        .with_headroom(2048)
        .encode_document(&doc)
        .unwrap();
    assert_eq!(decode(&encoded).unwrap().title.len(), 1000);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_roundtrip() {
    use rgb::RGBA8;

    let pixels: Vec<RGBA8> = (0..512)
        .map(|i| RGBA8::new(i as u8, 0, (i / 2) as u8, 255))
        .collect();
    let img = imgref::ImgVec::new(pixels.clone(), 32, 16);
    let encoded = EncodeRequest::new().encode_img(img.as_ref()).unwrap();

    let decoded = decode_rgba(&encoded).unwrap();
    assert_eq!(decoded.as_pixels(), &pixels[..]);
    let view = decoded.as_imgref();
    assert_eq!((view.width(), view.height()), (32, 16));
    assert_eq!(decoded.to_imgvec().buf(), &pixels);
}
