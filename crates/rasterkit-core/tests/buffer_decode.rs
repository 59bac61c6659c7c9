//! Integration tests for format-driven decoding and buffer construction.

use approx::assert_abs_diff_eq;
use half::f16;
use rasterkit_core::prelude::*;

fn u8_stream(values: &[u8]) -> Vec<ComponentValue> {
    values.iter().copied().map(ComponentValue::from).collect()
}

fn gray_pixels(count: usize) -> Vec<Pixel> {
    (0..count)
        .map(|i| {
            Pixel::new(vec![Component::new(
                Channel::unsigned(ChannelName::Luminance, 8),
                i as u8,
            )])
        })
        .collect()
}

#[test]
fn direct_constructor_succeeds_iff_area_matches() {
    for count in 0..8usize {
        for w in 0..4u32 {
            for h in 0..4u32 {
                let result = PixelBuffer::new(gray_pixels(count), w, h);
                let area = (w * h) as usize;
                if count == area {
                    let buffer = result.unwrap();
                    assert_eq!(buffer.pixel_count(), area);
                    assert!(buffer.pixel_format().is_undefined());
                } else {
                    assert_eq!(
                        result.unwrap_err(),
                        Error::MismatchedBufferSize {
                            expected: count,
                            actual: area
                        }
                    );
                }
            }
        }
    }
}

#[test]
fn four_pixels_into_two_by_three_fails() {
    let err = PixelBuffer::new(gray_pixels(4), 2, 3).unwrap_err();
    assert_eq!(
        err,
        Error::MismatchedBufferSize {
            expected: 4,
            actual: 6
        }
    );
}

#[test]
fn pixel_from_succeeds_iff_enough_components() {
    let format = known::RGBA8;
    let cpp = format.components_per_pixel();
    for len in 0..10 {
        let values: Vec<u8> = (0..len as u8).collect();
        match format.pixel_from(&u8_stream(&values)) {
            Ok(pixel) => {
                assert!(len >= cpp);
                let got: Vec<_> = pixel.components().iter().map(|c| c.value).collect();
                assert_eq!(got, u8_stream(&values[..cpp]));
            }
            Err(err) => {
                assert!(len < cpp);
                assert_eq!(err, Error::InsufficientComponents { expected: cpp, actual: len });
            }
        }
    }
}

#[test]
fn decoding_n_pixels_preserves_channel_order() {
    for (name, format) in known::all() {
        let cpp = format.components_per_pixel();
        for n in 0..5usize {
            let values: Vec<u8> = (0..(n * cpp) as u8).collect();
            let buffer =
                PixelBuffer::from_components(format.clone(), &u8_stream(&values), n as u32, 1)
                    .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(buffer.pixel_count(), n, "{name}");

            for (i, pixel) in buffer.pixels().iter().enumerate() {
                assert_eq!(pixel.len(), cpp, "{name}");
                for (j, component) in pixel.components().iter().enumerate() {
                    assert_eq!(component.channel, format.channels()[j], "{name}");
                    assert_eq!(component.value, ComponentValue::U8((i * cpp + j) as u8));
                }
            }
        }
    }
}

#[test]
fn rgb8_two_pixel_scenario() {
    let format = PixelFormat::interleaved(vec![
        Channel::unsigned(ChannelName::Red, 8),
        Channel::unsigned(ChannelName::Green, 8),
        Channel::unsigned(ChannelName::Blue, 8),
    ]);
    let buffer =
        PixelBuffer::from_components(format, &u8_stream(&[10, 20, 30, 40, 50, 60]), 2, 1).unwrap();

    let expect = [(10, 20, 30), (40, 50, 60)];
    for (x, (r, g, b)) in expect.into_iter().enumerate() {
        let pixel = buffer.pixel(x as u32, 0).unwrap();
        assert_eq!(pixel.red().unwrap().value, ComponentValue::U8(r));
        assert_eq!(pixel.green().unwrap().value, ComponentValue::U8(g));
        assert_eq!(pixel.blue().unwrap().value, ComponentValue::U8(b));
        assert!(pixel.alpha().is_none());
    }
}

#[test]
fn trailing_partial_pixel_fails_decode() {
    let stream = u8_stream(&[1, 2, 3, 4, 5]);

    // A single decode only looks at the first pixel's worth
    let pixel = known::RGBA8.pixel_from(&stream).unwrap();
    assert_eq!(pixel.len(), 4);

    // The buffer loop reaches the lone fifth value and stops there
    let err = PixelBuffer::from_components(known::RGBA8, &stream, 1, 1).unwrap_err();
    assert_eq!(
        err,
        Error::InsufficientComponents {
            expected: 4,
            actual: 1
        }
    );
}

#[test]
fn decoded_count_must_match_area() {
    let stream = u8_stream(&[0; 12]);
    assert!(PixelBuffer::from_components(known::RGB8, &stream, 2, 2).is_ok());
    assert!(PixelBuffer::from_components(known::RGB8, &stream, 4, 1).is_ok());
    assert_eq!(
        PixelBuffer::from_components(known::RGB8, &stream, 3, 3).unwrap_err(),
        Error::MismatchedBufferSize {
            expected: 4,
            actual: 9
        }
    );
}

#[test]
fn normalization_boundaries() {
    assert_eq!(ComponentValue::U8(255).normalized(), 1.0);
    assert_eq!(ComponentValue::U8(0).normalized(), 0.0);
    assert_eq!(ComponentValue::U16(65535).normalized(), 1.0);
}

#[test]
fn packed_ten_bit_values_normalize_against_their_own_kind() {
    // 10-bit channels resolve to u16 storage, so a full-scale 10-bit value
    // supplied as u16 is a small fraction of u16::MAX.
    let stream: Vec<ComponentValue> = [1023u16, 512, 0]
        .into_iter()
        .map(ComponentValue::from)
        .chain([ComponentValue::U8(3)])
        .collect();
    let buffer = PixelBuffer::from_components(known::RGB10A2, &stream, 1, 1).unwrap();
    let pixel = &buffer.pixels()[0];

    assert_eq!(pixel.bit_depth(), 32);
    assert!(pixel.components().iter().all(Component::is_native));
    assert_abs_diff_eq!(
        pixel.red().unwrap().normalized_value(),
        1023.0 / 65535.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        pixel.alpha().unwrap().normalized_value(),
        3.0 / 255.0,
        epsilon = 1e-12
    );
}

#[test]
fn half_float_stream() {
    let stream: Vec<ComponentValue> = [0.0f32, 65504.0, 1.0, 65504.0]
        .into_iter()
        .map(|v| ComponentValue::from(f16::from_f32(v)))
        .collect();
    let buffer = PixelBuffer::from_components(known::RGBA16F, &stream, 1, 1).unwrap();
    let [r, g, b, a] = buffer.pixels()[0].display_rgba();
    assert_eq!(r, 0.0);
    assert_eq!(g, 1.0);
    assert_abs_diff_eq!(b, 1.0 / 65504.0, epsilon = 1e-12);
    assert_eq!(a, 1.0);
}

#[test]
fn mixed_kinds_are_not_coerced() {
    let stream = vec![
        ComponentValue::I16(-32767),
        ComponentValue::F64(0.5),
        ComponentValue::U32(7),
    ];
    let buffer = PixelBuffer::from_components(known::RGB8, &stream, 1, 1).unwrap();
    let pixel = &buffer.pixels()[0];
    let kinds: Vec<_> = pixel.components().iter().map(Component::value_kind).collect();
    assert_eq!(kinds, [StorageKind::I16, StorageKind::F64, StorageKind::U32]);
    assert!(pixel.components().iter().all(|c| !c.is_native()));
    assert_eq!(pixel.red().unwrap().normalized_value(), -1.0);
}

#[test]
fn planar_is_distinguishable_from_undefined() {
    let stream = u8_stream(&[1, 2, 3]);
    let planar = PixelBuffer::from_components(PixelFormat::Planar(Planar), &stream, 1, 1);
    let undefined = PixelBuffer::from_components(PixelFormat::Undefined, &stream, 1, 1);
    assert_eq!(planar.unwrap_err(), Error::UndecodableFormat { format: "planar" });
    assert_eq!(undefined.unwrap_err(), Error::UndecodableFormat { format: "undefined" });
}

#[test]
fn buffers_are_shareable_across_threads() {
    let buffer = PixelBuffer::from_components(known::RGB8, &u8_stream(&[1, 2, 3]), 1, 1).unwrap();
    let shared = std::sync::Arc::new(buffer);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || shared.pixel(0, 0).map(Pixel::bit_depth))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(24));
    }
}

#[test]
fn oversized_channel_widths_decode_and_sum_without_overflow() {
    let format = PixelFormat::interleaved(vec![
        Channel::unsigned(ChannelName::Red, u32::MAX),
        Channel::unsigned(ChannelName::Green, u32::MAX),
    ]);
    assert_eq!(format.bits_per_pixel(), 2 * u64::from(u32::MAX));
    assert!(
        format
            .channels()
            .iter()
            .all(|c| c.storage_type() == StorageKind::U64)
    );

    let stream: Vec<ComponentValue> = [u64::MAX, 0, 1, 2]
        .into_iter()
        .map(ComponentValue::from)
        .collect();
    let buffer = PixelBuffer::from_components(format, &stream, 2, 1).unwrap();
    assert_eq!(buffer.pixel_count(), 2);
    for pixel in buffer.pixels() {
        assert_eq!(pixel.bit_depth(), 2 * u64::from(u32::MAX));
        assert!(pixel.components().iter().all(Component::is_native));
    }
    assert_eq!(buffer.pixel(0, 0).unwrap().red().unwrap().normalized_value(), 1.0);
}
