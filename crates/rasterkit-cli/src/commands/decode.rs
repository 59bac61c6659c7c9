//! Decode command
//!
//! Builds a pixel buffer from a component stream and prints it row by row.

use crate::DecodeArgs;
use anyhow::{Context, Result};
use rasterkit_core::{Pixel, PixelBuffer};
use tracing::{debug, info, trace};

pub fn run(args: DecodeArgs) -> Result<()> {
    let format = match (&args.format, &args.channels) {
        (_, Some(list)) => super::parse_channels(list)?,
        (Some(name), None) => super::lookup_format(name)?,
        (None, None) => anyhow::bail!("Specify --format or --channels"),
    };
    debug!(%format, values = args.values.len(), "decoding");

    let stream = super::parse_stream(&format, &args.values)?;
    trace!(?stream, "parsed component stream");

    let buffer = PixelBuffer::from_components(format, &stream, args.width, args.height)
        .with_context(|| format!("Failed to build {}x{} buffer", args.width, args.height))?;
    info!(
        width = buffer.width(),
        height = buffer.height(),
        pixels = buffer.pixel_count(),
        "decoded"
    );

    println!("{}", header(&buffer));
    for (y, row) in buffer.rows().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            println!("({}, {}) {}", x, y, describe(pixel, args.normalized));
        }
    }
    Ok(())
}

/// Format and resolution summary printed above the pixels.
fn header(buffer: &PixelBuffer) -> String {
    format!(
        "Format:     {}\nResolution: {}x{}",
        buffer.pixel_format(),
        buffer.width(),
        buffer.height()
    )
}

/// One-line pixel description, optionally with normalized fractions.
fn describe(pixel: &Pixel, normalized: bool) -> String {
    if !normalized {
        return pixel.to_string();
    }
    let parts: Vec<String> = pixel
        .components()
        .iter()
        .map(|c| format!("{} ({:.6})", c, c.normalized_value()))
        .collect();
    format!("{{{}}} bits={}", parts.join(", "), pixel.bit_depth())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::{Channel, ChannelName, ComponentValue, PixelFormat, known};

    #[test]
    fn test_header() {
        let stream: Vec<ComponentValue> = [1u8, 2, 3].map(ComponentValue::from).to_vec();
        let buffer = PixelBuffer::from_components(known::RGB8, &stream, 1, 1).unwrap();
        assert_eq!(
            header(&buffer),
            "Format:     interleaved [r:u8, g:u8, b:u8]\nResolution: 1x1"
        );
    }

    #[test]
    fn test_describe_oversized_widths() {
        let format = PixelFormat::interleaved(vec![
            Channel::unsigned(ChannelName::Red, u32::MAX),
            Channel::unsigned(ChannelName::Green, 1),
        ]);
        let stream = [ComponentValue::U64(1), ComponentValue::U64(1)];
        let pixel = format.pixel_from(&stream).unwrap();
        let line = describe(&pixel, true);
        assert!(line.ends_with(" bits=4294967296"), "{line}");
        assert_eq!(describe(&pixel, false), "{r=1, g=1}");
    }
}
