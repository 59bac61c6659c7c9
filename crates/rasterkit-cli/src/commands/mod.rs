//! CLI command implementations

pub mod decode;
pub mod formats;
pub mod resolve;

use anyhow::{Context, Result, bail};
use half::f16;
use rasterkit_core::{Channel, ComponentValue, PixelFormat, StorageKind, known};

/// Resolve a well-known format name.
pub fn lookup_format(name: &str) -> Result<PixelFormat> {
    match known::lookup(name) {
        Some(format) => Ok(format),
        None => bail!("Unknown format '{}'. Run `rasterkit formats` for the list", name),
    }
}

/// Parse a comma-separated channel list such as "r:u8,g:u8,b:u8".
pub fn parse_channels(list: &str) -> Result<PixelFormat> {
    let channels = list
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            Channel::parse(s).with_context(|| {
                format!("Invalid channel '{}', expected <name>:<u|i|f><bits>", s.trim())
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if channels.is_empty() {
        bail!("Channel list is empty");
    }
    Ok(PixelFormat::interleaved(channels))
}

/// Parse a raw value as the given storage kind.
pub fn parse_value(kind: StorageKind, s: &str) -> Result<ComponentValue> {
    let s = s.trim();
    let value = match kind {
        StorageKind::U8 => s.parse::<u8>().map(ComponentValue::from).ok(),
        StorageKind::U16 => s.parse::<u16>().map(ComponentValue::from).ok(),
        StorageKind::U32 => s.parse::<u32>().map(ComponentValue::from).ok(),
        StorageKind::U64 => s.parse::<u64>().map(ComponentValue::from).ok(),
        StorageKind::I8 => s.parse::<i8>().map(ComponentValue::from).ok(),
        StorageKind::I16 => s.parse::<i16>().map(ComponentValue::from).ok(),
        StorageKind::I32 => s.parse::<i32>().map(ComponentValue::from).ok(),
        StorageKind::I64 => s.parse::<i64>().map(ComponentValue::from).ok(),
        StorageKind::F16 => s.parse::<f32>().map(|v| f16::from_f32(v).into()).ok(),
        StorageKind::F32 => s.parse::<f32>().map(ComponentValue::from).ok(),
        StorageKind::F64 => s.parse::<f64>().map(ComponentValue::from).ok(),
    };
    value.with_context(|| format!("'{}' is not a valid {} value", s, kind))
}

/// Parse a flat value list, giving each value the storage kind of the
/// channel it lands on.
pub fn parse_stream(format: &PixelFormat, values: &[String]) -> Result<Vec<ComponentValue>> {
    let channels = format.channels();
    if channels.is_empty() {
        bail!("Format {} has no channels to parse values for", format);
    }
    values
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let channel = channels[i % channels.len()];
            parse_value(channel.storage_type(), raw)
                .with_context(|| format!("Value #{} ({} channel)", i, channel.name))
        })
        .collect()
}
