//! Formats command
//!
//! Lists the well-known interleaved formats.

use crate::FormatsArgs;
use anyhow::Result;
use rasterkit_core::known;

pub fn run(args: FormatsArgs) -> Result<()> {
    println!("{:<18} {:>10} {:>11}", "NAME", "COMPONENTS", "BITS");
    for (name, format) in known::all() {
        println!(
            "{:<18} {:>10} {:>11}",
            name,
            format.components_per_pixel(),
            format.bits_per_pixel()
        );
        if args.channels {
            for channel in format.channels() {
                println!(
                    "    {:<18} {:<5} -> {}",
                    channel.name.to_string(),
                    channel.binary_form.to_string(),
                    channel.storage_type()
                );
            }
        }
    }
    Ok(())
}
