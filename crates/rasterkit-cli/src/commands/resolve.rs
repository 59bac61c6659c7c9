//! Resolve command
//!
//! Prints the storage kind a binary form resolves to.

use crate::{Family, ResolveArgs};
use anyhow::Result;
use rasterkit_core::BinaryForm;
use tracing::debug;

pub fn run(args: ResolveArgs) -> Result<()> {
    let form = match args.family {
        Family::Uint => BinaryForm::UnsignedInteger(args.bits),
        Family::Int => BinaryForm::SignedInteger(args.bits),
        Family::Float => BinaryForm::FloatingPoint(args.bits),
    };
    let kind = form.storage_type();
    debug!(%form, %kind, "resolved");

    if args.bits == 0 || args.bits > kind.bits() {
        println!("{} -> {} (widest available)", form, kind);
    } else {
        println!("{} -> {}", form, kind);
    }
    Ok(())
}
