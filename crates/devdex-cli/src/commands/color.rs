//! Single color conversion command

use crate::ColorArgs;
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: ColorArgs, verbose: u8) -> Result<()> {
    trace!(value = %args.value, from = %args.from, to = %args.to, "color::run");

    let converter = super::converter(args.legacy_hwb);
    let output = converter.convert(&args.value, &args.from, &args.to)?;

    info!(input = %args.value, output = %output, "converted {} -> {}", args.from, args.to);
    if verbose > 0 {
        println!("{} ({}) -> {} ({})", args.value, args.from, output, args.to);
    } else {
        println!("{}", output);
    }

    Ok(())
}
