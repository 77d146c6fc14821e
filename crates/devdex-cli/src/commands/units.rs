//! Physical unit and data size conversion commands

use crate::UnitsArgs;
use anyhow::Result;
use devdex_units::data::{self, System};
use devdex_units::physical;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run_physical(args: UnitsArgs, verbose: u8) -> Result<()> {
    trace!(value = args.value, from = %args.from, to = %args.to, "units::run_physical");
    let result = physical::convert(args.value, &args.from, &args.to)?;
    print_result(&args, result, verbose, None);
    Ok(())
}

pub fn run_data(args: UnitsArgs, verbose: u8) -> Result<()> {
    trace!(value = args.value, from = %args.from, to = %args.to, "units::run_data");
    let result = data::convert(args.value, &args.from, &args.to)?;
    let note = system_note(&args.from, &args.to);
    if let Some(note) = &note {
        debug!(note = %note, "converting across prefix systems");
    }
    print_result(&args, result, verbose, note.as_deref());
    Ok(())
}

/// Describes a decimal/binary prefix crossing, if any.
fn system_note(from: &str, to: &str) -> Option<String> {
    let name = |s: System| match s {
        System::Decimal => "decimal",
        System::Binary => "binary",
    };
    match (data::system(from), data::system(to)) {
        (Some(a), Some(b)) if a != b => Some(format!("{} -> {}", name(a), name(b))),
        _ => None,
    }
}

fn print_result(args: &UnitsArgs, result: f64, verbose: u8, note: Option<&str>) {
    match (verbose > 0, note) {
        (true, Some(note)) => {
            println!("{} {} = {} {} ({})", args.value, args.from, result, args.to, note)
        }
        (true, None) => println!("{} {} = {} {}", args.value, args.from, result, args.to),
        (false, _) => println!("{}", result),
    }
}
