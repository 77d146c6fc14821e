//! Show one color in every notation

use crate::InspectArgs;
use anyhow::Result;
use devdex_color::{format, Color, Converter, Notation, Side};
use serde::Serialize;
use std::collections::BTreeMap;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    notation: Notation,
    color: &'a Color,
    formats: BTreeMap<Notation, String>,
}

pub fn run(args: InspectArgs, _verbose: u8) -> Result<()> {
    trace!(value = %args.value, from = %args.from, "inspect::run");

    let notation = Converter::resolve(&args.from, Side::Input)?;
    let color = super::converter(args.legacy_hwb).parse(&args.value, notation)?;
    let formats = format::format_all(&color);

    if args.json {
        let report = Report {
            input: &args.value,
            notation,
            color: &color,
            formats: formats.into_iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (n, text) in formats {
            println!("{:<5} {}", n, text);
        }
    }

    Ok(())
}
