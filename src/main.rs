//! QSWE schematic maker CLI.
//!
//! Usage: qswe-maker <COMMAND> [ARGS]
//!
//! Commands:
//!   sizes <x> <z>              Suggest valid world eater sizes
//!   height <start> [end]       Suggest the build height (end defaults to -59)
//!   schem <x> <z> [OPTIONS]    Generate the schematic
//!
//! Options for schem:
//!   --templates <PATH>   Template library file (default: SM.litematic)
//!   --out <DIR>          Output directory (default: current directory)

use std::path::Path;

use qswe_maker::core::{logging, Error};
use qswe_maker::generation::{
    build_height, describe_adjustment, normalize, WorldEaterAssembler,
};
use qswe_maker::schematic::sink::{load_schematic, JsonSink, SchematicSink};
use qswe_maker::templates::TemplateSet;

/// End elevation used when none is given (bottom of the overworld)
const DEFAULT_END_Y: i32 = -59;

const DEFAULT_TEMPLATES: &str = "SM.litematic";

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Error> {
    match args.first().map(String::as_str) {
        Some("sizes") => sizes(&args[1..]),
        Some("height") => height(&args[1..]),
        Some("schem") => schem(&args[1..]),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn sizes(args: &[String]) -> Result<(), Error> {
    let x = parse_int(args, 0, "x")?;
    let z = parse_int(args, 1, "z")?;

    let normalized = normalize(x, z);
    println!(
        "Suggested sizes: {}",
        describe_adjustment((x, z), normalized)
    );
    Ok(())
}

fn height(args: &[String]) -> Result<(), Error> {
    let start = parse_int(args, 0, "start")?;
    let end = match args.get(1) {
        Some(_) => parse_int(args, 1, "end")?,
        None => DEFAULT_END_Y,
    };

    println!("Right height: Y={}", build_height(start, end));
    Ok(())
}

fn schem(args: &[String]) -> Result<(), Error> {
    let x = parse_int(args, 0, "x")?;
    let z = parse_int(args, 1, "z")?;
    let templates_path =
        parse_str_arg(args, "--templates").unwrap_or_else(|| DEFAULT_TEMPLATES.to_string());
    let out_dir = parse_str_arg(args, "--out").unwrap_or_else(|| ".".to_string());

    let (size_x, size_z) = normalize(x, z);
    if (size_x, size_z) != (x, z) {
        log::info!(
            "Requested {x}x{z} adjusted to {}",
            describe_adjustment((x, z), (size_x, size_z))
        );
    }

    let library = load_schematic(Path::new(&templates_path))?;
    let templates = TemplateSet::from_schematic(library)?;
    let assembler = WorldEaterAssembler::new(templates);

    println!("Making the schematic...");
    let schematic = assembler.assemble(size_x, size_z)?;
    let path = JsonSink::new(out_dir).persist(&schematic)?;
    println!("Done! Wrote {}", path.display());
    Ok(())
}

fn print_usage() {
    println!("QSWE Schematic Maker");
    println!();
    println!("Usage: qswe-maker <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  sizes <x> <z>             Suggest valid world eater sizes");
    println!("  height <start> [end]      Suggest the build height (end defaults to {DEFAULT_END_Y})");
    println!("  schem <x> <z>             Generate the schematic");
    println!();
    println!("Options for schem:");
    println!("  --templates <PATH>        Template library file (default: {DEFAULT_TEMPLATES})");
    println!("  --out <DIR>               Output directory (default: .)");
}

fn parse_int(args: &[String], index: usize, name: &str) -> Result<i32, Error> {
    let raw = args
        .get(index)
        .ok_or_else(|| Error::InvalidInput(format!("missing argument <{name}>")))?;
    raw.parse()
        .map_err(|_| Error::InvalidInput(format!("<{name}> must be an integer, got '{raw}'")))
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
