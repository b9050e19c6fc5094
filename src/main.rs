use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;

use strmask::{Mask, MaskDirective};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mask directive: pattern[;pad[;rtl]]
    #[arg(value_name = "MASK")]
    mask: String,

    /// Inputs to format; read one per line from stdin when omitted
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Pad character, overriding the directive
    #[arg(short, long, value_name = "CHAR")]
    pad: Option<char>,

    /// Process right to left, overriding the directive
    #[arg(short, long)]
    rtl: bool,

    /// Exit with status 1 if any input fails validation
    #[arg(short, long)]
    check: bool,

    /// Do not report diagnostics on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut directive = MaskDirective::parse(&args.mask);
    if let Some(pad) = args.pad {
        directive.pad = pad;
    }
    if args.rtl {
        directive.rtl = true;
    }
    let mask = Mask::from_directive(directive);

    let inputs = if args.inputs.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?
    } else {
        args.inputs
    };

    let mut failed = false;
    for input in &inputs {
        let result = mask.apply(input);
        println!("{}", result.text);
        if !result.is_valid() {
            failed = true;
            if !args.quiet {
                for diagnostic in &result.diagnostics {
                    eprintln!("{input}: {diagnostic}");
                }
            }
        }
    }

    if args.check && failed {
        std::process::exit(1);
    }
    Ok(())
}
