use anyhow::Result;
use clap::Parser;
use placeholder_gen::placeholder_gen::{generate_placeholders, GenerateArgs, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-gen",
    about = "Generate labeled placeholder images for travel activities"
)]
struct Args {
    /// Output directory. The default is relative to the current working directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Preferred TrueType font. System fonts and the built-in font are used when it can't be loaded.
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Also write images.json describing the generated images
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    generate_placeholders(GenerateArgs {
        output: args.output,
        font: args.font,
        manifest: args.manifest,
    })
}
