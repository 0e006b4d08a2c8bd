use clap::Parser;
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Amount to render, in the unit given by --unit
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// (optional) Unit of the value: b, kb, mb, gb, tb or the full word
    #[arg(short = 'u', long = "unit", default_value = "bytes")]
    pub unit: String,

    /// (optional) Pattern to render with, e.g. ",fff UU" or "'Size: 'f uuu"
    #[arg(short = 'p', long = "pattern", default_value = ",fff UU")]
    pub pattern: String,

    /// (optional) Number style: invariant, en, de, fr or ch
    #[arg(short = 'l', long = "locale", default_value = "invariant")]
    pub locale: String,

    /// (optional) Use the short rendering, e.g. "2 MB"
    #[arg(long, conflicts_with_all = ["long", "pattern"])]
    pub short: bool,

    /// (optional) Use the long rendering, e.g. "2.40 Megabytes"
    #[arg(long, conflicts_with = "pattern")]
    pub long: bool,

    #[arg(short, long)]
    pub verbose: bool,
}
