use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
pub struct Input {
    /// Read from file, standard input when omitted
    #[structopt(parse(from_os_str))]
    pub file: Option<PathBuf>,
}

#[derive(StructOpt, Debug)]
pub struct Summary {
    /// Print summaries as JSON
    #[structopt(short, long)]
    pub json: bool,

    #[structopt(flatten)]
    pub input: Input,
}
