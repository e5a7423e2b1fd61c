extern crate log;
extern crate pretty_env_logger;

use structopt::StructOpt;

use tldr::{
    self,
    extract::ExtractOptions,
    opts::{fatal, Input, Summary},
    Result,
};

#[derive(Debug, StructOpt)]
/// Images and plain text from feed items
#[structopt(name = "tldr")]
struct Cli {
    /// Log level
    #[structopt(long, default_value = "info")]
    log_level: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// Print the image URL for each feed item
    Image {
        #[structopt(flatten)]
        args: Input,
    },

    /// Strip tags from HTML
    Text {
        #[structopt(flatten)]
        args: Input,
    },

    /// Print title, image and text for each feed item
    Summary {
        #[structopt(flatten)]
        args: Summary,
    },
}

fn process_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Image { args } => {
            let opts = ExtractOptions {
                file: args.file,
                ..Default::default()
            };
            tldr::extract::image(opts)?;
        }
        Command::Text { args } => {
            let opts = ExtractOptions {
                file: args.file,
                ..Default::default()
            };
            tldr::extract::text(opts)?;
        }
        Command::Summary { args } => {
            let opts = ExtractOptions {
                file: args.input.file,
                json: args.json,
            };
            tldr::extract::summary(opts)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let root_args = Cli::from_args();

    if let Err(e) = tldr::opts::log_level(&*root_args.log_level) {
        return fatal(e);
    }

    if let Err(e) = process_command(root_args.cmd) {
        return fatal(e);
    }

    Ok(())
}
