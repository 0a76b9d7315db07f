use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use dietree_encoder::{ConstructionError, EncoderConfig, FixedWidth, UNIT_HEADER_SIZE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `Auto` colors only output that goes to an interactive stdout.
    pub fn should_colorize(self, to_stdout: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => to_stdout && std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

#[derive(Parser)]
#[command(name = "dietree", bin_name = "dietree")]
#[command(about = "Build, lay out and dump debugging information entry trees")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the sample compile unit as text
    #[command(after_help = r#"EXAMPLES:
  dietree dump                          # writes debug.txt
  dietree dump -o -                     # print to stdout
  dietree dump --omit .debug_abbrev     # drop a section from the dump
  dietree dump --base-offset 0 --ref-width 2"#)]
    Dump {
        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        output: DumpOutputArgs,
    },

    /// Print encoded section sizes of the sample compile unit
    #[command(after_help = r#"EXAMPLES:
  dietree sections
  dietree sections --json --abbrev-base 100"#)]
    Sections {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Print sizes as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone, Debug)]
pub struct LayoutArgs {
    /// Offset of the root entry
    #[arg(long, value_name = "N", default_value_t = UNIT_HEADER_SIZE)]
    pub base_offset: u64,

    /// Width of entry references in bytes (1, 2, 4 or 8)
    #[arg(long, value_name = "BYTES", default_value_t = 4)]
    pub ref_width: u8,

    /// Code of the first abbreviation
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub abbrev_base: u64,
}

impl LayoutArgs {
    pub fn config(&self) -> Result<EncoderConfig, ConstructionError> {
        Ok(EncoderConfig::new()
            .base_offset(self.base_offset)
            .ref_width(FixedWidth::from_bytes(self.ref_width)?)
            .abbrev_base(self.abbrev_base))
    }
}

#[derive(Args, Clone, Debug)]
pub struct DumpOutputArgs {
    /// Output file (use "-" for stdout)
    #[arg(short = 'o', long, value_name = "FILE", default_value = "debug.txt")]
    pub output: PathBuf,

    /// Omit a section from the dump (repeatable)
    #[arg(long, value_name = "SECTION")]
    pub omit: Vec<String>,

    /// Colorize output
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,

    /// Hide attribute forms
    #[arg(long)]
    pub no_forms: bool,

    /// Hide the abbreviation table
    #[arg(long)]
    pub no_abbrevs: bool,
}

impl DumpOutputArgs {
    pub fn to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
