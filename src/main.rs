use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use colored::Colorize;
use paramsheet::cli;
use paramsheet::extractor::Layout;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paramsheet")]
#[command(about = "Convert an appliance parameter workbook into provisioning JSON")]
#[command(long_about = "paramsheet - parameter workbook (.xlsx) to provisioning JSON

Reads the parameter sheets of the workbook and writes three documents
to the output directory:

  ls.json    - logical switches   (sheet: Logical Switches)
  esg.json   - edge gateways      (sheets: NSX Edge Deploy/Settings/Routing)
  dlr.json   - logical routers    (sheets: DLR Deploy/Settings/Routing/Bridding)

Only cached cell values are read: save the workbook from Excel so that
formula results are stored in the file.

Column discovery and lookup warnings go to stderr. Set RUST_LOG to
change their level (default: info).

EXAMPLES:
  paramsheet parameters.xlsx                 # write into current directory
  paramsheet parameters.xlsx out/            # write into out/
  paramsheet parameters.xlsx --dump 'DLR Settings' --layout grouped")]
#[command(version)]
struct Cli {
    /// Path to the parameter workbook (.xlsx)
    workbook: PathBuf,

    /// Directory for ls.json, esg.json and dlr.json
    #[arg(env = "PARAMSHEET_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Print the extraction trees of one sheet instead of converting
    #[arg(long, value_name = "SHEET")]
    dump: Option<String>,

    /// Column layout of the sheet given to --dump
    #[arg(long, value_enum, default_value = "normal")]
    layout: LayoutArg,

    /// Show debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    /// One entry per keyed column
    Normal,
    /// Blank-header columns continue the entry to their left
    Grouped,
    /// All columns form a single entry
    MergeAll,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Normal => Layout::Normal,
            LayoutArg::Grouped => Layout::GroupedColumns,
            LayoutArg::MergeAll => Layout::GroupedColumnsMergeAll,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "paramsheet=debug"
    } else {
        "paramsheet=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Running without a workbook is a request for usage, not a failure
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", Cli::command().render_usage());
            return;
        }
        Err(e) => e.exit(),
    };

    init_tracing(cli.verbose);

    let result = match cli.dump {
        Some(sheet) => cli::dump(cli.workbook, sheet, cli.layout.into()),
        None => cli::convert(cli.workbook, cli.output_dir, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "❌ Error:".bold().red(), e);
        std::process::exit(1);
    }
}
