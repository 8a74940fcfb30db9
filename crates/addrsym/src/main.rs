use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use addrsym_core::error::{AddrsymError, AddrsymResult};
use addrsym_core::parser::{FragmentParser, FrameSequence, ModuleOffsetParser, Parser as _, ParserKind};
use addrsym_core::types::{Address, ModuleContext, ModuleDescriptor};
use addrsym_utils::{debug, info, init_logging, init_logging_with_level, LogLevel};
use clap::{Args, Parser, Subcommand};

/// Turn bare crash-log address lists into module-relative stack frames.
#[derive(Parser, Debug)]
#[command(name = "addrsym")]
#[command(version)]
#[command(about = "Turn bare crash-log address lists into module-relative stack frames", long_about = None)]
struct Cli
{
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Parse whitespace-separated addresses that all belong to one module
    Fragment
    {
        /// Module file name, e.g. libfoo.so
        #[arg(long)]
        module: String,
        /// Build identifier of the module
        #[arg(long)]
        identifier: String,
        /// Load address of the module (hex with 0x prefix, or decimal)
        #[arg(long)]
        base: Address,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Parse `module+offset` tokens against a set of known modules
    Offsets
    {
        /// Known module as NAME=IDENTIFIER@BASE (repeatable)
        #[arg(long = "map", required = true)]
        maps: Vec<ModuleMapping>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs
{
    /// Read input from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Also list the modules a symbolizer would need
    #[arg(long, default_value_t = false)]
    modules: bool,
}

/// `NAME=IDENTIFIER@BASE` as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ModuleMapping(ModuleContext);

impl FromStr for ModuleMapping
{
    type Err = AddrsymError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let malformed = || AddrsymError::InvalidArgument(format!("expected NAME=IDENTIFIER@BASE, got `{s}`"));

        let (module, base) = s.rsplit_once('@').ok_or_else(malformed)?;
        let (name, identifier) = module.rsplit_once('=').ok_or_else(malformed)?;
        validate_module(name, identifier)?;

        Ok(ModuleMapping(ModuleContext::new(
            ModuleDescriptor::new(name, identifier),
            base.parse()?,
        )))
    }
}

fn validate_module(name: &str, identifier: &str) -> AddrsymResult<()>
{
    if name.is_empty() {
        return Err(AddrsymError::InvalidArgument("module name is empty".to_string()));
    }
    if identifier.is_empty() {
        return Err(AddrsymError::InvalidArgument(format!(
            "build identifier for `{name}` is empty"
        )));
    }
    Ok(())
}

fn main()
{
    let cli = Cli::parse();

    // Defaults to WARN and Pretty format unless RUST_LOG / ADDRSYM_LOG_FORMAT say otherwise
    let logging = match cli.log_level {
        Some(level) => init_logging_with_level(level, None),
        None => init_logging(),
    };
    if let Err(e) = logging {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run_command(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn build_parser(command: Commands) -> AddrsymResult<(ParserKind, OutputArgs)>
{
    match command {
        Commands::Fragment {
            module,
            identifier,
            base,
            output,
        } => {
            validate_module(&module, &identifier)?;
            let context = ModuleContext::new(ModuleDescriptor::new(module, identifier), base);
            Ok((FragmentParser::from_context(context).into(), output))
        }
        Commands::Offsets { maps, output } => {
            let parser = ModuleOffsetParser::new(maps.into_iter().map(|ModuleMapping(context)| context));
            Ok((parser.into(), output))
        }
    }
}

fn run_command(cli: Cli) -> AddrsymResult<()>
{
    let (parser, output) = build_parser(cli.command)?;
    info!("Using {} parser", parser.name());

    let input = read_input(output.input.as_ref())?;
    let frames = parser.parse(&input)?;
    debug!(
        resolved = frames.resolved_count(),
        placeholders = frames.placeholder_count(),
        "parse finished"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_frames(&mut out, &frames, output.modules)?;
    out.flush()?;
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> AddrsymResult<String>
{
    match path {
        Some(path) => {
            info!("Reading input from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_frames(out: &mut impl Write, frames: &FrameSequence, with_modules: bool) -> io::Result<()>
{
    for (index, emitted) in frames.iter().enumerate() {
        writeln!(out, "{index:>3} {}", emitted.frame)?;
    }

    if with_modules {
        writeln!(out)?;
        writeln!(out, "Required modules:")?;
        for module in frames.required_modules() {
            writeln!(out, "  {} {}", module.name(), module.identifier())?;
        }
    }
    Ok(())
}
