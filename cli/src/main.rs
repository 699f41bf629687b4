use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;
use relaxed_json::{DecodeOptions, EncodeOptions, Indent, DEFAULT_MAX_DEPTH};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rjson", version, about = "Relaxed JSON decoder")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Indentation size for the JSON output; 0 writes compact JSON.
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Reject anything but whitespace after the first value.
    #[arg(long)]
    strict: bool,

    /// Maximum nesting depth of arrays and objects.
    #[arg(long = "max-depth", value_name = "number", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Only check that the input parses; print nothing but a status line.
    #[arg(long)]
    validate: bool,
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    File(String),
}

impl InputSource {
    fn label(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => display_path(path),
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (input_text, input_source) = read_input(args.input.as_deref())?;
    tracing::info!(source = %input_source.label(), bytes = input_text.len(), "read input");

    let options = DecodeOptions::new()
        .with_strict(args.strict)
        .with_max_depth(args.max_depth);

    if args.validate {
        relaxed_json::validate_str_with_options(&input_text, &options)?;
        println!("✔ valid {}", input_source.label());
        return Ok(());
    }

    let value = relaxed_json::parse_with_options(&input_text, &options)?;
    let encode_options = EncodeOptions::new().with_indent(Indent::spaces(args.indent));

    match args.output.as_deref() {
        Some(path) if path != "-" => {
            let file = fs::File::create(path)?;
            relaxed_json::to_writer_with_options(file, &value, &encode_options)?;
            println!("✔ Decoded {} → {}", input_source.label(), display_path(path));
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            relaxed_json::to_writer_with_options(&mut handle, &value, &encode_options)?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn read_input(input: Option<&str>) -> Result<(String, InputSource), Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read_to_string(path)?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}

fn display_path(path: &str) -> String {
    let path = Path::new(path);
    let Ok(cwd) = std::env::current_dir() else {
        return path.to_string_lossy().into_owned();
    };
    match path.strip_prefix(&cwd) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
