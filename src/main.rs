use ecp_codec::utils::{load_mapped_items, save_mapped_items};
use ecp_codec::{EcpTranscoder, EcpTranscoderConfig, Intent};
use log::error;
use std::env;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

enum Mode {
    Encode,
    Decode,
}

struct CliArgs {
    mode: Mode,
    intent: Intent,
    use_bold: bool,
    use_abbrev: bool,
    map_file: Option<PathBuf>,
}

fn print_usage() {
    eprintln!(
        "Usage: ecp-codec-cli <encode|decode> [--intent <buy|sell>] [--bold] [--no-abbrev] [--map-file <path>]"
    );
    eprintln!("Reads the item name (encode) or ECP token (decode) from stdin.");
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = env::args().skip(1);

    let mode = match args.next().as_deref() {
        Some("encode") => Mode::Encode,
        Some("decode") => Mode::Decode,
        Some(other) => return Err(format!("Unknown mode: {}", other)),
        None => return Err("Missing mode".to_string()),
    };

    let mut parsed = CliArgs {
        mode,
        intent: Intent::Buy,
        use_bold: false,
        use_abbrev: true,
        map_file: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--intent" => {
                let value = args.next().ok_or("--intent requires a value")?;
                parsed.intent = Intent::from_str(&value)?;
            }
            "--bold" => parsed.use_bold = true,
            "--no-abbrev" => parsed.use_abbrev = false,
            "--map-file" => {
                let value = args.next().ok_or("--map-file requires a value")?;
                parsed.map_file = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(parsed)
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            process::exit(1);
        }
    };

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        process::exit(1);
    }
    let input = input.trim_end_matches(&['\r', '\n'][..]);

    let mut transcoder = EcpTranscoder::new(EcpTranscoderConfig {
        use_bold_chars: args.use_bold,
        use_keyword_abbreviations: args.use_abbrev,
    });

    if let Some(path) = &args.map_file {
        transcoder.preload_mapped_items(load_mapped_items(path));
    }

    match args.mode {
        Mode::Encode => match transcoder.encode(input, args.intent) {
            Ok(token) => {
                println!("{}", token);

                // New exceptional names may have been recorded; persist the
                // full record list back.
                if let Some(path) = &args.map_file {
                    save_mapped_items(path, transcoder.mapped_items());
                }
            }
            Err(e) => {
                error!("Error encoding item name: {}", e);
                process::exit(1);
            }
        },
        Mode::Decode => match transcoder.decode(input) {
            Ok(decoded) => {
                println!("{}: {}", decoded.intent, decoded.item_name);
            }
            Err(e) => {
                error!("Error decoding ECP token: {}", e);
                process::exit(1);
            }
        },
    }
}
