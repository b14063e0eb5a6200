//! stylegen - compile style fragments to CSS

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use stylegen::{CompileOptions, Result, default_options, generate_css, init_logger, parse_fragments};

#[derive(Parser)]
#[command(name = "stylegen")]
#[command(version, about = "Compile JSON style fragments to CSS", long_about = None)]
#[command(after_help = "EXAMPLES:
    stylegen styles.json -s .button_x1        Compile a file
    echo '{\"color\":\"red\"}' | stylegen -s .a  Compile from stdin")]
struct Cli {
    /// JSON file holding one fragment or an array of fragments (stdin if omitted)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Selector the styles are bound to
    #[arg(short, long, default_value = ".style")]
    selector: String,

    /// Do not mark declarations !important
    #[arg(long)]
    no_important: bool,

    /// Do not add vendor prefixes
    #[arg(long)]
    no_prefix: bool,

    /// Append debug logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(css) => {
            println!("{css}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.log {
        init_logger(path)?;
    }

    let source = read_source(cli.input.as_deref(), std::io::stdin())?;
    let fragments = parse_fragments(&source)?;
    log::debug!("read {} fragment(s)", fragments.len());

    Ok(generate_css(&cli.selector, &fragments, &build_options(cli))?)
}

/// Reads the JSON source from `input`, or from `stdin` when no path is given.
fn read_source(input: Option<&str>, mut stdin: impl Read) -> Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn build_options(cli: &Cli) -> CompileOptions {
    let options = if cli.no_prefix {
        CompileOptions::new()
    } else {
        default_options()
    };
    options.important(!cli.no_important)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylegen::StyleNode;

    fn compile_with(args: &[&str], style: StyleNode) -> String {
        let cli = Cli::parse_from(std::iter::once("stylegen").chain(args.iter().copied()));
        generate_css(&cli.selector, &[style], &build_options(&cli)).unwrap()
    }

    #[test]
    fn defaults_prefix_and_mark_important() {
        let css = compile_with(&["-s", ".a"], StyleNode::new().with("order", 1));
        assert_eq!(css, ".a{-webkit-order:1 !important;order:1 !important;}");
    }

    #[test]
    fn no_prefix_skips_vendor_copies() {
        let css = compile_with(&["-s", ".a", "--no-prefix"], StyleNode::new().with("order", 1));
        assert_eq!(css, ".a{order:1 !important;}");
    }

    #[test]
    fn no_important_drops_marker() {
        let css = compile_with(
            &["--selector", ".a", "--no-important", "--no-prefix"],
            StyleNode::new().with("color", "red"),
        );
        assert_eq!(css, ".a{color:red;}");
    }

    #[test]
    fn default_selector() {
        let css = compile_with(&["--no-prefix"], StyleNode::new().with("color", "red"));
        assert_eq!(css, ".style{color:red !important;}");
    }

    #[test]
    fn reads_stdin_without_input_path() {
        let source = read_source(None, r#"{"color":"red"}"#.as_bytes()).unwrap();
        assert_eq!(source, r#"{"color":"red"}"#);
    }

    #[test]
    fn reads_input_file_over_stdin() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("styles.json");
        std::fs::write(&path, r#"[{"margin":0}]"#).expect("write fixture");

        let source = read_source(path.to_str(), "ignored".as_bytes()).unwrap();
        assert_eq!(source, r#"[{"margin":0}]"#);
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let err = read_source(Some("/nonexistent/styles.json"), std::io::empty()).unwrap_err();
        assert!(matches!(err, stylegen::StylegenError::IO(_)));
    }
}
