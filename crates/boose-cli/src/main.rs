//! `boose-draw`: run a BOOSE command script on a fresh canvas and save the
//! result as PNG.
//!
//! ```text
//! boose-draw <script> [-o out.png] [--config canvas.json] [--width N] [--height N]
//! ```
//!
//! When a command fails, the drawing made up to that line is still saved
//! before the error is reported. Set `RUST_LOG=debug` (or `trace`) to
//! follow each command.

mod config;
mod export;

use boose_canvas::Canvas;
use boose_script::Program;
use config::CanvasConfig;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: boose-draw <script> [-o|--output out.png] [-c|--config canvas.json] \
                     [-w|--width N] [-H|--height N] [-h|--help]";

/// Parsed command-line flags; `None` means "use the config value".
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    script: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    width: Option<i32>,
    height: Option<i32>,
    help: bool,
}

impl Args {
    fn parse(mut argv: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut args = Args::default();
        let mut script = None;

        while let Some(arg) = argv.next() {
            let mut value = |flag: &str| {
                argv.next()
                    .ok_or_else(|| format!("missing value for {flag}"))
            };
            match arg.as_str() {
                "-h" | "--help" => {
                    args.help = true;
                    return Ok(args);
                }
                "-o" | "--output" => args.output = Some(value(&arg)?.into()),
                "-c" | "--config" => args.config = Some(value(&arg)?.into()),
                "-w" | "--width" => args.width = Some(parse_dimension(&arg, &value(&arg)?)?),
                "-H" | "--height" => args.height = Some(parse_dimension(&arg, &value(&arg)?)?),
                flag if flag.starts_with('-') => return Err(format!("unknown flag {flag}")),
                path if script.is_none() => script = Some(PathBuf::from(path)),
                extra => return Err(format!("unexpected argument {extra}")),
            }
        }

        args.script = script.ok_or_else(|| "missing script path".to_string())?;
        Ok(args)
    }

    /// Config file (or defaults) with flags applied on top.
    fn resolve(&self) -> Result<CanvasConfig, String> {
        let mut cfg = match &self.config {
            Some(path) => CanvasConfig::load(path)?,
            None => CanvasConfig::default(),
        };
        if let Some(w) = self.width {
            cfg.width = w;
        }
        if let Some(h) = self.height {
            cfg.height = h;
        }
        if let Some(out) = &self.output {
            cfg.output = out.clone();
        }
        Ok(cfg)
    }
}

fn parse_dimension(flag: &str, value: &str) -> Result<i32, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects an integer, got `{value}`"))
}

fn run(args: &Args) -> Result<(), String> {
    let cfg = args.resolve()?;
    let source = std::fs::read_to_string(&args.script)
        .map_err(|e| format!("cannot read script {}: {e}", args.script.display()))?;

    let program = Program::parse(&source).map_err(|e| format!("{}: {e}", args.script.display()))?;
    log::info!(
        "{}: {} commands on a {}x{} canvas",
        args.script.display(),
        program.len(),
        cfg.width,
        cfg.height
    );

    let mut canvas =
        Canvas::new(cfg.width, cfg.height).map_err(|e| format!("cannot create canvas: {e}"))?;
    let outcome = program.run(&mut canvas);
    if let Err(e) = &outcome {
        log::warn!("saving partial drawing, stopped at {e}");
    }

    export::save_png(canvas.surface(), &cfg.output)?;
    outcome
        .map(|_| ())
        .map_err(|e| format!("{}: {e}", args.script.display()))
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
