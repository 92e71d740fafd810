use std::path::PathBuf;

use anyhow::{bail, Context};
use gcodesim::{
    cutting_polylines, init_logging, parser_options, prepare_playback, Config, Error,
    ProgramSession, Severity, BUILD_DATE, VERSION,
};
use tracing::{info, warn};

const USAGE: &str = "usage: gcodesim <program> [--config <path>] [--steps]";

struct Args {
    program: PathBuf,
    config: Option<PathBuf>,
    steps: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut program = None;
    let mut config = None;
    let mut steps = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--steps" => steps = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("unknown option {}\n{}", other, USAGE),
            other => {
                if program.replace(PathBuf::from(other)).is_some() {
                    bail!("only one program may be given\n{}", USAGE);
                }
            }
        }
    }

    Ok(Args {
        program: program.context(USAGE)?,
        config,
        steps,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!("GCodeSim {} (built {})", VERSION, BUILD_DATE);

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load_or_default()?,
    };

    let session = ProgramSession::spawn(args.program.clone(), parser_options(&config));
    let program = session.wait().await?;

    for diagnostic in &program.diagnostics {
        match diagnostic.severity {
            Severity::Warning => warn!("line {}: {}", diagnostic.line_number, diagnostic),
            Severity::Error => return Err(Error::from(diagnostic.error.clone()).into()),
        }
    }

    let mut toolpath = prepare_playback(&program, &config.playback);
    let stats = toolpath.stats();

    println!("program:  {}", args.program.display());
    println!("commands: {}", program.command_count);
    println!("toolpath: {}", stats);
    match toolpath.bounds() {
        Some(bounds) => println!(
            "bounds:   X {:.3}..{:.3}  Y {:.3}..{:.3}  Z {:.3}..{:.3}",
            bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y, bounds.min_z, bounds.max_z
        ),
        None => println!("bounds:   (empty)"),
    }

    if args.steps {
        toolpath.reset();
        while !toolpath.is_complete() {
            toolpath.advance();
            if let Some(segment) = toolpath.current_segment() {
                println!("{:>6}  {}", toolpath.cursor(), segment);
            }
        }
    }

    let strips = cutting_polylines(toolpath.visible_prefix(), config.playback.arc_segments);
    let vertices: usize = strips.iter().map(Vec::len).sum();
    println!(
        "visible:  {}/{} segments, {} strips, {} vertices",
        toolpath.cursor(),
        toolpath.len(),
        strips.len(),
        vertices
    );

    Ok(())
}
