use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{ArgAction, Parser};

/// Render a clip-number overlay PNG.
#[derive(Parser, Debug)]
#[command(name = "clipmark", version, allow_negative_numbers = true)]
struct Cli {
    /// Label text (usually the clip number).
    number: String,

    /// Output PNG path. The directory must already exist.
    output_path: PathBuf,

    /// Base size in pixels [default: 75].
    size: Option<String>,

    /// Background color as #RRGGBB [default: #000000].
    bg_color: Option<String>,

    /// Text color as #RRGGBB [default: #ffffff].
    text_color: Option<String>,

    /// Background opacity, 0.0 to 1.0 [default: 0.7].
    opacity: Option<String>,

    /// simple, badge or rounded [default: badge].
    style: Option<String>,

    /// Extra font file to try before the system defaults (repeatable, tried in order).
    #[arg(long = "font", value_name = "PATH")]
    fonts: Vec<PathBuf>,

    /// Indicator JSON supplying defaults for the optional arguments.
    #[arg(long, value_name = "JSON")]
    indicator: Option<PathBuf>,

    /// Also print overlay coordinates for this corner (e.g. top-right).
    #[arg(long, value_name = "CORNER")]
    position: Option<String>,

    /// Log font resolution and sizing to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = clipmark::RenderConfig::from_env();
    for font in cli.fonts.iter().rev() {
        config.prepend_font(font);
    }

    let indicator = cli
        .indicator
        .as_deref()
        .map(clipmark::IndicatorSpec::from_path)
        .transpose()?;
    if let Some(spec) = &indicator {
        config = spec.apply_defaults(&config)?;
    }

    let args = clipmark::OptionalArgs {
        size: cli.size,
        bg_color: cli.bg_color,
        text_color: cli.text_color,
        opacity: cli.opacity,
        style: cli.style,
    };
    let request = clipmark::RenderRequest::from_args(cli.number, cli.output_path, &args, &config)?;

    let corner = match (&cli.position, &indicator) {
        (Some(pos), _) => Some(pos.parse::<clipmark::Corner>()?),
        (None, Some(spec)) if spec.position.is_some() => Some(spec.corner()?),
        _ => None,
    };

    clipmark::render_to_file(&request, &config)
        .with_context(|| format!("render '{}'", request.output_path.display()))?;

    println!(
        "Generated: {} (style={})",
        request.output_path.display(),
        request.style
    );
    if let Some(corner) = corner {
        let (x, y) = clipmark::OverlayPlacement::new(corner, request.base_size).ffmpeg_xy();
        println!("overlay: x={x} y={y}");
    }
    Ok(())
}
