use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use texplot::config::Settings;
use texplot::plotting::{Compiler, Context, FigureHandle, SaveFormat};
use texplot::scene::Scene;

#[derive(Parser)]
#[command(name = "texplot")]
#[command(
    about = "Render chart scenes to pgfplots/TikZ LaTeX",
    long_about = "Builds figures from a JSON scene description and writes them as LaTeX source, compiles them to PDF, or opens them in a viewer."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    /// Path to settings JSON file (preamble, compiler, viewer, temporary directory).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a figure of a scene file
    Render {
        /// Scene JSON file describing figures, axes and plots.
        #[arg(required = true)]
        scene: PathBuf,
        /// Output file. Without it the LaTeX source is written to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format (tex or pdf). Defaults to the extension of --output.
        #[arg(long)]
        format: Option<String>,
        /// Id of the figure to render. Defaults to the last figure of the scene.
        #[arg(long)]
        figure: Option<usize>,
        /// Compile the figure and open it in the viewer afterwards.
        #[arg(long)]
        view: bool,
    },
    /// Print the effective settings as read from --settings
    Settings,
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Error loading settings {}", path.display())),
        None => Ok(Settings::default()),
    }
}

fn select_figure(ctx: &mut Context, id: Option<usize>) -> Result<FigureHandle> {
    match id {
        Some(id) if ctx.get_figure(id).is_some() => Ok(ctx.figure(Some(id))),
        Some(id) => bail!(
            "Figure {} not found in scene (available: {:?})",
            id,
            ctx.figure_ids()
        ),
        None => Ok(ctx.gcf()),
    }
}

fn render(
    settings: Settings,
    scene: &Path,
    output: Option<&Path>,
    format: Option<&str>,
    figure: Option<usize>,
    view: bool,
) -> Result<()> {
    let scene = Scene::load(scene)
        .with_context(|| format!("Error loading scene {}", scene.display()))?;
    let mut ctx = Context::with_settings(settings);
    scene.apply(&mut ctx)?;
    if ctx.figure_ids().is_empty() {
        bail!("Scene contains no figures");
    }

    let fig = select_figure(&mut ctx, figure)?;
    let fig = fig.borrow();
    let compiler = ctx.compiler();

    let saved = match output {
        Some(path) => Some((path, fig.save(path, format, &compiler)?)),
        None => {
            if let Some(format) = format {
                if !format.eq_ignore_ascii_case("tex") {
                    bail!("Only tex output can be written to stdout, got '{}'", format);
                }
            }
            fig.write_tex(&mut std::io::stdout().lock())?;
            None
        }
    };

    if view {
        info!("Opening figure {}", fig.id());
        let pdf = match saved {
            Some((path, SaveFormat::Pdf)) => path.to_path_buf(),
            _ => fig.compile(&compiler)?,
        };
        compiler.view(&pdf)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        }
        .unwrap_or_else(|e| panic!("Could not open log file '{}': {}", path, e));
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();

    let settings = match load_settings(cli.settings.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Render {
            scene,
            output,
            format,
            figure,
            view,
        } => render(
            settings,
            scene,
            output.as_deref(),
            format.as_deref(),
            *figure,
            *view,
        ),
        Commands::Settings => {
            println!("{:#?}", settings);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
