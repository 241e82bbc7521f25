use clap::{Parser, Subcommand};
use flowtitle::catalog::{Catalog, merge_gradients};
use flowtitle::clipboard::{self, CopyFeedback, SystemClipboard};
use flowtitle::config;
use flowtitle::editor::GradientEditor;
use flowtitle::export::{ExportBundle, ExportFormat};
use flowtitle::resolve::{self, find_gradient};
use flowtitle::state::{Direction, Easing, FontWeight, TitleConfig, TitleUpdate};
use flowtitle::store::StateStore;
use flowtitle::{output, preview};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

fn version_string() -> &'static str {
    let on_tag = env!("FLOWTITLE_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("FLOWTITLE_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "flowtitle")]
#[command(about = "Design animated gradient titles and export them as code")]
#[command(long_about = "\
Design animated gradient titles and export them as code

The title design is kept in .flowtitle/flowtitle-state.json and changed one
field at a time with `flowtitle set`. Every export is rendered from the same
resolved gradient, so all formats show the same effect.

  flowtitle set --title \"Launch Day\" --gradient sunset --speed 6
  flowtitle create-gradient --stop '#000@80' --stop '#fff@20'
  flowtitle export --format vanilla
  flowtitle preview

Run 'flowtitle gen-config' to generate a documented flowtitle.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project directory (holds flowtitle.toml and the state directory)
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Default)]
struct SetArgs {
    /// Title text (may be empty)
    #[arg(long)]
    title: Option<String>,
    #[arg(long, value_enum)]
    direction: Option<Direction>,
    /// Animation duration in seconds (1-30)
    #[arg(long)]
    speed: Option<u32>,
    #[arg(long, value_enum)]
    easing: Option<Easing>,
    /// Gradient id (see `flowtitle gradients`)
    #[arg(long)]
    gradient: Option<String>,
    /// Font size in pixels (24-200)
    #[arg(long)]
    font_size: Option<u32>,
    #[arg(long, value_enum)]
    font_weight: Option<FontWeight>,
    /// Background zoom in percent (100-1000, step 50)
    #[arg(long)]
    bg_size: Option<u32>,
    /// Show the mirrored reflection
    #[arg(long)]
    reflection: Option<bool>,
    /// Reflection blur in pixels (0-40)
    #[arg(long)]
    reflection_blur: Option<u32>,
    /// Reflection opacity (0-1)
    #[arg(long)]
    reflection_opacity: Option<f64>,
}

impl SetArgs {
    fn into_update(self) -> TitleUpdate {
        TitleUpdate {
            title: self.title,
            direction: self.direction,
            speed: self.speed,
            easing: self.easing,
            gradient_id: self.gradient,
            font_size: self.font_size,
            font_weight: self.font_weight,
            bg_size: self.bg_size,
            show_reflection: self.reflection,
            reflection_blur: self.reflection_blur,
            reflection_opacity: self.reflection_opacity,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the current title design
    Show,
    /// Change one or more fields of the title design
    Set(SetArgs),
    /// Restore the stock title design (clears custom gradients)
    Reset,
    /// List custom gradients and presets
    Gradients,
    /// Save a custom gradient and make it active
    CreateGradient {
        /// Display name (random when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Start from an existing gradient; editing a custom one keeps its id
        #[arg(long)]
        from: Option<String>,
        /// Colour stop as COLOR@PERCENT, e.g. '#22d3ee@50'; repeat for each stop
        #[arg(long = "stop", value_parser = parse_stop)]
        stops: Vec<(String, f64)>,
    },
    /// Print the generated code
    Export {
        /// Target format (defaults to export.format in flowtitle.toml)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
        /// Also copy block N (1-based) to the clipboard
        #[arg(long)]
        copy: Option<usize>,
    },
    /// Write a standalone HTML preview page
    Preview {
        /// Output file (defaults to preview.output in flowtitle.toml)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a stock flowtitle.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let app_config = config::load_config(&cli.dir)?;
    let store = app_config
        .store
        .enabled
        .then(|| StateStore::in_dir(&cli.dir.join(&app_config.store.dir)));
    let state = store.as_ref().map(StateStore::load).unwrap_or_default();
    let catalog = Catalog::builtin();

    match cli.command {
        Command::Show => {
            let resolved = resolve::resolve(&state, catalog);
            output::print_config_summary(&state, &resolved);
        }
        Command::Set(args) => {
            let update = args.into_update();
            if update.is_empty() {
                return Err(
                    "nothing to set; pass at least one field (see `flowtitle set --help`)".into(),
                );
            }
            let next = state.apply_update(update);
            persist(store.as_ref(), &next);
            output::print_config_summary(&next, &resolve::resolve(&next, catalog));
        }
        Command::Reset => {
            let next = TitleConfig::default();
            persist(store.as_ref(), &next);
            output::print_config_summary(&next, &resolve::resolve(&next, catalog));
        }
        Command::Gradients => {
            let merged = merge_gradients(&state.custom_gradients, catalog);
            output::print_gradient_list(&merged, &state.gradient_id);
        }
        Command::CreateGradient { name, from, stops } => {
            let mut editor = match &from {
                Some(id) => {
                    let source = find_gradient(id, &state.custom_gradients, catalog)
                        .ok_or_else(|| format!("unknown gradient '{id}'"))?;
                    GradientEditor::from_gradient(source)
                }
                None => GradientEditor::new(&mut rand::rng()),
            };
            if !stops.is_empty() {
                editor.replace_stops(stops)?;
            }
            if let Some(name) = &name {
                editor.set_name(name);
            }
            let gradient = editor.finish(unix_millis());
            println!("{}", output::format_saved_gradient(&gradient));
            let next = state.with_custom_gradient(gradient);
            persist(store.as_ref(), &next);
        }
        Command::Export { format, copy } => {
            let format = format.unwrap_or(app_config.export.format);
            let bundle = ExportBundle::build(&state, catalog);
            let blocks = bundle.blocks(format);
            output::print_code_blocks(format, blocks);
            if let Some(n) = copy {
                let block = n
                    .checked_sub(1)
                    .and_then(|i| blocks.get(i))
                    .ok_or_else(|| format!("{format} has {} block(s), no block {n}", blocks.len()))?;
                let feedback = clipboard::copy_block(&mut SystemClipboard, n, &block.source)?;
                eprintln!(
                    "[{n}] {}: {}",
                    block.title,
                    CopyFeedback::label(Some(&feedback), n, Instant::now())
                );
            }
        }
        Command::Preview { output } => {
            let path = output.unwrap_or_else(|| cli.dir.join(&app_config.preview.output));
            write_preview(&state, catalog, &path)?;
            println!("Preview written to {}", path.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Save the state if persistence is on. Failures are logged, not retried.
fn persist(store: Option<&StateStore>, state: &TitleConfig) {
    if let Some(store) = store
        && let Err(e) = store.save(state)
    {
        log::error!("failed to save state to {}: {e}", store.path().display());
    }
}

fn write_preview(
    state: &TitleConfig,
    catalog: &Catalog,
    path: &Path,
) -> Result<(), std::io::Error> {
    let resolved = resolve::resolve(state, catalog);
    let page = preview::render_page(state, &resolved);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, page.into_string())
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Parse `COLOR@PERCENT`. The percent follows the editor's lenient rules.
fn parse_stop(s: &str) -> Result<(String, f64), String> {
    let (color, position) = s
        .rsplit_once('@')
        .ok_or_else(|| format!("expected COLOR@PERCENT, got '{s}'"))?;
    if color.is_empty() {
        return Err(format!("missing colour in '{s}'"));
    }
    Ok((
        color.to_string(),
        flowtitle::editor::parse_position(position),
    ))
}
