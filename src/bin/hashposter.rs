use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hashposter", version, about = "Deterministic SVG posters from seed strings")]
struct Cli {
    /// Log pipeline stages to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one seed to an SVG file.
    Render(RenderArgs),
    /// Render many seeds in parallel into a directory.
    Batch(BatchArgs),
    /// Print the derived poster parameters as JSON.
    Params(ParamsArgs),
}

#[derive(Args, Debug)]
struct PosterArgs {
    /// JSON options file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Square canvas size in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Grid cells per axis (derived from the seed when omitted).
    #[arg(long)]
    cells: Option<u32>,

    /// Empty border around the grid in pixels.
    #[arg(long)]
    margin: Option<u32>,

    /// Leave out the central ray motif.
    #[arg(long, default_value_t = false)]
    no_motif: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Seed text.
    seed: String,

    /// Output SVG path.
    #[arg(long, default_value = "./out.svg")]
    out: PathBuf,

    /// Write the document to stdout instead of a file.
    #[arg(long, default_value_t = false)]
    stdout: bool,

    /// Parse the document as SVG before writing it.
    #[arg(long, default_value_t = false)]
    verify: bool,

    #[command(flatten)]
    poster: PosterArgs,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Seed texts, one poster each.
    #[arg(required = true)]
    seeds: Vec<String>,

    /// Output directory; files are named `poster-NNN.svg` in argument order.
    #[arg(long)]
    out_dir: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    poster: PosterArgs,
}

#[derive(Parser, Debug)]
struct ParamsArgs {
    /// Seed text.
    seed: String,

    #[command(flatten)]
    poster: PosterArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Params(args) => cmd_params(args),
    }
}

fn load_options(args: &PosterArgs) -> anyhow::Result<hashposter::PosterOptions> {
    let mut opts = match &args.config {
        Some(path) => hashposter::PosterOptions::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => hashposter::PosterOptions::default(),
    };
    if let Some(size) = args.size {
        opts.size = size;
    }
    if let Some(cells) = args.cells {
        opts.cells = Some(cells);
    }
    if let Some(margin) = args.margin {
        opts.margin = margin;
    }
    if args.no_motif {
        opts.motif = false;
    }
    Ok(opts)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let opts = load_options(&args.poster)?;
    let poster = hashposter::render_poster(&args.seed, &opts)?;

    if args.verify {
        hashposter::verify_document(&poster.document)?;
    }

    if args.stdout {
        print!("{}", poster.document);
        return Ok(());
    }

    write_poster(&args.out, &poster.document)?;
    eprintln!("wrote {} (seed={})", args.out.display(), args.seed);
    tracing::debug!(fingerprint = %poster.fingerprint, "rendered poster");
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let opts = load_options(&args.poster)?;
    let posters = hashposter::render_batch(&args.seeds, &opts, args.threads)?;

    for (idx, poster) in posters.iter().enumerate() {
        let out = args.out_dir.join(format!("poster-{idx:03}.svg"));
        write_poster(&out, &poster.document)?;
        eprintln!("wrote {} (seed={})", out.display(), poster.seed);
    }
    Ok(())
}

fn cmd_params(args: ParamsArgs) -> anyhow::Result<()> {
    let opts = load_options(&args.poster)?;
    let poster = hashposter::render_poster(&args.seed, &opts)?;
    let json =
        serde_json::to_string_pretty(&poster.params).context("serialize poster params")?;
    println!("{json}");
    Ok(())
}

fn write_poster(path: &Path, document: &str) -> anyhow::Result<()> {
    hashposter::write_output(path, document)
        .with_context(|| format!("write svg '{}'", path.display()))
}
