use clap::Parser;
use log::info;
use photo_album::config::{BuildConfig, ProcessingConfig};
use photo_album::imaging::RustBackend;
use photo_album::{album, config, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "photo-album")]
#[command(version)]
#[command(about = "Turns a directory tree of photos into a browsable static HTML album")]
#[command(long_about = "\
Turns a directory tree of photos into a browsable static HTML album

Every directory that contains JPEG images (directly or further down) becomes
an album with its own index.html. Images are grouped by the date they were
taken, read from EXIF metadata. The output tree mirrors the input tree:

  photos/                    album/
  ├── a.jpg                  ├── index.html
  ├── b.jpg        ──►       ├── a.jpg, a_thumbnail.jpg
  └── trip/                  ├── b.jpg, b_thumbnail.jpg
      └── c.jpg              └── trip/
                                 ├── index.html
                                 └── c.jpg, c_thumbnail.jpg

Only files ending in jpg or jpeg are picked up. Directories without any
images are left out entirely.

Set RUST_LOG=debug to see every processed image.")]
struct Cli {
    /// Directory tree of photos to read
    #[arg(long)]
    input: PathBuf,

    /// Directory to write the album into (created if missing)
    #[arg(long)]
    output: PathBuf,

    /// Max images processed at the same time (default: number of CPU cores)
    #[arg(long)]
    max_processes: Option<usize>,

    /// Print the root album summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = BuildConfig {
        input: cli.input,
        output: cli.output,
        processing: ProcessingConfig {
            max_processes: cli.max_processes,
        },
    };
    config.validate()?;
    init_thread_pool(&config.processing);

    info!(
        "Building album from {} into {}",
        config.input.display(),
        config.output.display()
    );
    let root = album::build_album(&RustBackend::new(), &config.input, &config.output)?;

    if cli.json {
        output::print_json(&root)?;
    } else {
        output::print_summary(&root);
    }
    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores. The user can constrain down, not up.
fn init_thread_pool(processing: &ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
