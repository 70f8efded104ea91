use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uwp_assets::config::{self, Overrides};
use uwp_assets::generate::{self, GenerateOptions};
use uwp_assets::imaging::{ResampleFilter, RustBackend};
use uwp_assets::output;
use uwp_assets::overwrite::{OverwritePolicy, TerminalConfirm};

#[derive(Parser)]
#[command(name = "uwp-assets")]
#[command(about = "Generate all scales of image assets for a UWP application")]
#[command(long_about = "\
Generate all scales of image assets for a UWP application

Put one high-resolution image per logo in the input folder, named after the
asset it provides. Each recognized file is resized into five variants:

  input/
  ├── assets.toml                          # Optional defaults for the options below
  ├── BadgeLogo.png                        # → BadgeLogo.scale-{400,200,150,125,100}
  ├── SplashScreen.png                     # → SplashScreen.scale-...
  ├── Square44x44Logo.png                  # → Square44x44Logo.scale-...
  ├── Square44x44Logo-badge.png            # → Square44x44Logo.targetsize-{256,48,32,24,16}
  ├── Square44x44Logo-badge-unplated.png   # → ...targetsize-N_altform-unplated
  ├── Square71x71Logo.png
  ├── Square150x150Logo.png
  ├── Square310x310Logo.png
  ├── StoreLogo.png
  └── Wide310x150Logo.png

Scale variants are proportional (the source is the 400% asset); target-size
variants are always square. Other files are ignored with a warning.")]
#[command(
    after_help = "Assets must be copied to the Images or Assets folder then added into the project."
)]
#[command(version)]
struct Cli {
    /// The folder containing the input files
    #[arg(short, long, default_value = "input", global = true)]
    input: PathBuf,

    /// The folder to which the output files are saved
    #[arg(short, long, default_value = "output", global = true)]
    output: PathBuf,

    /// Overwrite existing output files without asking
    #[arg(short, long, global = true)]
    force: bool,

    /// The image encoding of the output files (png, jpg, jpeg, webp, tiff, bmp, avif)
    #[arg(short, long, global = true)]
    ext: Option<String>,

    /// The quality of lossy output files on a 1-100 scale
    #[arg(short, long, global = true)]
    quality: Option<u32>,

    /// Do not optimise output files for size
    #[arg(short, long, global = true)]
    unoptimised: bool,

    #[arg(short = 'm', long, global = true, help = resampling_help())]
    resampling_method: Option<String>,

    /// Config file [default: <input>/assets.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every variant of the recognized input files
    Generate,
    /// Verify output assets against a package manifest (not implemented)
    Verify,
    /// Print a stock assets.toml with all options documented
    GenConfig,
}

fn resampling_help() -> String {
    let names: Vec<String> = ResampleFilter::ALL
        .iter()
        .map(|f| format!("'{}'", f.name()))
        .collect();
    format!(
        "Resampling method used for downscaling. Options are: {}",
        names.join(", ")
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            let config_path = cli
                .config
                .clone()
                .unwrap_or_else(|| cli.input.join(config::CONFIG_FILE_NAME));
            let overrides = Overrides {
                format: cli.ext.clone(),
                quality: cli.quality,
                unoptimised: cli.unoptimised,
                resampling: cli.resampling_method.clone(),
            };
            let gen_config = config::load_config(&config_path, &overrides)?;
            let options = GenerateOptions {
                variant: gen_config.variant_config()?,
                overwrite: OverwritePolicy::new(cli.force),
                config_file: Some(config_path),
            };

            println!(
                "==> Generating assets: {} → {}",
                cli.input.display(),
                cli.output.display()
            );
            let mut confirm = TerminalConfirm::stdio();
            let report = generate::batch_generate(
                &RustBackend::new(),
                &cli.input,
                &cli.output,
                &options,
                &mut confirm,
            )?;
            output::print_generate_output(&report);
            println!("==> Action completed");
        }
        Command::Verify => {
            println!(
                "==> Verifying assets in {} are valid for a UWP application",
                cli.output.display()
            );
            generate::verify(&cli.output)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
