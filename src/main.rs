use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use release_resolve::git::{GitTagSource, TagSource};
use release_resolve::{resolver, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-resolve",
    about = "Compute the release tag, version, and npm channel for the next publish"
)]
struct Args {
    #[arg(
        long,
        env = "NIGHTLY",
        help = "Resolve an auto-incremented nightly pre-release"
    )]
    nightly: bool,

    #[arg(
        long,
        env = "RELEASE_VERSION",
        help = "Explicit release version, e.g. 1.2.3 or v1.2.3-alpha.4"
    )]
    release_version: Option<String>,

    #[arg(
        long,
        default_value = release_resolve::manifest::DEFAULT_MANIFEST,
        help = "Path to the package manifest"
    )]
    manifest: PathBuf,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-resolve {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Not being inside a git repository only matters for nightly counting,
    // where it means "start at zero".
    let tag_source = GitTagSource::discover().ok();

    let release = match resolver::resolve(
        args.nightly,
        args.release_version.as_deref(),
        &args.manifest,
        tag_source.as_ref().map(|source| source as &dyn TagSource),
    ) {
        Ok(release) => release,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Single machine-readable line for downstream automation.
    println!("{}", serde_json::to_string(&release)?);
    Ok(())
}
