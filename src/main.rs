use clap::Parser;
use gpx2bryton::Route;
use std::path::PathBuf;
use std::time::Instant;

/// Convert a GPX route into the .smy/.track/.tinfo navigation files used by
/// Bryton Rider GPS devices.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Input GPX file
    input: PathBuf,

    /// Output base name for the .smy/.track/.tinfo files; anything after the
    /// first period is replaced (defaults to the input name)
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("gpx2bryton: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> gpx2bryton::Result<()> {
    let started = Instant::now();

    let route = Route::from_gpx_file(&cli.input)?;
    let out_base = cli.output.as_deref().unwrap_or(&cli.input);
    route.export(out_base)?;

    tracing::info!("finished in {:?}", started.elapsed());
    Ok(())
}
