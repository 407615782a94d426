use gravview::run_view;
use gravview::{ViewConfig, ViewState};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short)]
    file_name: Option<PathBuf>,
}

// load here to keep main clean
fn load_view_from_yaml() -> Result<ViewState> {
    let args = Args::parse();

    // No preset given: start from the built-in defaults
    let Some(config_path) = args.file_name else {
        return Ok(ViewState::default());
    };

    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let view_cfg: ViewConfig = serde_yaml::from_reader(reader)?;

    //println!("{:?}", view_cfg);

    Ok(ViewState::build_view(view_cfg))
}

fn main() -> Result<()> {
    let view = load_view_from_yaml()?;

    run_view(view);

    //bench_field();
    //bench_rebuild_curve();

    Ok(())
}
