use clap::{ App, Arg };

use itertools::Itertools;

use scoreplot::{ render, PlotConfig };
use scoreseries::ScoreFile;

use std::path::Path;

fn main() {
    let matches = App::new("scoreplot-all")
        .version("1.0")
        .about("Plots every run in a score file, one line per solver")
        .arg(Arg::with_name("TARGET_DIR")
            .help("Directory the chart is written to")
            .required(true)
        )
        .arg(Arg::with_name("INSTANCE")
            .help("Instance name, used as the output file stem")
            .required(true)
        )
        .arg(Arg::with_name("input")
            .long("input")
            .takes_value(true)
            .default_value("score.txt")
            .help("Score file to plot")
        )
        .get_matches();

    let target_dir = matches.value_of("TARGET_DIR").unwrap();
    let instance = matches.value_of("INSTANCE").unwrap();
    let input = matches.value_of("input").unwrap();

    let scores = match ScoreFile::read(input) {
        Ok(scores) => scores,
        Err(error) => {
            eprintln!("{}: {}", input, error);
            std::process::exit(1);
        }
    };

    let output = Path::new(target_dir).join(format!("{}.svg", instance));

    if let Err(error) = render(&scores.series, &output, &PlotConfig::default()) {
        eprintln!("Could not render {}: {}", output.display(), error);
        std::process::exit(1);
    }

    let names = scores.series.iter()
        .map(|s| s.name.as_ref().map(String::as_str).unwrap_or("(unnamed)"))
        .format(", ");
    println!("Plotted {} to {}", names, output.display());
}
