use clap::{ App, Arg };

use scoreplot::{ render, PlotConfig };
use scoreseries::ScoreFile;

fn main() {
    let matches = App::new("scoreplot")
        .version("1.0")
        .about("Plots the convergence of a single jobshop optimization run")
        .arg(Arg::with_name("INPUT")
            .help("Score file, one makespan per line")
            .default_value("score.txt")
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Where the chart is written")
            .default_value("plot.svg")
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let output = matches.value_of("OUTPUT").unwrap();

    let scores = match ScoreFile::read_single(input) {
        Ok(scores) => scores,
        Err(error) => {
            eprintln!("{}: {}", input, error);
            std::process::exit(1);
        }
    };

    if let Err(error) = render(&scores.series, output, &PlotConfig::default()) {
        eprintln!("Could not render {}: {}", output, error);
        std::process::exit(1);
    }

    println!("Plotted {} iterations to {}", scores.series[0].values.len(), output);
}
