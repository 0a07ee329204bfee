use std::fs::File;
use std::io::{ BufRead, BufReader, BufWriter, Read, Write };
use std::path::Path;

/// One optimization run: the best known makespan after every iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub name: Option<String>,
    pub values: Vec<u32>,
}

/// A parsed score file, one `Series` per run in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreFile {
    pub series: Vec<Series>,
}

/// A line holds a score iff it is non-empty and every byte is an ASCII digit.
/// Signs, surrounding whitespace and embedded spaces all make it a label line.
pub fn is_score_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

impl ScoreFile {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let file = File::open(path).map_err(|_| "Could not read score file".to_owned())?;
        Self::from_reader(file)
    }

    /// Multi-run parse. Score lines accumulate into the current run, any other
    /// line closes that run under the line's text as its name. A trailing run
    /// without a label line is kept as well, it just stays unnamed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, String> {
        let reader = BufReader::new(reader);

        let mut series = vec!();
        let mut current: Vec<u32> = vec!();

        for line in reader.lines() {
            let line = line.map_err(|_| "Could not read line".to_owned())?;

            if is_score_line(&line) {
                let value = line.parse::<u32>().map_err(|_| format!("Score out of range: {}", line))?;
                current.push(value);
            } else {
                series.push(Series {
                    name: Some(line),
                    values: std::mem::replace(&mut current, vec!()),
                });
            }
        }

        if !current.is_empty() {
            series.push(Series { name: None, values: current });
        }

        Ok(ScoreFile { series })
    }

    pub fn read_single<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let file = File::open(path).map_err(|_| "Could not read score file".to_owned())?;
        Self::single_from_reader(file)
    }

    /// Single-run parse: the whole file is one unnamed series and every line
    /// must be a score.
    pub fn single_from_reader<R: Read>(reader: R) -> Result<Self, String> {
        let reader = BufReader::new(reader);
        let mut values = vec!();

        for line in reader.lines() {
            let line = line.map_err(|_| "Could not read line".to_owned())?;
            let value = line.parse::<u32>().map_err(|_| format!("Not a score: {}", line))?;
            values.push(value);
        }

        Ok(ScoreFile { series: vec!(Series { name: None, values }) })
    }
}

/// Producer side of the format: a solver pushes one score per iteration and
/// closes each run with a label line.
pub struct ScoreWriter<W: Write> {
    writer: W,
}

impl ScoreWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let file = File::create(path).map_err(|_| "Could not create score file".to_owned())?;
        Ok(ScoreWriter::new(BufWriter::new(file)))
    }
}

impl<W: Write> ScoreWriter<W> {
    pub fn new(writer: W) -> Self {
        ScoreWriter { writer }
    }

    pub fn push(&mut self, value: u32) -> Result<(), String> {
        writeln!(self.writer, "{}", value).map_err(|_| "Could not write score".to_owned())
    }

    /// Label lines double as run separators, so a purely numeric name would
    /// be read back as another score.
    pub fn finish_series(&mut self, name: &str) -> Result<(), String> {
        if is_score_line(name) {
            return Err(format!("Series name cannot be numeric: {}", name));
        }
        writeln!(self.writer, "{}", name).map_err(|_| "Could not write label".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ is_score_line, ScoreFile, ScoreWriter, Series };

    #[test]
    fn single_run() {
        let scores = ScoreFile::single_from_reader(r"3
1
4".as_bytes()).unwrap();

        assert_eq!(scores.series, vec!(Series { name: None, values: vec!(3, 1, 4) }));
    }

    #[test]
    fn single_run_rejects_labels() {
        assert!(ScoreFile::single_from_reader(r"3
solverA".as_bytes()).is_err());
    }

    #[test]
    fn single_run_empty_file() {
        let scores = ScoreFile::single_from_reader("".as_bytes()).unwrap();

        assert_eq!(scores.series, vec!(Series { name: None, values: vec!() }));
    }

    #[test]
    fn two_labelled_runs() {
        let scores = ScoreFile::from_reader(r"2
5
solverA
1
9
solverB".as_bytes()).unwrap();

        assert_eq!(scores.series, vec!(
            Series { name: Some("solverA".to_owned()), values: vec!(2, 5) },
            Series { name: Some("solverB".to_owned()), values: vec!(1, 9) },
        ));
    }

    #[test]
    fn trailing_run_kept_unnamed() {
        let scores = ScoreFile::from_reader(r"2
solverA
7
6".as_bytes()).unwrap();

        assert_eq!(scores.series, vec!(
            Series { name: Some("solverA".to_owned()), values: vec!(2) },
            Series { name: None, values: vec!(7, 6) },
        ));
    }

    #[test]
    fn empty_file_has_no_runs() {
        let scores = ScoreFile::from_reader("".as_bytes()).unwrap();

        assert!(scores.series.is_empty());
    }

    #[test]
    fn label_right_after_label_closes_an_empty_run() {
        let scores = ScoreFile::from_reader(r"3
solverA
solverB".as_bytes()).unwrap();

        assert_eq!(scores.series, vec!(
            Series { name: Some("solverA".to_owned()), values: vec!(3) },
            Series { name: Some("solverB".to_owned()), values: vec!() },
        ));
    }

    #[test]
    fn parsing_twice_gives_the_same_document() {
        let input = r"2
5
solverA
1";
        assert_eq!(
            ScoreFile::from_reader(input.as_bytes()).unwrap(),
            ScoreFile::from_reader(input.as_bytes()).unwrap()
        );
    }

    #[test]
    fn score_line_classification() {
        assert!(is_score_line("0"));
        assert!(is_score_line("593"));

        assert!(!is_score_line(""));
        assert!(!is_score_line("-3"));
        assert!(!is_score_line(" 7"));
        assert!(!is_score_line("1 2"));
        assert!(!is_score_line("solverA"));
    }

    #[test]
    fn signed_and_padded_numbers_are_labels() {
        let scores = ScoreFile::from_reader(r"5
-3
 7".as_bytes()).unwrap();

        assert_eq!(scores.series, vec!(
            Series { name: Some("-3".to_owned()), values: vec!(5) },
            Series { name: Some(" 7".to_owned()), values: vec!() },
        ));
    }

    #[test]
    fn writer_output_parses_back() {
        let mut buffer = vec!();
        {
            let mut writer = ScoreWriter::new(&mut buffer);
            writer.push(13).unwrap();
            writer.push(12).unwrap();
            writer.finish_series("descent").unwrap();
            writer.push(11).unwrap();
            writer.finish_series("taboo").unwrap();
        }

        let scores = ScoreFile::from_reader(&buffer[..]).unwrap();
        assert_eq!(scores.series, vec!(
            Series { name: Some("descent".to_owned()), values: vec!(13, 12) },
            Series { name: Some("taboo".to_owned()), values: vec!(11) },
        ));
    }

    #[test]
    fn writer_rejects_numeric_names() {
        let mut buffer = vec!();
        let mut writer = ScoreWriter::new(&mut buffer);
        writer.push(13).unwrap();

        assert!(writer.finish_series("42").is_err());
    }
}
