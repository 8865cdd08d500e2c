//! # StartNodes
//!
//! The first non-blank line holds the number `K` of paths to print per start node. Every further
//! non-blank line names one start node by its first `width` characters; shorter lines are taken
//! as a whole. Start labels are kept in file order, duplicates included.
//!
//! [`StartNodesWriter`] writes a [`Workload`] in the same format.

use std::io::Lines;

use super::*;
use crate::config::DEFAULT_LABEL_WIDTH;

/// Budget and start labels of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    /// Number of lexicographically smallest paths printed per start node
    pub print_budget: u64,
    /// Start labels in file order
    pub start_labels: Vec<String>,
}

/// Reader for start-node files
#[derive(Debug, Clone)]
pub struct StartNodesReader {
    width: usize,
}

impl Default for StartNodesReader {
    fn default() -> Self {
        Self {
            width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl StartNodesReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the label width
    pub fn label_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Reads the budget and all start labels.
    ///
    /// # Errors
    /// `ErrorKind::InvalidData` if the budget line is missing or not a non-negative integer.
    pub fn try_read_workload<R: BufRead>(&self, reader: R) -> Result<Workload> {
        let mut lines = NonBlankLines {
            lines: reader.lines(),
        };

        // blank lines are skipped, so an empty line means the file ended
        let budget_line = lines.next().transpose()?.unwrap_or_default();
        raise_error_unless!(
            !budget_line.is_empty(),
            ErrorKind::InvalidData,
            "start node file holds no path budget"
        );
        let print_budget = budget_line.trim().parse::<u64>().map_err(|_| {
            io_error!(
                ErrorKind::InvalidData,
                format!("invalid path budget {:?}", budget_line.trim())
            )
        })?;

        let start_labels = lines
            .map(|line| {
                line.map(|line| match label_at(&line, 0, self.width) {
                    Some(label) => label.to_string(),
                    None => line.trim_end().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Workload {
            print_budget,
            start_labels,
        })
    }

    /// Reads the workload from a file
    pub fn try_read_workload_file<P: AsRef<Path>>(&self, path: P) -> Result<Workload> {
        self.try_read_workload(BufReader::new(File::open(path)?))
    }
}

/// Writer for start-node files
#[derive(Debug, Clone, Copy, Default)]
pub struct StartNodesWriter;

impl StartNodesWriter {
    /// Creates a new writer
    pub fn new() -> Self {
        Self
    }

    /// Writes the budget line followed by one line per start label
    pub fn try_write_workload<W: Write>(&self, workload: &Workload, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", workload.print_budget)?;
        for label in &workload.start_labels {
            writeln!(writer, "{label}")?;
        }
        Ok(())
    }

    /// Writes the workload to a file
    pub fn try_write_workload_file<P: AsRef<Path>>(
        &self,
        workload: &Workload,
        path: P,
    ) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_workload(workload, &mut writer)?;
        writer.flush()
    }
}

/// Lines without trailing `\r`, skipping blank ones
struct NonBlankLines<R> {
    lines: Lines<R>,
}

impl<R: BufRead> Iterator for NonBlankLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(Ok(strip_cr(&line).to_string())),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Result<Workload> {
        StartNodesReader::new().try_read_workload(input.as_bytes())
    }

    #[test]
    fn budget_and_labels() {
        let workload = read("5\nAAA\n\nAAC\r\nAAA\n").unwrap();
        assert_eq!(workload.print_budget, 5);
        assert_eq!(workload.start_labels, vec!["AAA", "AAC", "AAA"]);
    }

    #[test]
    fn labels_are_cut_to_width() {
        let workload = read(" 2 \nAAAXYZ\nAB\n").unwrap();
        assert_eq!(workload.print_budget, 2);
        assert_eq!(workload.start_labels, vec!["AAA", "AB"]);
    }

    #[test]
    fn budget_only() {
        let workload = read("0\n").unwrap();
        assert_eq!(workload.print_budget, 0);
        assert!(workload.start_labels.is_empty());
    }

    #[test]
    fn bad_budget() {
        for input in ["", "\n\n", "-1\nAAA\n", "five\nAAA\n"] {
            let err = read(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{input:?}");
        }
    }

    #[test]
    fn write_then_read() {
        let workload = Workload {
            print_budget: 7,
            start_labels: vec!["AAA".into(), "QRS".into(), "AAA".into()],
        };

        let mut out = Vec::new();
        StartNodesWriter::new()
            .try_write_workload(&workload, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "7\nAAA\nQRS\nAAA\n");
        assert_eq!(read(std::str::from_utf8(&out).unwrap()).unwrap(), workload);
    }
}
