//! Streams rank labels into a tally and periodically rewrites a report.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::ranks::RANK_GROUPS;
use crate::report::RankReport;
use crate::tally::Tally;

/// Number of lines between two reports.
pub const FLUSH_INTERVAL: u64 = 1000;

/// Somewhere a report can be written to.
pub trait ReportSink {
    fn write_report(&mut self, report: &RankReport) -> io::Result<()>;
}

/// Writes each report to a file, replacing the previous one.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> FileSink {
        FileSink {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn write_report(&mut self, report: &RankReport) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        write!(out, "{}", report)?;
        out.flush()
    }
}

impl<'a, S: ReportSink> ReportSink for &'a mut S {
    fn write_report(&mut self, report: &RankReport) -> io::Result<()> {
        (**self).write_report(report)
    }
}

/// What a finished run processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReporterSummary {
    pub lines: u64,
    pub flushes: u64,
}

/// Tallies labels and writes a cumulative report every [`FLUSH_INTERVAL`] lines.
#[derive(Debug)]
pub struct Reporter<S: ReportSink> {
    sink: S,
    tally: Tally,
    window: u64,
    flushes: u64,
}

impl<S: ReportSink> Reporter<S> {
    pub fn new(sink: S) -> Reporter<S> {
        Reporter {
            sink,
            tally: Tally::new(),
            window: 0,
            flushes: 0,
        }
    }

    /// Get the cumulative tally.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Get the number of reports written so far.
    pub fn flushes(&self) -> u64 {
        self.flushes
    }

    /// Build a report from the current cumulative counts.
    pub fn report(&self) -> RankReport {
        RankReport::new(self.tally.group_counts(RANK_GROUPS))
    }

    /// Record a single line, writing a report if the window is full.
    pub fn push(&mut self, line: &str) -> io::Result<()> {
        self.tally.record(line);
        self.window += 1;

        if self.window == FLUSH_INTERVAL {
            self.window = 0;
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let report = self.report();
        debug!(
            lines = self.tally.total(),
            ranked = report.total(),
            max = report.max(),
            "writing rank report"
        );
        self.sink.write_report(&report)?;
        self.flushes += 1;
        Ok(())
    }

    /// Consume `reader` line by line until it is exhausted.
    ///
    /// A trailing partial window is tallied but not reported.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> io::Result<ReporterSummary> {
        let mut line = String::new();
        while reader.read_line(&mut line)? > 0 {
            self.push(&line)?;
            line.clear();
        }

        let summary = ReporterSummary {
            lines: self.tally.total(),
            flushes: self.flushes,
        };
        info!(
            lines = summary.lines,
            flushes = summary.flushes,
            "input exhausted"
        );
        Ok(summary)
    }

    /// Give back the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    #[derive(Default)]
    struct Recorded {
        reports: Vec<RankReport>,
    }

    impl ReportSink for Recorded {
        fn write_report(&mut self, report: &RankReport) -> io::Result<()> {
            self.reports.push(report.clone());
            Ok(())
        }
    }

    fn input(lines: &[(&str, usize)]) -> String {
        let mut s = String::new();
        for &(label, n) in lines {
            for _ in 0..n {
                s.push_str(label);
                s.push('\n');
            }
        }
        s
    }

    fn count_of(report: &RankReport, name: &str) -> u64 {
        report
            .groups()
            .iter()
            .find(|g| g.name() == name)
            .map(|g| g.count())
            .unwrap()
    }

    #[test]
    fn no_flush_before_interval() {
        let mut reporter = Reporter::new(Recorded::default());
        let summary = reporter
            .run(Cursor::new(input(&[("species", 999)])))
            .unwrap();

        assert_eq!(999, summary.lines);
        assert_eq!(0, summary.flushes);
        assert!(reporter.into_sink().reports.is_empty());
    }

    #[test]
    fn one_flush_at_interval() {
        let mut reporter = Reporter::new(Recorded::default());
        let summary = reporter
            .run(Cursor::new(input(&[("species", 600), ("genus", 400)])))
            .unwrap();

        assert_eq!(1, summary.flushes);
        let reports = reporter.into_sink().reports;
        assert_eq!(1, reports.len());
        assert_eq!(600, count_of(&reports[0], "species"));
        assert_eq!(400, count_of(&reports[0], "genus"));
    }

    #[test]
    fn flushes_are_cumulative() {
        let mut sink = Recorded::default();
        let summary = {
            let mut reporter = Reporter::new(&mut sink);
            reporter
                .run(Cursor::new(input(&[("species", 1500), ("family", 1000)])))
                .unwrap()
        };

        assert_eq!(2500, summary.lines);
        assert_eq!(2, summary.flushes);
        assert_eq!(2, sink.reports.len());

        assert_eq!(1000, count_of(&sink.reports[0], "species"));
        assert_eq!(0, count_of(&sink.reports[0], "family"));

        assert_eq!(1500, count_of(&sink.reports[1], "species"));
        assert_eq!(500, count_of(&sink.reports[1], "family"));
        assert_eq!(2000, sink.reports[1].total());
    }

    #[test]
    fn unmatched_lines_count_toward_window() {
        let mut reporter = Reporter::new(Recorded::default());
        let summary = reporter
            .run(Cursor::new(input(&[("", 500), ("clade", 499), ("order", 1)])))
            .unwrap();

        assert_eq!(1, summary.flushes);
        let reports = reporter.into_sink().reports;
        assert_eq!(1, reports[0].total());
        assert_eq!(100, reports[0].bar_width(count_of(&reports[0], "order")));
    }

    #[test]
    fn all_unmatched_window_still_reports() {
        let mut reporter = Reporter::new(Recorded::default());
        reporter
            .run(Cursor::new(input(&[("clade", 1000)])))
            .unwrap();

        let reports = reporter.into_sink().reports;
        assert_eq!(1, reports.len());
        assert_eq!(0, reports[0].max());
    }

    #[test]
    fn last_line_without_newline() {
        let mut data = input(&[("species", 999)]);
        data.push_str("genus");

        let mut reporter = Reporter::new(Recorded::default());
        let summary = reporter.run(Cursor::new(data)).unwrap();

        assert_eq!(1, summary.flushes);
        assert_eq!(1, reporter.tally().count("genus"));
    }

    #[test]
    fn file_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranks.txt");
        let stale = "stale content that is much longer than any report line\n".repeat(50);
        fs::write(&path, stale).unwrap();

        let mut reporter = Reporter::new(FileSink::new(&path));
        reporter
            .run(Cursor::new(input(&[("species", 2000), ("strain", 1000)])))
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(reporter.report().to_string(), written);
        assert_eq!(9, written.lines().count());
        assert!(written.starts_with("subspecies:    "));
        assert!(written.contains("(2,000)"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("ranks.txt");

        let mut reporter = Reporter::new(FileSink::new(&path));
        let err = reporter
            .run(Cursor::new(input(&[("species", 1000)])))
            .unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());
    }
}
