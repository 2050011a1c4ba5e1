use crate::constants::{EXIT_NOT_A_REPOSITORY, EXIT_OK};
use crate::text;
use anyhow::{Context, Result};
use std::io::BufRead;
use std::ops::ControlFlow;

/// commit counts when local and upstream have both moved on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    pub local: u32,
    pub remote: u32,
}

/// everything a single `git status` scan learns about the repository
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct StatusRecord {
    /// current branch, empty if no "On branch" line was seen
    pub branch: String,

    /// a "Changes to be committed:" section was seen
    pub has_staged_changes: bool,

    /// a "Changes not staged for commit:" section was seen
    pub has_unstaged_changes: bool,

    /// an "Untracked files:" section was seen
    pub has_untracked_files: bool,

    pub ahead: Option<u32>,
    pub behind: Option<u32>,
    pub diverged: Option<Divergence>,

    /// git refused to run: not a repository, or not a work tree
    pub fatal: bool,
}

impl StatusRecord {
    /// process exit code for this scan
    pub fn result_code(&self) -> i32 {
        if self.fatal {
            EXIT_NOT_A_REPOSITORY
        } else {
            EXIT_OK
        }
    }
}

/// working tree sections announced by a header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Staged,
    Unstaged,
    Untracked,
}

/// the single meaning a line of `git status` output has for the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Fatal,
    Branch(&'a str),
    Ahead(u32),
    Behind(u32),
    DivergedHeader,
    SectionHeader(Section),
    Other,
}

const FATAL_PREFIX: &str = "fatal: ";
const BRANCH_PREFIX: &str = "On branch ";
const AHEAD_PREFIX: &str = "Your branch is ahead of ";
const BEHIND_PREFIX: &str = "Your branch is behind ";
const DIVERGED_PREFIX: &str = "Your branch and ";

const SECTION_HEADERS: [(&str, Section); 3] = [
    ("Changes not staged for commit:", Section::Unstaged),
    ("Changes to be committed:", Section::Staged),
    ("Untracked files:", Section::Untracked),
];

/// classify a line (without its terminator); first matching prefix wins
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with(FATAL_PREFIX) {
        LineKind::Fatal
    } else if let Some(branch) = line.strip_prefix(BRANCH_PREFIX) {
        LineKind::Branch(branch)
    } else if line.starts_with(AHEAD_PREFIX) {
        LineKind::Ahead(text::ahead_count(line))
    } else if line.starts_with(BEHIND_PREFIX) {
        LineKind::Behind(text::behind_count(line))
    } else if line.starts_with(DIVERGED_PREFIX) {
        LineKind::DivergedHeader
    } else if let Some((_, section)) = SECTION_HEADERS
        .iter()
        .find(|(header, _)| line.starts_with(header))
    {
        LineKind::SectionHeader(*section)
    } else {
        LineKind::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    /// the previous line opened a divergence message that continues on this one
    AwaitingContinuation,
    /// a fatal line was seen, nothing more is read
    Stopped,
}

/// line-at-a-time builder for a [`StatusRecord`]
#[derive(Debug)]
pub struct Scanner {
    record: StatusRecord,
    state: State,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            record: StatusRecord::default(),
            state: State::Scanning,
        }
    }

    /// consume one line; `Break` means the scan is over and further input is irrelevant
    pub fn feed(&mut self, line: &str) -> ControlFlow<()> {
        let line = text::strip_line_terminator(line);

        match self.state {
            State::Stopped => return ControlFlow::Break(()),
            State::AwaitingContinuation => {
                let (local, remote) = text::diverged_counts(line);
                self.record.diverged = Some(Divergence { local, remote });
                self.state = State::Scanning;
                return ControlFlow::Continue(());
            }
            State::Scanning => {}
        }

        match classify(line) {
            LineKind::Fatal => {
                self.record.fatal = true;
                self.state = State::Stopped;
                return ControlFlow::Break(());
            }
            LineKind::Branch(branch) => {
                // a second "On branch" never appears in real output, keep the first
                if self.record.branch.is_empty() {
                    self.record.branch = branch.to_string();
                }
            }
            LineKind::Ahead(count) => self.record.ahead = Some(count),
            LineKind::Behind(count) => self.record.behind = Some(count),
            LineKind::DivergedHeader => self.state = State::AwaitingContinuation,
            LineKind::SectionHeader(Section::Staged) => self.record.has_staged_changes = true,
            LineKind::SectionHeader(Section::Unstaged) => self.record.has_unstaged_changes = true,
            LineKind::SectionHeader(Section::Untracked) => self.record.has_untracked_files = true,
            LineKind::Other => {}
        }

        ControlFlow::Continue(())
    }

    /// end of input; returns the finished record
    pub fn finish(mut self) -> StatusRecord {
        if self.state == State::AwaitingContinuation {
            crate::warning!("input ended while reading the diverged branch message");
            self.record.diverged = Some(Divergence {
                local: 0,
                remote: 0,
            });
        }
        self.record
    }
}

/// run a [`Scanner`] over every line of `reader`
///
/// bytes that are not valid utf-8 are replaced rather than rejected, so
/// odd file names in the status listing cannot break the prompt; only
/// real read failures are returned as errors
pub fn scan<R: BufRead>(mut reader: R) -> Result<StatusRecord> {
    let mut scanner = Scanner::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read git status output")?;
        if read == 0 {
            break;
        }
        if scanner.feed(&String::from_utf8_lossy(&buf)).is_break() {
            break;
        }
    }

    Ok(scanner.finish())
}
