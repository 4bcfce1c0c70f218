use log::trace;

use super::{Grid, Position};

/// Parses the data a label points to and stores it into the statement being built.
pub trait LabelParser<S> {
    type Error;

    fn parse(&self, grid: &Grid, position: Position, statement: &mut S) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Contains,
    Prefix,
    Exact,
}

impl MatchMode {
    pub fn matches(self, cell: &str, title: &str) -> bool {
        match self {
            MatchMode::Contains => cell.contains(title),
            MatchMode::Prefix => cell.starts_with(title),
            MatchMode::Exact => cell == title,
        }
    }
}

pub struct Label<S, E> {
    title: &'static str,
    mode: MatchMode,
    parser: Box<dyn LabelParser<S, Error = E>>,
}

impl<S, E> Label<S, E> {
    pub fn new(title: &'static str, parser: Box<dyn LabelParser<S, Error = E>>) -> Label<S, E> {
        Label {
            title, parser,
            mode: MatchMode::Contains,
        }
    }

    pub fn by_prefix(self) -> Label<S, E> {
        self.mode(MatchMode::Prefix)
    }

    pub fn mode(mut self, mode: MatchMode) -> Label<S, E> {
        self.mode = mode;
        self
    }

    fn matches(&self, cell: &str) -> bool {
        self.mode.matches(cell, self.title)
    }
}

/// Scans the grid top to bottom, left to right, dispatching every cell that matches a label to
/// the label's parser.
///
/// Labels are tried in the order they were registered, so a cell matching several labels is
/// parsed by all of them in that order. Scanning stops as soon as `completed` returns true for
/// the statement, even in the middle of a row: the labels that follow are never reached.
pub struct GridStatementParser<S, E> {
    labels: Vec<Label<S, E>>,
    completed: fn(&S) -> bool,
}

impl<S, E> GridStatementParser<S, E> {
    pub fn new(labels: Vec<Label<S, E>>, completed: fn(&S) -> bool) -> GridStatementParser<S, E> {
        GridStatementParser {labels, completed}
    }

    pub fn parse(&self, grid: &Grid, statement: &mut S) -> Result<(), E> {
        for (row_id, row) in grid.rows().enumerate() {
            for (column_id, cell) in row.iter().enumerate() {
                for label in &self.labels {
                    if (self.completed)(statement) {
                        return Ok(());
                    }

                    if !label.matches(cell) {
                        continue;
                    }

                    let position = Position::new(row_id, column_id);
                    trace!("Got {:?} label at {}.", label.title, position);

                    label.parser.parse(grid, position, statement)?;
                }
            }
        }

        Ok(())
    }
}
