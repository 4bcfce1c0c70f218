//! InfoCEI statement parsing.
//!
//! The statement is a semi-tabular CSV export: labelled header blocks scattered across
//! irregular columns followed by a fixed-column trade table. Every known label is searched
//! for in the whole grid and the data it points to is decoded by a label-specific parser.

mod account;
mod bank;
mod common;
mod error;
mod period;
mod trades;

use std::fmt;

use log::debug;
use serde::{Serialize, Serializer};

use crate::formats::grid::{Grid, GridStatementParser, Label};
use crate::types::Date;

pub use self::error::{ErrorKind, StatementError, StatementResult};

use self::account::AccountParser;
use self::bank::BankParser;
use self::period::PeriodParser;
use self::trades::TradesParser;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statement {
    pub period_start: Option<Date>,
    pub period_end: Option<Date>,
    pub account: Option<i64>,
    pub bank_code: Option<i64>,
    pub bank_name: Option<String>,
    /// `None` until the trade table is found. The table may have no trades.
    pub trades: Option<Vec<Trade>>,
}

impl Statement {
    pub fn read(path: &str) -> StatementResult<Statement> {
        let grid = Grid::read(path)?;
        Statement::parse(&grid)
    }

    pub fn parse(grid: &Grid) -> StatementResult<Statement> {
        let mut statement = Statement::default();
        new_parser().parse(grid, &mut statement)?;

        match serde_json::to_string(&statement) {
            Ok(dump) => debug!("Statement: {dump}."),
            Err(err) => debug!("Statement: {statement:?} ({err})."),
        }

        Ok(statement)
    }

    fn is_complete(&self) -> bool {
        self.trades.is_some()
    }
}

// Metadata labels must precede the trade table: scanning ends as soon as it's parsed.
fn new_parser() -> GridStatementParser<Statement, StatementError> {
    GridStatementParser::new(vec![
        Label::new("Período de", PeriodParser::new()),
        Label::new("Participante de Negociação", AccountParser::new()),
        Label::new("Código / Nome", BankParser::new()),
        Label::new("Data Negócio", TradesParser::new()),
    ], Statement::is_complete)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    pub date: Date,
    pub operation: Operation,
    pub market: String,
    pub due_date: String,
    pub stock_code: String,
    pub stock_description: String,
    pub amount: i64,
    /// In minor currency units
    pub value: i64,
    /// In minor currency units
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Buy,
    Sell,
}

impl Operation {
    pub fn parse(code: &str) -> Option<Operation> {
        Some(match code {
            "C" => Operation::Buy,
            "V" => Operation::Sell,
            _ => return None,
        })
    }

    pub fn code(self) -> &'static str {
        match self {
            Operation::Buy => "C",
            Operation::Sell => "V",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
