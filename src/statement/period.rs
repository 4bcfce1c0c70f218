use log::trace;

use crate::formats::grid::{Grid, LabelParser, Position};
use crate::time::format_date;

use super::{Statement, StatementError, StatementResult};
use super::common::parse_date;

pub struct PeriodParser {
}

impl PeriodParser {
    pub fn new() -> Box<dyn LabelParser<Statement, Error = StatementError>> {
        Box::new(PeriodParser {})
    }
}

impl LabelParser<Statement> for PeriodParser {
    type Error = StatementError;

    fn parse(&self, grid: &Grid, position: Position, statement: &mut Statement) -> StatementResult<()> {
        let value = grid.cell_or_empty(position.below());

        let (start, end) = match value.split(" a ").collect::<Vec<_>>().as_slice() {
            &[start, end] => (start, end),
            _ => return Err(StatementError::InvalidFormat(value.to_owned())),
        };

        let start = parse_date(start).map_err(|_| StatementError::InvalidStartDate(start.to_owned()))?;
        let end = parse_date(end).map_err(|_| StatementError::InvalidEndDate(end.to_owned()))?;
        trace!("Statement period: {} - {}.", format_date(start), format_date(end));

        statement.period_start = Some(start);
        statement.period_end = Some(end);

        Ok(())
    }
}
