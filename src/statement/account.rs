use crate::formats::grid::{Grid, LabelParser, Position};

use super::{Statement, StatementError, StatementResult};
use super::common::SEPARATOR;

/// Parses "<participant name> - <account number>" cell.
pub struct AccountParser {
}

impl AccountParser {
    pub fn new() -> Box<dyn LabelParser<Statement, Error = StatementError>> {
        Box::new(AccountParser {})
    }
}

impl LabelParser<Statement> for AccountParser {
    type Error = StatementError;

    fn parse(&self, grid: &Grid, position: Position, statement: &mut Statement) -> StatementResult<()> {
        let value = grid.cell_or_empty(position.below());

        let account = value.split(SEPARATOR).nth(1)
            .and_then(|account| account.parse::<i64>().ok())
            .ok_or_else(|| StatementError::InvalidParticipant(value.to_owned()))?;

        statement.account = Some(account);
        Ok(())
    }
}
