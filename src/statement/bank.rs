use log::trace;

use crate::formats::grid::{Grid, LabelParser, Position};

use super::{Statement, StatementError, StatementResult};
use super::common::SEPARATOR;

/// Parses "<institution code> - <institution name>" cell. The name may contain the separator
/// itself.
pub struct BankParser {
}

impl BankParser {
    pub fn new() -> Box<dyn LabelParser<Statement, Error = StatementError>> {
        Box::new(BankParser {})
    }
}

impl LabelParser<Statement> for BankParser {
    type Error = StatementError;

    fn parse(&self, grid: &Grid, position: Position, statement: &mut Statement) -> StatementResult<()> {
        let value = grid.cell_or_empty(position.below());

        let (code, name) = value.split_once(SEPARATOR).ok_or_else(|| {
            StatementError::InvalidInstitution(value.to_owned())
        })?;

        let code = code.parse::<i64>().map_err(|_| StatementError::InvalidInstitutionCode(code.to_owned()))?;
        trace!("Financial institution: {code} ({name}).");

        statement.bank_code = Some(code);
        statement.bank_name = Some(name.to_owned());

        Ok(())
    }
}
