use log::trace;

use crate::formats::grid::{self, Grid, LabelParser, Position};

use super::{Operation, Statement, StatementError, StatementResult, Trade};
use super::common::{parse_cash, parse_short_date, normalize_whitespace};

const DATE_COLUMN: usize = 1;
const OPERATION_COLUMN: usize = 3;
const MARKET_COLUMN: usize = 4;
const DUE_DATE_COLUMN: usize = 5;
const STOCK_CODE_COLUMN: usize = 6;
const STOCK_DESCRIPTION_COLUMN: usize = 7;
const AMOUNT_COLUMN: usize = 8;
const VALUE_COLUMN: usize = 9;
const TOTAL_COLUMN: usize = 10;

// Marks the operation column in the table header
const OPERATION_TITLE: &str = "C/V";

pub struct TradesParser {
}

impl TradesParser {
    pub fn new() -> Box<dyn LabelParser<Statement, Error = StatementError>> {
        Box::new(TradesParser {})
    }
}

impl LabelParser<Statement> for TradesParser {
    type Error = StatementError;

    fn parse(&self, grid: &Grid, position: Position, statement: &mut Statement) -> StatementResult<()> {
        if grid.cell_or_empty(position.below()).is_empty() ||
            !grid.cell_or_empty(position.right(2)).contains(OPERATION_TITLE) {
            return Err(StatementError::NoMovementOrInvalidFile);
        }

        if statement.trades.is_some() {
            return Ok(());
        }

        let trades = statement.trades.insert(Vec::new());

        for (row_id, row) in grid.rows().enumerate().skip(position.row + 1) {
            // The table has no explicit end, so the first row without a trade date terminates it
            if parse_short_date(grid::get_trimmed_cell(row, DATE_COLUMN)).is_err() {
                trace!("Trade table ends at #{} row.", row_id + 1);
                break;
            }

            let trade = parse_trade(row)?;
            trace!("Trade at #{} row: {:?}.", row_id + 1, trade);
            trades.push(trade);
        }

        Ok(())
    }
}

pub fn parse_trade(row: &[String]) -> StatementResult<Trade> {
    let cell = |column| grid::get_trimmed_cell(row, column);

    let date = cell(DATE_COLUMN);
    let date = parse_short_date(date).map_err(|_| StatementError::InvalidTradeDate(date.to_owned()))?;

    let operation = cell(OPERATION_COLUMN);
    let operation = Operation::parse(operation).ok_or_else(|| {
        StatementError::InvalidOperationType(operation.to_owned())
    })?;

    let market = cell(MARKET_COLUMN);
    if market.is_empty() {
        return Err(StatementError::InvalidMarket);
    }

    let amount = cell(AMOUNT_COLUMN);
    let amount = amount.parse::<i64>().map_err(|_| StatementError::InvalidQuantity(amount.to_owned()))?;

    let value = parse_cash(cell(VALUE_COLUMN)).map_err(StatementError::InvalidValue)?;

    let total = cell(TOTAL_COLUMN);
    let total = parse_cash(total).map_err(|_| StatementError::InvalidTotalValue(total.to_owned()))?;

    Ok(Trade {
        date, operation,
        market: market.to_owned(),
        due_date: cell(DUE_DATE_COLUMN).to_owned(),
        stock_code: cell(STOCK_CODE_COLUMN).to_owned(),
        stock_description: normalize_whitespace(cell(STOCK_DESCRIPTION_COLUMN)),
        amount, value, total,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use super::*;

    const HEADER: [&str; 11] = [
        "", "Data Negócio", "", "C/V", "Mercado", "Prazo", "Código Negociação",
        "Especificação do Ativo", "Quantidade", "Preço (R$)", "Valor Total (R$)",
    ];

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| s!(*cell)).collect()
    }

    fn trade_row() -> Vec<String> {
        row(&["", "05/03/21", "", "C", "BOVESPA", "", "PETR4", "PETROBRAS   PN", "100", "2.550", "255.000"])
    }

    fn petr4() -> Trade {
        Trade {
            date: date!(2021, 3, 5),
            operation: Operation::Buy,
            market: s!("BOVESPA"),
            due_date: s!(""),
            stock_code: s!("PETR4"),
            stock_description: s!("PETROBRAS PN"),
            amount: 100,
            value: 2550,
            total: 255000,
        }
    }

    fn parse_table(rows: Vec<Vec<String>>) -> StatementResult<Statement> {
        let mut grid = vec![row(&HEADER)];
        grid.extend(rows);

        let mut statement = Statement::default();
        TradesParser::new().parse(&Grid::new(grid), Position::new(0, 1), &mut statement)?;
        Ok(statement)
    }

    #[test]
    fn trade() {
        assert_eq!(parse_trade(&trade_row()).unwrap(), petr4());
    }

    #[test]
    fn trimmed_trade() {
        let row = row(&[
            "", " 05/03/21 ", "", " V ", " FRACIONARIO ", " 03/2021 ", " PETR4F ", "  PETROBRAS\t PN  ",
            " 3 ", " 25,50 ", " 76,50 ",
        ]);

        assert_eq!(parse_trade(&row).unwrap(), Trade {
            operation: Operation::Sell,
            market: s!("FRACIONARIO"),
            due_date: s!("03/2021"),
            stock_code: s!("PETR4F"),
            stock_description: s!("PETROBRAS PN"),
            amount: 3,
            value: 2550,
            total: 7650,
            ..petr4()
        });
    }

    #[rstest(column, value, expected,
        case(1, "2021-03-05", "Invalid trade date: \"2021-03-05\""),
        case(3, "X", "Invalid operation type: \"X\""),
        case(3, "c", "Invalid operation type: \"c\""),
        case(4, "  ", "Invalid market"),
        case(8, "1.000", "Invalid quantity: \"1.000\""),
        case(8, "", "Invalid quantity: \"\""),
        case(9, "R$", "cannot parse integer from empty string"),
        case(10, "-", "Invalid total value: \"-\""),
    )]
    fn invalid_trade(column: usize, value: &str, expected: &str) {
        let mut row = trade_row();
        row[column] = s!(value);
        assert_eq!(parse_trade(&row).unwrap_err().to_string(), expected);
    }

    #[test]
    fn value_error_identity() {
        let mut row = trade_row();
        row[9] = s!("");
        assert!(matches!(parse_trade(&row), Err(StatementError::InvalidValue(_))));

        row[9] = s!("2.550");
        row[10] = s!("");
        assert!(matches!(parse_trade(&row), Err(StatementError::InvalidTotalValue(_))));
    }

    #[test]
    fn short_row() {
        let row = row(&["", "05/03/21", "", "C", "BOVESPA", "", "PETR4", "PETROBRAS PN", "100"]);
        assert!(matches!(parse_trade(&row), Err(StatementError::InvalidValue(_))));
    }

    #[test]
    fn table() {
        let mut sell = trade_row();
        sell[3] = s!("V");

        let statement = parse_table(vec![
            trade_row(),
            sell,
            row(&["", "", "", "", "", "", "", "", "", "Total", "510.000"]),
            trade_row(),
        ]).unwrap();

        assert_eq!(statement.trades, Some(vec![petr4(), Trade {
            operation: Operation::Sell,
            ..petr4()
        }]));
    }

    #[test]
    fn table_until_end_of_grid() {
        let statement = parse_table(vec![trade_row()]).unwrap();
        assert_eq!(statement.trades, Some(vec![petr4()]));
    }

    #[test]
    fn table_terminated_by_unpadded_date() {
        let mut unpadded = trade_row();
        unpadded[1] = s!("5/3/21");

        let statement = parse_table(vec![trade_row(), unpadded]).unwrap();
        assert_eq!(statement.trades, Some(vec![petr4()]));
    }

    #[rstest(value,
        case("5/3/21"),
        case("05/03/2021"),
    )]
    fn invalid_trade_date_width(value: &str) {
        let mut row = trade_row();
        row[1] = s!(value);
        assert!(matches!(parse_trade(&row), Err(StatementError::InvalidTradeDate(_))));
    }

    #[test]
    fn table_terminated_by_short_row() {
        let statement = parse_table(vec![trade_row(), row(&["Total"])]).unwrap();
        assert_eq!(statement.trades, Some(vec![petr4()]));
    }

    #[test]
    fn invalid_row_aborts_table() {
        let mut invalid = trade_row();
        invalid[3] = s!("X");

        let error = parse_table(vec![trade_row(), invalid]).unwrap_err();
        assert!(matches!(error, StatementError::InvalidOperationType(ref operation) if operation == "X"));
    }

    #[test]
    fn no_movements() {
        // A non-empty data cell that isn't a trade date yields an empty trade list
        let statement = parse_table(vec![row(&["", "Sem movimentação"])]).unwrap();
        assert_eq!(statement.trades, Some(Vec::new()));

        let error = parse_table(vec![row(&["", ""])]).unwrap_err();
        assert!(matches!(error, StatementError::NoMovementOrInvalidFile));

        let error = parse_table(Vec::new()).unwrap_err();
        assert!(matches!(error, StatementError::NoMovementOrInvalidFile));
    }

    #[test]
    fn invalid_header() {
        let grid = Grid::new(vec![
            row(&["", "Data Negócio", "", "Mercado"]),
            trade_row(),
        ]);

        let error = TradesParser::new().parse(&grid, Position::new(0, 1), &mut Statement::default()).unwrap_err();
        assert!(matches!(error, StatementError::NoMovementOrInvalidFile));

        let grid = Grid::new(vec![row(&["", "Data Negócio"]), trade_row()]);
        let error = TradesParser::new().parse(&grid, Position::new(0, 1), &mut Statement::default()).unwrap_err();
        assert!(matches!(error, StatementError::NoMovementOrInvalidFile));
    }

    #[test]
    fn empty_data_cell_with_marker() {
        let error = parse_table(vec![row(&["", "", "", "C", "BOVESPA"])]).unwrap_err();
        assert!(matches!(error, StatementError::NoMovementOrInvalidFile));
    }

    #[test]
    fn repeated_parsing() {
        let grid = Grid::new(vec![row(&HEADER), trade_row(), trade_row()]);
        let parser = TradesParser::new();

        let mut statement = Statement::default();
        parser.parse(&grid, Position::new(0, 1), &mut statement).unwrap();
        assert_eq!(statement.trades.as_ref().map(Vec::len), Some(2));

        let expected = statement.clone();
        parser.parse(&grid, Position::new(0, 1), &mut statement).unwrap();
        assert_eq!(statement, expected);
    }
}
