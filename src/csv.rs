//! Converts transactions to and from the CSV backup format.
//!
//! The format is one header line followed by one line per transaction:
//!
//! ```text
//! id,title,description,amount,type,date,categoryId
//! 1,Milk,Grocery shop,5.5,EXPENSE,2026-02-10,null
//! ```
//!
//! The header is terminated by `\n` while data rows are terminated by
//! `\r\n`. Existing backup files were written this way, so both terminators
//! must be kept for exports to stay byte-identical across versions.
//!
//! Decoding is best-effort: rows that cannot be converted into a transaction
//! are skipped so that one bad row in a hand-edited backup does not lose the
//! rest of the file.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    models::{Transaction, TransactionType},
};

/// The header line written at the top of every exported document.
const HEADER: &str = "id,title,description,amount,type,date,categoryId";

/// The sentinel written in the category column for uncategorised
/// transactions.
const NO_CATEGORY: &str = "null";

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Encodes `transactions` as a CSV document, in the given order.
///
/// Free-text fields containing commas, quotes, or newlines are quoted with
/// internal quotes doubled. The amount, type, and date columns are never
/// quoted because their values cannot contain special characters.
///
/// Never fails; an empty slice produces just the header line.
pub fn transactions_to_csv(transactions: &[Transaction]) -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');

    for transaction in transactions {
        csv.push_str(&escape_csv_field(transaction.id()));
        csv.push(',');
        csv.push_str(&escape_csv_field(transaction.title()));
        csv.push(',');
        csv.push_str(&escape_csv_field(transaction.description()));
        csv.push(',');
        csv.push_str(&format_amount(transaction.amount()));
        csv.push(',');
        csv.push_str(&transaction.transaction_type().to_string());
        csv.push(',');
        csv.push_str(&transaction.date().to_string());
        csv.push(',');

        match transaction.category_id() {
            Some(category_id) => csv.push_str(&escape_csv_field(category_id)),
            None => csv.push_str(NO_CATEGORY),
        }

        csv.push_str("\r\n");
    }

    csv
}

/// Parses the transactions found in the CSV document `csv`.
///
/// Blank lines are ignored and a leading header line is skipped if present.
/// The header check is a loose prefix match on `id,title` so that documents
/// whose header was mangled by another tool still import.
///
/// Rows that cannot be converted into a transaction (too few fields, an
/// unknown type label, or an unparsable date) are skipped and logged at the
/// `debug` level; an unparsable amount recovers as `0.0` instead of skipping
/// the row. Mixed `\n` and `\r\n` line endings are accepted.
///
/// Never fails; the worst case is an empty vector.
pub fn csv_to_transactions(csv: &str) -> Vec<Transaction> {
    let lines: Vec<&str> = csv.lines().filter(|line| !line.trim().is_empty()).collect();

    let data_lines = match lines.first() {
        Some(first) if first.starts_with("id,title") => &lines[1..],
        _ => &lines[..],
    };

    data_lines
        .iter()
        .filter_map(|line| {
            parse_transaction_row(line)
                .inspect_err(|error| tracing::debug!("Skipping CSV row {line:?}: {error}"))
                .ok()
        })
        .collect()
}

/// Converts a single CSV row into a transaction.
///
/// # Errors
/// This function will return a:
/// - [Error::CsvRowTooShort] if the row has fewer than 6 fields,
/// - [Error::InvalidTransactionType] if the type field is not exactly
///   `INCOME` or `EXPENSE`,
/// - or [Error::InvalidDate] if the date field is not a `YYYY-MM-DD` date.
fn parse_transaction_row(line: &str) -> Result<Transaction, Error> {
    let fields = split_csv_line(line);

    if fields.len() < 6 {
        return Err(Error::CsvRowTooShort(fields.len()));
    }

    let amount = fields[3].parse().unwrap_or(0.0);
    let transaction_type: TransactionType = fields[4].parse()?;
    let date = Date::parse(&fields[5], &DATE_FORMAT)
        .map_err(|error| Error::InvalidDate(fields[5].clone(), error.to_string()))?;
    let category_id = fields
        .get(6)
        .filter(|raw| raw.as_str() != NO_CATEGORY && !raw.trim().is_empty())
        .cloned();

    Ok(
        Transaction::build(&fields[0], &fields[1], amount, transaction_type, date)
            .description(&fields[2])
            .category_id(category_id)
            .finalise(),
    )
}

/// Splits a single line into fields, treating commas inside quoted spans as
/// data and doubled quotes as an escaped quote.
///
/// A line with N commas outside quotes always yields N+1 fields. Unbalanced
/// quotes are tolerated: the scanner simply runs to the end of the line still
/// inside the quoted span.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut characters = line.chars().peekable();

    while let Some(character) = characters.next() {
        match character {
            '"' if in_quotes && characters.peek() == Some(&'"') => {
                current.push('"');
                characters.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(character),
        }
    }

    fields.push(current);

    fields
}

/// Quotes `value` if it contains a comma, quote, or newline, doubling any
/// internal quotes; otherwise returns it unchanged.
fn escape_csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

/// Renders an amount for the CSV document.
///
/// Integral values keep a trailing `.0` (`5000.0` rather than `5000`) because
/// that is how every existing backup file renders them; all other values use
/// the shortest exact representation.
fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod encode_tests {
    use time::macros::date;

    use crate::models::{Transaction, TransactionType};

    use super::{format_amount, transactions_to_csv};

    #[test]
    fn encodes_header_then_one_crlf_row_per_transaction() {
        let transactions = vec![
            Transaction::build(
                "1",
                "Milk",
                5.5,
                TransactionType::Expense,
                date!(2026 - 02 - 10),
            )
            .description("Grocery shop")
            .finalise(),
            Transaction::build(
                "2",
                "Salary",
                5000.0,
                TransactionType::Income,
                date!(2026 - 02 - 11),
            )
            .description("Monthly pay")
            .finalise(),
        ];
        let want = "id,title,description,amount,type,date,categoryId\n\
            1,Milk,Grocery shop,5.5,EXPENSE,2026-02-10,null\r\n\
            2,Salary,Monthly pay,5000.0,INCOME,2026-02-11,null\r\n";

        let result = transactions_to_csv(&transactions);

        assert_eq!(result, want);
    }

    #[test]
    fn encodes_empty_list_as_header_only() {
        assert_eq!(
            transactions_to_csv(&[]),
            "id,title,description,amount,type,date,categoryId\n"
        );
    }

    #[test]
    fn quotes_fields_containing_commas_and_quotes() {
        let transactions = vec![
            Transaction::build(
                "1",
                "Comma, Here",
                10.0,
                TransactionType::Expense,
                date!(2026 - 02 - 10),
            )
            .description("Quote \" Here")
            .finalise(),
        ];
        let want = "id,title,description,amount,type,date,categoryId\n\
            1,\"Comma, Here\",\"Quote \"\" Here\",10.0,EXPENSE,2026-02-10,null\r\n";

        let result = transactions_to_csv(&transactions);

        assert_eq!(result, want);
    }

    #[test]
    fn writes_category_id_verbatim_when_present() {
        let transactions = vec![
            Transaction::build(
                "1",
                "Milk",
                5.5,
                TransactionType::Expense,
                date!(2026 - 02 - 10),
            )
            .category_id(Some("cat1".to_owned()))
            .finalise(),
        ];

        let result = transactions_to_csv(&transactions);

        assert_eq!(
            result,
            "id,title,description,amount,type,date,categoryId\n\
            1,Milk,,5.5,EXPENSE,2026-02-10,cat1\r\n"
        );
    }

    #[test]
    fn formats_integral_amounts_with_trailing_zero() {
        assert_eq!(format_amount(5000.0), "5000.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(-3.0), "-3.0");
    }

    #[test]
    fn formats_fractional_amounts_without_padding() {
        assert_eq!(format_amount(5.5), "5.5");
        assert_eq!(format_amount(-2.25), "-2.25");
        assert_eq!(format_amount(0.1), "0.1");
    }
}


#[cfg(test)]
mod split_csv_line_tests {
    use super::{escape_csv_field, split_csv_line};

    #[test]
    fn yields_one_more_field_than_commas() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_csv_line("a,b,"), vec!["a", "b", ""]);
        assert_eq!(split_csv_line(",,"), vec!["", "", ""]);
        assert_eq!(split_csv_line(""), vec![""]);
    }

    #[test]
    fn keeps_commas_inside_quoted_spans() {
        assert_eq!(
            split_csv_line("1,\"Shop, corner\",5.5"),
            vec!["1", "Shop, corner", "5.5"]
        );
    }

    #[test]
    fn unescapes_doubled_quotes() {
        assert_eq!(
            split_csv_line("\"He said \"\"hi\"\"\",x"),
            vec!["He said \"hi\"", "x"]
        );
    }

    #[test]
    fn drops_quote_characters_around_quoted_fields() {
        assert_eq!(split_csv_line("\"plain\""), vec!["plain"]);
    }

    #[test]
    fn runs_to_end_of_line_on_unbalanced_quotes() {
        assert_eq!(split_csv_line("a,\"b,c"), vec!["a", "b,c"]);
    }

    #[test]
    fn escape_quotes_only_fields_with_special_characters() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field(""), "");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_field("two\nlines"), "\"two\nlines\"");
    }
}
