use std::fmt::Write as _;

use log::info;

use crate::engine::display::{StatusSink, TextSink};
use crate::model::input::{Multiplier, TableBound};
use crate::model::message::{MessageRegion, OutputRegion, StatusMessage};
use crate::model::validation::{FieldError, ValidationError, Validator};

pub const WELCOME: &str =
    "Welcome to the Multiplication Table generator\nEnter the details to be used";
pub const GENERATED: &str =
    "Multiplication Table has been generated\nThank you for choosing MidTown IT";

/// Builds the table text for `username`, rows `1..=bound`.
///
/// Every invalid field is reported at once; nothing is produced unless all
/// of them pass.
pub fn generate(
    username: &str,
    multiplier_text: &str,
    bound: TableBound,
) -> Result<String, ValidationError> {
    let mut check = Validator::new();
    check.check(!username.is_empty(), FieldError::UsernameEmpty);
    // Blank-but-present text is a bad integer, not a missing one.
    let multiplier = if multiplier_text.is_empty() {
        check.reject(FieldError::MultiplierEmpty);
        None
    } else {
        let parsed = Multiplier::parse(multiplier_text.trim());
        check.check(parsed.is_some(), FieldError::MultiplierNotInteger);
        parsed
    };
    check.finish()?;

    let Some(multiplier) = multiplier else {
        return Err(ValidationError {
            fields: vec![FieldError::MultiplierNotInteger],
        });
    };

    let mut text = format!("{username}'s Table:\n\n");
    for multiplicand in 1..=bound.get() {
        let product = multiplier.times(multiplicand);
        // Writing into a String cannot fail.
        let _ = writeln!(text, "{multiplicand} x {multiplier} = {product}");
    }

    Ok(text)
}

/// Runs [`generate`] and pushes the outcome to the display: the table (or an
/// empty box) plus a status line.
pub fn present<D>(display: &mut D, username: &str, multiplier_text: &str, bound: TableBound)
where
    D: StatusSink + TextSink,
{
    match generate(username, multiplier_text, bound) {
        Ok(text) => {
            info!("table: generated {} rows for {username}", bound.get());
            display.write_output(OutputRegion::Table, &text);
            display.show_status(MessageRegion::Table, StatusMessage::info(GENERATED));
        }
        Err(err) => {
            info!("table: rejected ({} invalid fields)", err.fields.len());
            display.write_output(OutputRegion::Table, "");
            display.show_status(MessageRegion::Table, StatusMessage::error(err.to_string()));
        }
    }
}
