//! Line-oriented text protocol.
//!
//! One command per line, whitespace-separated fields:
//!
//! ```text
//! BUY GFD|IOC <price> <quantity> <id>
//! SELL GFD|IOC <price> <quantity> <id>
//! CANCEL <id>
//! MODIFY <id> BUY|SELL <price> <quantity>
//! PRINT
//! ```
//!
//! Parsing is the only direction handled here; the output side of the
//! protocol is the `Display` impls on [`Trade`](crate::types::Trade) and
//! [`Depth`](crate::orderbook::Depth).

use crate::error::ParseError;
use crate::types::{Command, Side, TimeInForce};

/// Parse one protocol line into a [`Command`].
///
/// Returns `Ok(None)` for a line containing no tokens. Numeric fields must
/// be positive integers; anything else is a [`ParseError`] naming the
/// offending field.
///
/// # Errors
///
/// Returns a [`ParseError`] for an unknown verb, missing or malformed
/// fields, or trailing tokens after a complete command.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Ok(None);
    };

    let command = match verb {
        "BUY" | "SELL" => {
            let side = if verb == "BUY" { Side::Buy } else { Side::Sell };
            let time_in_force = parse_time_in_force(next_field(&mut tokens, "time-in-force")?)?;
            let price = parse_positive("price", next_field(&mut tokens, "price")?)?;
            let quantity = parse_positive("quantity", next_field(&mut tokens, "quantity")?)?;
            let id = next_field(&mut tokens, "order id")?.to_string();
            Command::New {
                side,
                time_in_force,
                price,
                quantity,
                id,
            }
        }
        "CANCEL" => Command::Cancel {
            id: next_field(&mut tokens, "order id")?.to_string(),
        },
        "MODIFY" => {
            let id = next_field(&mut tokens, "order id")?.to_string();
            let side = parse_side(next_field(&mut tokens, "side")?)?;
            let price = parse_positive("price", next_field(&mut tokens, "price")?)?;
            let quantity = parse_positive("quantity", next_field(&mut tokens, "quantity")?)?;
            Command::Modify {
                id,
                side,
                price,
                quantity,
            }
        }
        "PRINT" => Command::Snapshot,
        other => return Err(ParseError::UnknownVerb(other.to_string())),
    };

    if let Some(extra) = tokens.next() {
        return Err(ParseError::TrailingInput(extra.to_string()));
    }
    Ok(Some(command))
}

fn next_field<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    tokens.next().ok_or(ParseError::MissingField(name))
}

fn parse_side(token: &str) -> Result<Side, ParseError> {
    match token {
        "BUY" => Ok(Side::Buy),
        "SELL" => Ok(Side::Sell),
        other => Err(ParseError::UnknownSide(other.to_string())),
    }
}

fn parse_time_in_force(token: &str) -> Result<TimeInForce, ParseError> {
    match token {
        "GFD" => Ok(TimeInForce::GoodForDay),
        "IOC" => Ok(TimeInForce::ImmediateOrCancel),
        other => Err(ParseError::UnknownTimeInForce(other.to_string())),
    }
}

fn parse_positive(field: &'static str, token: &str) -> Result<u64, ParseError> {
    match token.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidNumber {
            field,
            value: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new_order() {
        let cmd = parse_line("BUY GFD 100 5 order1").unwrap();
        assert_eq!(
            cmd,
            Some(Command::New {
                side: Side::Buy,
                time_in_force: TimeInForce::GoodForDay,
                price: 100,
                quantity: 5,
                id: "order1".to_string(),
            })
        );

        let cmd = parse_line("SELL IOC 7 1 s").unwrap();
        assert_eq!(
            cmd,
            Some(Command::New {
                side: Side::Sell,
                time_in_force: TimeInForce::ImmediateOrCancel,
                price: 7,
                quantity: 1,
                id: "s".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_cancel_modify_print() {
        assert_eq!(
            parse_line("CANCEL order1").unwrap(),
            Some(Command::Cancel {
                id: "order1".to_string()
            })
        );
        assert_eq!(
            parse_line("MODIFY order1 SELL 99 2").unwrap(),
            Some(Command::Modify {
                id: "order1".to_string(),
                side: Side::Sell,
                price: 99,
                quantity: 2,
            })
        );
        assert_eq!(parse_line("PRINT").unwrap(), Some(Command::Snapshot));
    }

    #[test]
    fn test_blank_line_is_nothing() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \t ").unwrap(), None);
    }

    #[test]
    fn test_unknown_verb() {
        assert_eq!(
            parse_line("HOLD 1 2 3"),
            Err(ParseError::UnknownVerb("HOLD".to_string()))
        );
    }

    #[test]
    fn test_missing_and_trailing_fields() {
        assert_eq!(
            parse_line("BUY GFD 100 5"),
            Err(ParseError::MissingField("order id"))
        );
        assert_eq!(
            parse_line("PRINT now"),
            Err(ParseError::TrailingInput("now".to_string()))
        );
        assert_eq!(
            parse_line("CANCEL"),
            Err(ParseError::MissingField("order id"))
        );
    }

    #[test]
    fn test_nonpositive_numbers_rejected() {
        assert_eq!(
            parse_line("BUY GFD 0 5 x"),
            Err(ParseError::InvalidNumber {
                field: "price",
                value: "0".to_string()
            })
        );
        assert_eq!(
            parse_line("BUY GFD 100 -5 x"),
            Err(ParseError::InvalidNumber {
                field: "quantity",
                value: "-5".to_string()
            })
        );
        assert_eq!(
            parse_line("MODIFY x BUY ten 5"),
            Err(ParseError::InvalidNumber {
                field: "price",
                value: "ten".to_string()
            })
        );
    }

    #[test]
    fn test_bad_tif_and_side() {
        assert_eq!(
            parse_line("BUY FOK 100 5 x"),
            Err(ParseError::UnknownTimeInForce("FOK".to_string()))
        );
        assert_eq!(
            parse_line("MODIFY x HOLD 100 5"),
            Err(ParseError::UnknownSide("HOLD".to_string()))
        );
    }
}
