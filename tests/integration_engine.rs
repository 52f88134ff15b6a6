//! End-to-end tests driving the engine through the text protocol.
//!
//! Each test feeds a complete command script through a [`Session`] and
//! compares the full output stream byte-for-byte against the reference
//! wire format.

use matchbook::types::{Side, TimeInForce};
use matchbook::{Config, Session};

fn run_script(script: &str) -> String {
    let mut session = Session::new(Config::new());
    let mut out = Vec::new();
    session
        .run(script.as_bytes(), &mut out)
        .expect("script should run to completion");
    String::from_utf8(out).unwrap()
}

#[test]
fn same_price_orders_fill_in_arrival_order() {
    let output = run_script(
        "SELL GFD 100 5 S1\n\
         SELL GFD 100 3 S2\n\
         PRINT\n\
         BUY GFD 100 6 B1\n\
         PRINT\n",
    );

    assert_eq!(
        output,
        "SELL:\n\
         100 8\n\
         BUY:\n\
         TRADE S1 100 5 B1 100 5\n\
         TRADE S2 100 1 B1 100 1\n\
         SELL:\n\
         100 2\n\
         BUY:\n"
    );
}

#[test]
fn ioc_never_rests() {
    let output = run_script(
        "BUY GFD 10 4 B1\n\
         SELL IOC 12 4 S1\n\
         PRINT\n",
    );

    // 12 does not cross 10: no trade, and S1 appears nowhere.
    assert_eq!(output, "SELL:\nBUY:\n10 4\n");
}

#[test]
fn cancelled_order_no_longer_matches() {
    let output = run_script(
        "BUY GFD 10 4 B1\n\
         CANCEL B1\n\
         SELL GFD 10 4 S1\n\
         PRINT\n",
    );

    assert_eq!(output, "SELL:\n10 4\nBUY:\n");
}

#[test]
fn modify_requeues_behind_same_price_orders() {
    let output = run_script(
        "BUY GFD 10 4 B1\n\
         BUY GFD 10 2 B2\n\
         MODIFY B1 BUY 10 4\n\
         SELL GFD 10 2 S1\n\
         PRINT\n",
    );

    // B1 lost its priority without changing a single field, so the sell
    // hits B2 first.
    assert_eq!(
        output,
        "TRADE B2 10 2 S1 10 2\n\
         SELL:\n\
         BUY:\n\
         10 4\n"
    );
}

#[test]
fn modify_can_switch_sides_and_trade() {
    let output = run_script(
        "SELL GFD 20 3 S1\n\
         BUY GFD 10 3 B1\n\
         MODIFY B1 BUY 20 3\n\
         PRINT\n",
    );

    assert_eq!(
        output,
        "TRADE S1 20 3 B1 20 3\n\
         SELL:\n\
         BUY:\n"
    );
}

#[test]
fn duplicate_ids_and_unknown_ids_are_silent() {
    let output = run_script(
        "BUY GFD 10 4 B1\n\
         BUY GFD 11 1 B1\n\
         CANCEL nobody\n\
         MODIFY nobody SELL 5 5\n\
         PRINT\n",
    );

    // The duplicate B1 was dropped whole; the original still rests.
    assert_eq!(output, "SELL:\nBUY:\n10 4\n");
}

#[test]
fn incoming_limit_price_is_reported_verbatim() {
    let output = run_script(
        "SELL GFD 100 4 S1\n\
         BUY GFD 105 4 B1\n",
    );

    // Passive side at its own price, aggressive side at its submitted
    // limit, even though they differ.
    assert_eq!(output, "TRADE S1 100 4 B1 105 4\n");
}

#[test]
fn buy_sweeps_multiple_price_levels_best_first() {
    let output = run_script(
        "SELL GFD 103 2 S3\n\
         SELL GFD 101 2 S1\n\
         SELL GFD 102 2 S2\n\
         BUY GFD 103 5 B1\n\
         PRINT\n",
    );

    assert_eq!(
        output,
        "TRADE S1 101 2 B1 103 2\n\
         TRADE S2 102 2 B1 103 2\n\
         TRADE S3 103 1 B1 103 1\n\
         SELL:\n\
         103 1\n\
         BUY:\n"
    );
}

#[test]
fn malformed_lines_are_skipped_by_default() {
    let output = run_script(
        "BUY GFD 100 5 B1\n\
         BUY GFD -1 5 B2\n\
         SELL LIMIT 100 5 S1\n\
         PRINT\n",
    );

    assert_eq!(output, "SELL:\nBUY:\n100 5\n");
}

#[test]
fn session_and_direct_api_agree() {
    // The same scenario through the typed API instead of the protocol.
    let mut session = Session::new(Config::new());
    let mut book_trades = Vec::new();

    let mut submit = |side, price, qty, id: &str| {
        let trades = session
            .apply(matchbook::types::Command::New {
                side,
                time_in_force: TimeInForce::GoodForDay,
                price,
                quantity: qty,
                id: id.to_string(),
            })
            .unwrap()
            .trades;
        book_trades.extend(trades);
    };

    submit(Side::Sell, 100, 5, "S1");
    submit(Side::Sell, 100, 3, "S2");
    submit(Side::Buy, 100, 6, "B1");

    let lines: Vec<String> = book_trades.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        ["TRADE S1 100 5 B1 100 5", "TRADE S2 100 1 B1 100 1"]
    );
    assert_eq!(session.book().best_ask(), Some((100, 2)));
}
