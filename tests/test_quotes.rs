mod common;

use marketdesk::application::quotes::QuoteLookup;

#[tokio::test]
async fn test_known_symbols_serve_mock_table_rows() {
    let t = common::setup();

    let cases = [
        ("XAUUSD", 4967.27, 178.27, 3.71, 4789.00),
        ("XAGUSD", 76.895, 0.180, 0.24, 76.715),
        ("^DJI", 50098.00, 1336.00, 2.74, 48762.00),
        ("^NDX", 25033.96, 689.20, 2.83, 24344.76),
        ("^GSPC", 6928.14, 157.25, 2.32, 6770.89),
        ("GER40", 24780.2, 327.9, 1.34, 24452.3),
        ("EURUSD", 1.18149, 0.00375, 0.32, 1.17774),
    ];

    for (symbol, c, d, dp, pc) in cases {
        match t.desk.quote(symbol).await {
            QuoteLookup::Mock { quote } => {
                assert_eq!(quote.c, c, "{symbol} current price");
                assert_eq!(quote.d, d, "{symbol} change");
                assert_eq!(quote.dp, dp, "{symbol} percent change");
                assert_eq!(quote.pc, pc, "{symbol} previous close");
            }
            other => panic!("{symbol} should be mock without credentials, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_unknown_symbol_gets_neutral_placeholder() {
    let t = common::setup();
    match t.desk.quote("NOPE").await {
        QuoteLookup::Mock { quote } => {
            assert_eq!(quote.c, 100.0);
            assert_eq!(quote.d, 0.0);
            assert_eq!(quote.dp, 0.0);
            assert_eq!(quote.pc, 100.0);
        }
        other => panic!("expected mock, got {other:?}"),
    }
}

#[tokio::test]
async fn test_alias_spellings_share_mock_snapshot() {
    let t = common::setup();
    for symbol in ["GER30", "^GDAXI", "GER40"] {
        match t.desk.quote(symbol).await {
            QuoteLookup::Mock { quote } => assert_eq!(quote.c, 24780.2, "{symbol}"),
            other => panic!("expected mock for {symbol}, got {other:?}"),
        }
    }
}
