// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for coin listing across pages
//!
//! Tests focus on:
//! - Termination and request count across multiple pages
//! - Repeated-cursor detection
//! - Coin filtering and exact totals

mod helpers;

use std::sync::Arc;

use helpers::{adapter, coin, coin_page, MockTransport, SUI};
use serde_json::{json, Value};
use suiscan::{CoinPaginator, CoinRecord, NodeError};

const GET_COINS: &str = "suix_getCoins";
const OWNER: &str = "0x02f0";

#[tokio::test]
async fn test_three_pages_make_three_requests() {
    let mock = Arc::new(
        MockTransport::new()
            .with_result(
                GET_COINS,
                coin_page(vec![coin("0x1", SUI, json!("1000000000"))], Some("A"), true),
            )
            .with_result(
                GET_COINS,
                coin_page(vec![coin("0x2", SUI, json!("500000000"))], Some("B"), true),
            )
            .with_result(
                GET_COINS,
                coin_page(vec![coin("0x3", SUI, json!("1000000000000"))], None, false),
            ),
    );

    let coins = adapter(&mock, 10)
        .get_coins_by_address(SUI, OWNER)
        .await
        .unwrap();

    assert_eq!(mock.call_count(GET_COINS), 3);
    assert_eq!(coins.data.len(), 3);
    assert_eq!(coins.total_balance, "1,001.500000000");

    let cursors: Vec<Value> = mock.calls().into_iter().map(|(_, params)| params[2].clone()).collect();
    assert_eq!(cursors, vec![Value::Null, json!("A"), json!("B")]);

    let calls = mock.calls();
    assert_eq!(calls[0].1, vec![json!(OWNER), json!(SUI), Value::Null, json!(100)]);
}

#[tokio::test]
async fn test_repeated_cursor_is_detected() {
    let mock = Arc::new(
        MockTransport::new()
            .with_result(GET_COINS, coin_page(vec![coin("0x1", SUI, json!("1"))], Some("X"), true))
            .with_result(GET_COINS, coin_page(vec![coin("0x1", SUI, json!("1"))], Some("X"), true)),
    );

    let err = adapter(&mock, 10)
        .get_coins_by_address(SUI, OWNER)
        .await
        .unwrap_err();

    match err {
        NodeError::PaginationLoopDetected { address, cursor } => {
            assert_eq!(address, OWNER);
            assert_eq!(cursor, "X");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mock.call_count(GET_COINS), 2);
}

#[tokio::test]
async fn test_cursor_revisited_after_another_is_detected() {
    let mock = Arc::new(
        MockTransport::new()
            .with_result(GET_COINS, coin_page(vec![], Some("A"), true))
            .with_result(GET_COINS, coin_page(vec![], Some("B"), true))
            .with_result(GET_COINS, coin_page(vec![], Some("A"), true)),
    );

    let err = adapter(&mock, 10)
        .get_coins_by_address(SUI, OWNER)
        .await
        .unwrap_err();
    assert!(matches!(err, NodeError::PaginationLoopDetected { ref cursor, .. } if cursor == "A"));
}

#[tokio::test]
async fn test_coins_are_filtered() {
    let mock = Arc::new(MockTransport::new().with_result(
        GET_COINS,
        coin_page(
            vec![
                coin("0x1", SUI, json!("1000")),
                coin("0x2", SUI, json!("0")),
                coin("0x3", "0x5d4b::coin::COIN", json!("5000")),
                coin("0x4", SUI, json!("abc")),
                coin("0x5", SUI, json!(7000)),
                coin("0x6", SUI, json!("2000")),
            ],
            None,
            false,
        ),
    ));

    let coins = adapter(&mock, 10)
        .get_coins_by_address(SUI, OWNER)
        .await
        .unwrap();

    assert_eq!(
        coins.data,
        vec![
            CoinRecord {
                object_id: "0x1".to_string(),
                digest: "D0x1".to_string(),
                balance: "1000".to_string(),
            },
            CoinRecord {
                object_id: "0x6".to_string(),
                digest: "D0x6".to_string(),
                balance: "2000".to_string(),
            },
        ]
    );
    assert_eq!(coins.total_balance, "0.000003000");
}

#[tokio::test]
async fn test_total_is_exact_beyond_u64() {
    let mock = Arc::new(MockTransport::new().with_result(
        GET_COINS,
        coin_page(
            vec![
                coin("0x1", SUI, json!("18446744073709551615")),
                coin("0x2", SUI, json!("18446744073709551615")),
                coin("0x3", SUI, json!("2")),
            ],
            None,
            false,
        ),
    ));

    let coins = adapter(&mock, 10)
        .get_coins_by_address(SUI, OWNER)
        .await
        .unwrap();
    assert_eq!(coins.total_balance, "36,893,488,147.419103232");
}

#[tokio::test]
async fn test_no_coins() {
    let mock = Arc::new(MockTransport::new().with_result(GET_COINS, coin_page(vec![], None, false)));
    let coins = adapter(&mock, 10)
        .get_coins_by_address(SUI, OWNER)
        .await
        .unwrap();
    assert!(coins.data.is_empty());
    assert_eq!(coins.total_balance, "0");
}

#[tokio::test]
async fn test_missing_data_is_format_error() {
    let mock = Arc::new(
        MockTransport::new().with_result(GET_COINS, json!({"nextCursor": null, "hasNextPage": false})),
    );
    let err = adapter(&mock, 10)
        .get_coins_by_address(SUI, OWNER)
        .await
        .unwrap_err();
    assert!(matches!(err, NodeError::UpstreamFormat { .. }));
}

#[tokio::test]
async fn test_has_next_page_false_stops_despite_cursor() {
    let mock = Arc::new(
        MockTransport::new()
            .with_result(GET_COINS, coin_page(vec![coin("0x1", SUI, json!("5"))], Some("Z"), false)),
    );
    let coins = adapter(&mock, 10)
        .get_coins_by_address(SUI, OWNER)
        .await
        .unwrap();
    assert_eq!(mock.call_count(GET_COINS), 1);
    assert_eq!(coins.data.len(), 1);
}

#[tokio::test]
async fn test_page_error_is_wrapped() {
    let mock = Arc::new(MockTransport::new().with_error(GET_COINS, "Invalid params"));
    let err = adapter(&mock, 10)
        .get_coins_by_address(SUI, OWNER)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        NodeError::Rpc { operation: "getCoinsByAddress", ref target, .. } if target == OWNER
    ));
}

#[tokio::test]
async fn test_custom_page_limit() {
    let mock = MockTransport::new().with_result(GET_COINS, coin_page(vec![], None, false));
    CoinPaginator::new(&mock)
        .with_page_limit(25)
        .list_coins(SUI, OWNER)
        .await
        .unwrap();

    let calls = mock.calls();
    assert_eq!(calls[0].1[3], json!(25));
}
