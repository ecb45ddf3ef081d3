//! Session Integration Tests
//!
//! Drive a fully wired client through its inbound frame pump and observe
//! the session state, the outbound channel and the message log.
//!
//! Run with: cargo test -p integration-tests --test session_tests

use integration_tests::{fixtures::*, next_message, settings, TestClient};
use multiclient_common::{ClientConfig, TransportConfig};
use multiclient_core::{
    ClientPacket, ConnectUpdatePacket, ItemsHandlingFlags, LogMessageKind, NOT_CONNECTED,
};
use multiclient_session::{ConnectionInfoProvider, PacketTransport, SocketError};

// ============================================================================
// Connection Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_connected_assigns_slot() {
    let client = TestClient::start();
    client.connect_with(&settings(&["AP"]));

    client.send_frame(frame(&[connected(0, 1)])).await.unwrap();
    client.wait_for(|c| c.slot() == 1).await.unwrap();

    assert_eq!(client.connection.team(), 0);
    assert_eq!(client.connection.game().as_deref(), Some(GAME));
    assert_eq!(client.connection.tags(), vec!["AP"]);
    assert_eq!(
        client.connection.items_handling(),
        ItemsHandlingFlags::ALL_ITEMS
    );
    assert!(client.connection.uuid().is_some());
}

#[tokio::test]
async fn test_connection_refused_resets() {
    let client = TestClient::start();
    client.connect_with(&settings(&["AP"]));
    assert!(client.connection.game().is_some());

    client
        .send_frame(frame(&[connection_refused(&["InvalidSlot", "InvalidGame"])]))
        .await
        .unwrap();
    client.wait_for(|c| c.game().is_none()).await.unwrap();

    assert_eq!(client.connection.team(), NOT_CONNECTED);
    assert_eq!(client.connection.slot(), NOT_CONNECTED);
    assert!(client.connection.tags().is_empty());
    assert_eq!(
        client.connection.items_handling(),
        ItemsHandlingFlags::NO_ITEMS
    );
    assert!(client.connection.uuid().is_none());
}

#[tokio::test]
async fn test_disconnect_resets_and_closes() {
    let mut client = TestClient::start();
    client.connect_with(&settings(&[]));
    client.send_frame(frame(&[connected(0, 2)])).await.unwrap();
    client.wait_for(|c| c.slot() == 2).await.unwrap();

    client.disconnect().await.unwrap();

    assert!(client.socket.is_closed());
    assert!(client.connection.slot_assignment().is_none());
    assert!(client.connection.game().is_none());

    let err = client.connection.update_tags(vec!["AP".to_string()]).unwrap_err();
    assert!(matches!(err, SocketError::ChannelClosed));
}

#[tokio::test]
async fn test_unknown_packets_leave_state_alone() {
    let client = TestClient::start();
    client.connect_with(&settings(&["AP"]));
    let before = client.connection.snapshot();

    client
        .send_frame(frame(&[room_update(), connected(0, 1)]))
        .await
        .unwrap();
    client.wait_for(|c| c.slot() == 1).await.unwrap();

    assert_eq!(client.connection.uuid(), before.uuid());
    assert_eq!(client.connection.tags(), before.tags());
}

#[tokio::test]
async fn test_malformed_frame_is_skipped() {
    let client = TestClient::start();

    client.send_frame("not json".to_string()).await.unwrap();
    client
        .send_frame(r#"{"cmd":"Connected","team":0,"slot":1}"#.to_string())
        .await
        .unwrap();
    client.send_frame(frame(&[connected(0, 1)])).await.unwrap();

    client.wait_for(|c| c.slot() == 1).await.unwrap();
    assert!(!client.socket.is_closed());
}

// ============================================================================
// Connection Option Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_tags_sends_one_packet() {
    let mut client = TestClient::start();
    client.connect_with(&settings(&["AP"]));
    client.send_frame(frame(&[connected(0, 1)])).await.unwrap();
    client.wait_for(|c| c.slot() == 1).await.unwrap();
    let uuid = client.connection.uuid();

    client
        .connection
        .update_tags(vec!["AP".to_string(), "DeathLink".to_string()])
        .unwrap();

    let packet = client.next_outbound().await.unwrap();
    assert_eq!(
        packet,
        ClientPacket::from(ConnectUpdatePacket::new(
            vec!["AP".to_string(), "DeathLink".to_string()],
            ItemsHandlingFlags::ALL_ITEMS,
        ))
    );
    assert!(client.outbound.try_recv().is_err());

    assert_eq!(client.connection.game().as_deref(), Some(GAME));
    assert_eq!(client.connection.uuid(), uuid);
    assert_eq!(client.connection.slot(), 1);
}

#[tokio::test]
async fn test_update_items_handling_keeps_tags() {
    let mut client = TestClient::start();
    client.connect_with(&settings(&["AP"]));

    client
        .connection
        .update_items_handling(ItemsHandlingFlags::INCLUDE_STARTING_INVENTORY)
        .unwrap();

    let ClientPacket::ConnectUpdate(packet) = client.next_outbound().await.unwrap();
    assert_eq!(packet.tags, vec!["AP"]);
    assert_eq!(
        packet.items_handling,
        ItemsHandlingFlags::INCLUDE_STARTING_INVENTORY
    );
    assert_eq!(
        client.connection.items_handling(),
        ItemsHandlingFlags::INCLUDE_STARTING_INVENTORY
    );
}

#[tokio::test]
async fn test_update_wire_format() {
    let mut client = TestClient::start();

    client
        .connection
        .update_connection_options(vec!["Tracker".to_string()], ItemsHandlingFlags::NO_ITEMS)
        .unwrap();

    let packet = client.next_outbound().await.unwrap();
    let wire = multiclient_core::encode_batch(&[packet]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&wire).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "cmd": "ConnectUpdate", "tags": ["Tracker"], "items_handling": 0 }
        ])
    );
}

#[tokio::test]
async fn test_full_outbound_buffer() {
    let mut client = TestClient::start_with_config(TransportConfig {
        outbound_buffer: 1,
        message_buffer: 8,
    });

    client.connection.update_tags(vec!["A".to_string()]).unwrap();
    let err = client
        .connection
        .update_tags(vec!["B".to_string()])
        .unwrap_err();
    assert!(matches!(err, SocketError::BufferFull(_)));

    // Local state is applied even when the update could not be queued
    assert_eq!(client.connection.tags(), vec!["B"]);

    let ClientPacket::ConnectUpdate(first) = client.next_outbound().await.unwrap();
    assert_eq!(first.tags, vec!["A"]);
    client
        .socket
        .send_packet(ConnectUpdatePacket::new(Vec::new(), ItemsHandlingFlags::NO_ITEMS).into())
        .unwrap();
}

#[tokio::test]
async fn test_zero_buffers_are_usable() {
    let mut client = TestClient::start_with_config(TransportConfig {
        outbound_buffer: 0,
        message_buffer: 0,
    });
    let mut rx = client.log.subscribe();

    client.connection.update_tags(vec!["AP".to_string()]).unwrap();
    let ClientPacket::ConnectUpdate(update) = client.next_outbound().await.unwrap();
    assert_eq!(update.tags, vec!["AP"]);

    client.send_frame(frame(&[join(2, &[])])).await.unwrap();
    let message = next_message(&mut rx).await.unwrap();
    assert_eq!(message.to_string(), "Zelda has joined.");
}

#[tokio::test]
async fn test_settings_from_config() {
    let config = ClientConfig::from_lookup(|key| match key {
        "MULTICLIENT_GAME" => Some(GAME.to_string()),
        "MULTICLIENT_TAGS" => Some("AP,TextOnly".to_string()),
        "MULTICLIENT_ITEMS_HANDLING" => Some("3".to_string()),
        "MULTICLIENT_UUID" => Some("fixed-uuid".to_string()),
        _ => None,
    })
    .unwrap();

    let client = TestClient::start_with_config(config.transport);
    client.connect_with(&config.connection);

    assert_eq!(client.connection.tags(), vec!["AP", "TextOnly"]);
    assert_eq!(
        client.connection.items_handling(),
        ItemsHandlingFlags::INCLUDE_OWN_ITEMS
    );
    assert_eq!(client.connection.uuid().as_deref(), Some("fixed-uuid"));
}

// ============================================================================
// Message Log Tests
// ============================================================================

#[tokio::test]
async fn test_join_message_for_active_player() {
    let client = TestClient::start();
    let mut rx = client.log.subscribe();
    client.connect_with(&settings(&["AP"]));

    client
        .send_frame(frame(&[connected(0, 1), join(1, &["AP"])]))
        .await
        .unwrap();

    let message = next_message(&mut rx).await.unwrap();
    assert_eq!(message.to_string(), "Hero has joined.");
    assert_eq!(
        message.kind(),
        &LogMessageKind::Join {
            tags: vec!["AP".to_string()]
        }
    );
    assert!(message.is_active_player());
    assert!(message.is_related_to_active_player());
}

#[tokio::test]
async fn test_join_message_of_other_player() {
    let client = TestClient::start();
    let mut rx = client.log.subscribe();

    client
        .send_frame(frame(&[connected(0, 1), join(2, &["Tracker"])]))
        .await
        .unwrap();

    let message = next_message(&mut rx).await.unwrap();
    assert_eq!(message.to_string(), "Zelda has joined.");
    assert_eq!(message.slot(), 2);
    assert!(!message.is_active_player());
    assert_eq!(message.player().map(|p| p.game.as_str()), Some(OTHER_GAME));
}

#[tokio::test]
async fn test_item_message_resolves_names() {
    let client = TestClient::start();
    let mut rx = client.log.subscribe();

    client
        .send_frame(frame(&[item_send(MASTER_SWORD, 1)]))
        .await
        .unwrap();

    let message = next_message(&mut rx).await.unwrap();
    assert_eq!(message.kind(), &LogMessageKind::Plain);
    assert_eq!(
        message.to_string(),
        "Hero found their Master Sword at Link's House"
    );
}

#[tokio::test]
async fn test_unknown_item_placeholder() {
    let client = TestClient::start();
    let mut rx = client.log.subscribe();

    client.send_frame(frame(&[item_send(4242, 1)])).await.unwrap();

    let message = next_message(&mut rx).await.unwrap();
    assert_eq!(
        message.to_string(),
        "Hero found their Unknown item (4242) at Link's House"
    );
}

#[tokio::test]
async fn test_messages_survive_disconnect() {
    let mut client = TestClient::start();
    let mut rx = client.log.subscribe();
    client.connect_with(&settings(&["AP"]));

    client
        .send_frame(frame(&[connected(0, 1), join(1, &["AP"])]))
        .await
        .unwrap();
    let message = next_message(&mut rx).await.unwrap();

    client.disconnect().await.unwrap();
    assert_eq!(client.connection.slot(), NOT_CONNECTED);

    assert!(message.is_active_player());
    assert_eq!(message.slot(), 1);
    assert_eq!(message.tags(), Some(&["AP".to_string()][..]));
}
