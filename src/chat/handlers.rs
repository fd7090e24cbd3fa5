/**
 * Chat WebSocket Handler
 *
 * This module implements the /ws endpoint. A connection authenticates
 * during the HTTP upgrade (Bearer header, `token` cookie, or `token`
 * query parameter for browser WebSocket clients that cannot set headers)
 * and then exchanges JSON events:
 *
 * - client -> server: `join_room`, `leave_room`, `send_message`
 * - server -> client: `receive_message`
 *
 * Messages fan out through the per-room broadcast channels in
 * [`crate::chat::state::ChatRooms`]. The sender identity is always taken
 * from the session; a client cannot spoof another sender. Sending to a
 * room does not require having joined it, only receiving does.
 */

use std::collections::HashMap;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio_stream::{wrappers::BroadcastStream, StreamMap};

use crate::chat::state::{ChatRooms, RoomMessage};
use crate::middleware::auth::{authenticate_token, token_from_headers, AuthenticatedUser};

/// Event sent by the client
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    JoinRoom {
        #[serde(rename = "roomId")]
        room_id: String,
    },
    LeaveRoom {
        #[serde(rename = "roomId")]
        room_id: String,
    },
    SendMessage {
        #[serde(rename = "roomId")]
        room_id: String,
        content: String,
    },
}

/// Event pushed to the client
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    ReceiveMessage {
        #[serde(rename = "roomId")]
        room_id: String,
        sender: String,
        content: String,
        timestamp: String,
    },
}

impl From<RoomMessage> for ServerEvent {
    fn from(message: RoomMessage) -> Self {
        Self::ReceiveMessage {
            room_id: message.room_id,
            sender: message.sender,
            content: message.content,
            timestamp: message.timestamp.to_rfc3339(),
        }
    }
}

/// Handle the WebSocket upgrade (GET /ws)
///
/// Authentication happens before the upgrade completes; an unauthenticated
/// request is refused with 401 and never becomes a socket.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(chat_rooms): State<ChatRooms>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, StatusCode> {
    let token = token_from_headers(&headers)
        .or_else(|| query.get("token").cloned())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let user = authenticate_token(&token)?;

    tracing::info!(email = %user.email, "chat connection authenticated");

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, chat_rooms, user)))
}

/// Run one chat connection until the client disconnects
async fn handle_socket(socket: WebSocket, chat_rooms: ChatRooms, user: AuthenticatedUser) {
    let (mut sink, mut stream) = socket.split();

    // One broadcast subscription per joined room, keyed by room id.
    let mut subscriptions: StreamMap<String, BroadcastStream<RoomMessage>> = StreamMap::new();

    loop {
        tokio::select! {
            incoming = stream.next() => {
                let Some(Ok(message)) = incoming else {
                    break;
                };
                match message {
                    Message::Text(text) => {
                        if let Err(close) =
                            handle_client_event(&text, &chat_rooms, &user, &mut subscriptions)
                        {
                            tracing::warn!(email = %user.email, reason = close, "dropping malformed chat event");
                        }
                    }
                    Message::Close(_) => break,
                    // Pings are answered by axum automatically
                    _ => {}
                }
            }
            broadcast = subscriptions.next(), if !subscriptions.is_empty() => {
                match broadcast {
                    Some((_, Ok(message))) => {
                        let event = ServerEvent::from(message);
                        let Ok(payload) = serde_json::to_string(&event) else {
                            continue;
                        };
                        if sink.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    Some((room_id, Err(lag))) => {
                        tracing::warn!(%room_id, %lag, "chat subscriber lagged, messages dropped");
                    }
                    None => {}
                }
            }
        }
    }

    tracing::info!(email = %user.email, "chat connection closed");
}

/// Apply a single client event to the connection's subscriptions
fn handle_client_event(
    text: &str,
    chat_rooms: &ChatRooms,
    user: &AuthenticatedUser,
    subscriptions: &mut StreamMap<String, BroadcastStream<RoomMessage>>,
) -> Result<(), &'static str> {
    let event: ClientEvent = serde_json::from_str(text).map_err(|_| "unparseable event")?;

    match event {
        ClientEvent::JoinRoom { room_id } => {
            let receiver = chat_rooms.get_sender(&room_id).subscribe();
            subscriptions.insert(room_id.clone(), BroadcastStream::new(receiver));
            tracing::debug!(email = %user.email, %room_id, "joined room");
        }
        ClientEvent::LeaveRoom { room_id } => {
            subscriptions.remove(&room_id);
            tracing::debug!(email = %user.email, %room_id, "left room");
        }
        ClientEvent::SendMessage { room_id, content } => {
            chat_rooms.broadcast(RoomMessage {
                room_id,
                sender: user.email.clone(),
                content,
                timestamp: Utc::now(),
            });
        }
    }
    Ok(())
}
