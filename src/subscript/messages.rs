use actix::{Message, Recipient};
use uuid::Uuid;

use crate::protocol::ServerMessage;

#[derive(Message)]
#[rtype(result = "()")]
pub struct Register {
    pub connection_id: Uuid,
    pub addr: Recipient<ServerMessage>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Deregister {
    pub connection_id: Uuid,
}

/// 특정 연결에게만 보냅니다.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ForwardMessage {
    pub connection_id: Uuid,
    pub message: ServerMessage,
}

/// 연결된 모든 클라이언트에게 보냅니다.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Broadcast {
    pub message: ServerMessage,
}

#[derive(Message)]
#[rtype(result = "usize")]
pub struct GetObserverCount;
