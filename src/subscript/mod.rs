use std::collections::HashMap;

use actix::{Actor, Context, Recipient};
use tracing::info;
use uuid::Uuid;

use crate::protocol::ServerMessage;

pub mod handlers;
pub mod messages;

/// 연결 id 와 해당 연결로 메시지를 보낼 수 있는 주소를 관리합니다.
///
/// 전송은 모두 `do_send` 로 이루어지므로, 느린 클라이언트가 다음 이벤트 처리를 막지 않습니다.
pub struct SubScriptionManager {
    sessions: HashMap<Uuid, Recipient<ServerMessage>>,
}

impl SubScriptionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }
}

impl Default for SubScriptionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for SubScriptionManager {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("SubScriptionManager started");
    }
}
