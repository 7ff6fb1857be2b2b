use std::time::{Duration, Instant};

use actix::{Actor, ActorContext, Addr, AsyncContext, Handler, Running, StreamHandler};
use actix_web_actors::ws;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    exception::GameError,
    protocol::{ClientMessage, ServerMessage},
    subscript::{
        messages::{Deregister, Register},
        SubScriptionManager,
    },
    table::{
        messages::{JoinTable, LeaveTable, PlayCard},
        TableActor,
    },
};

type Ctx = ws::WebsocketContext<PlayerSession>;

fn send_message(ctx: &mut Ctx, message: &ServerMessage) {
    match serde_json::to_string(message) {
        Ok(text) => ctx.text(text),
        Err(e) => warn!("Failed to serialize ServerMessage for client: {}", e),
    }
}

/// 클라이언트 연결 하나.
///
/// 연결마다 고유 id 를 받고, 이 id 가 입장 후 플레이어 id 가 됩니다.
pub struct PlayerSession {
    connection_id: Uuid,
    hb: Instant,
    table_addr: Addr<TableActor>,
    sub_manager_addr: Addr<SubScriptionManager>,
    heartbeat_interval: Duration,
    client_timeout: Duration,
}

impl PlayerSession {
    pub fn new(
        table_addr: Addr<TableActor>,
        sub_manager_addr: Addr<SubScriptionManager>,
        heartbeat_interval: Duration,
        client_timeout: Duration,
    ) -> Self {
        Self {
            connection_id: Uuid::new_v4(),
            hb: Instant::now(),
            table_addr,
            sub_manager_addr,
            heartbeat_interval,
            client_timeout,
        }
    }

    fn hb(&self, ctx: &mut Ctx) {
        ctx.run_interval(self.heartbeat_interval, |act, ctx| {
            if Instant::now().duration_since(act.hb) > act.client_timeout {
                info!(
                    "Websocket client {} heartbeat failed, disconnecting!",
                    act.connection_id
                );
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }

    fn handle_text(&mut self, ctx: &mut Ctx, text: &str) {
        match serde_json::from_str::<ClientMessage>(text) {
            Ok(ClientMessage::Join) => {
                self.table_addr.do_send(JoinTable {
                    connection_id: self.connection_id,
                });
            }
            Ok(ClientMessage::PlayCard {
                player_id,
                card_index,
            }) => {
                self.table_addr.do_send(PlayCard {
                    connection_id: self.connection_id,
                    player_id,
                    card_index,
                });
            }
            Err(e) => {
                warn!(
                    "Malformed message from {}: {}",
                    self.connection_id, e
                );
                send_message(ctx, &GameError::InvalidMessageFormat(e.to_string()).into());
            }
        }
    }
}

impl Actor for PlayerSession {
    type Context = Ctx;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("PlayerSession {} started.", self.connection_id);
        self.sub_manager_addr.do_send(Register {
            connection_id: self.connection_id,
            addr: ctx.address().recipient(),
        });
        self.hb(ctx);
    }

    fn stopping(&mut self, _ctx: &mut Self::Context) -> Running {
        info!("PlayerSession {} disconnected.", self.connection_id);
        self.sub_manager_addr.do_send(Deregister {
            connection_id: self.connection_id,
        });
        self.table_addr.do_send(LeaveTable {
            connection_id: self.connection_id,
        });
        Running::Stop
    }
}

impl Handler<ServerMessage> for PlayerSession {
    type Result = ();

    fn handle(&mut self, msg: ServerMessage, ctx: &mut Self::Context) {
        debug!("Sending {} to {}", msg.kind(), self.connection_id);
        send_message(ctx, &msg);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlayerSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.hb = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.hb = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.hb = Instant::now();
                self.handle_text(ctx, &text);
            }
            Ok(ws::Message::Binary(_)) => {
                send_message(
                    ctx,
                    &GameError::InvalidMessageFormat("binary frames are not supported".into())
                        .into(),
                );
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {}
            Err(e) => {
                warn!("Websocket protocol error on {}: {}", self.connection_id, e);
                ctx.stop();
            }
        }
    }
}
