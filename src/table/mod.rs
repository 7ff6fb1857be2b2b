use std::time::Duration;

use actix::{Actor, Addr, AsyncContext, Context, SpawnHandle};
use tracing::info;
use uuid::Uuid;

use crate::{
    game::{events::TableEvent, rng::RandomSource, table::Table},
    protocol::ServerMessage,
    subscript::{
        messages::{Broadcast, ForwardMessage},
        SubScriptionManager,
    },
};

pub mod handlers;
pub mod messages;

pub type ActorTable = Table<Box<dyn RandomSource>>;

/// 게임 테이블 actor.
///
/// 입장/카드 내기/퇴장 요청은 mailbox 에 쌓인 순서대로 하나씩 끝까지 처리됩니다.
/// 한 요청의 브로드캐스트가 모두 나간 뒤에 다음 요청을 처리하므로 잠금이 필요 없습니다.
pub struct TableActor {
    table: ActorTable,
    sub_manager_addr: Addr<SubScriptionManager>,
    restart_delay: Option<Duration>,
    pending_restart: Option<SpawnHandle>,
}

impl TableActor {
    pub fn new(
        table: ActorTable,
        sub_manager_addr: Addr<SubScriptionManager>,
        restart_delay: Option<Duration>,
    ) -> Self {
        Self {
            table,
            sub_manager_addr,
            restart_delay,
            pending_restart: None,
        }
    }

    /// 이벤트를 순서대로 모든 연결에 보냅니다.
    fn deliver(&self, events: Vec<TableEvent>) {
        for event in events {
            let message = ServerMessage::from_event(event, || self.table.snapshot());
            self.sub_manager_addr.do_send(Broadcast { message });
        }
    }

    fn send_private(&self, connection_id: Uuid, message: ServerMessage) {
        self.sub_manager_addr.do_send(ForwardMessage {
            connection_id,
            message,
        });
    }

    /// 승리 후 자동 재시작이 설정되어 있으면 카운트다운을 알리고 타이머를 겁니다.
    fn schedule_restart(&mut self, ctx: &mut Context<Self>) {
        let Some(delay) = self.restart_delay else {
            return;
        };
        self.cancel_restart(ctx);

        info!("Next round starts in {:?}", delay);
        self.sub_manager_addr.do_send(Broadcast {
            message: ServerMessage::RoundResetCountdown {
                seconds_left: delay.as_secs(),
            },
        });
        let handle = ctx.run_later(delay, |act, ctx| {
            act.pending_restart = None;
            act.start_next_round(ctx);
        });
        self.pending_restart = Some(handle);
    }

    /// 예약된 재시작이 있으면 취소하고 새 라운드를 시작합니다.
    fn start_next_round(&mut self, ctx: &mut Context<Self>) {
        self.cancel_restart(ctx);
        info!("Starting next round");
        let events = self.table.start_next_round();
        self.deliver(events);
    }

    fn cancel_restart(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.pending_restart.take() {
            ctx.cancel_future(handle);
        }
    }
}

impl Actor for TableActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        let session = self.table.session();
        info!(
            "TableActor started: target={}, deck_remaining={}",
            session.target(),
            session.deck().len()
        );
    }
}
