use actix::{Context, Handler, MessageResult};
use tracing::warn;

use crate::{
    game::turn::PlayKind,
    protocol::ServerMessage,
};

use super::{messages::*, TableActor};

impl Handler<JoinTable> for TableActor {
    type Result = ();

    fn handle(&mut self, msg: JoinTable, _ctx: &mut Context<Self>) -> Self::Result {
        match self.table.join(msg.connection_id) {
            Ok(events) => {
                // id 배정 알림이 상태 브로드캐스트보다 먼저 도착해야 합니다.
                self.send_private(
                    msg.connection_id,
                    ServerMessage::AssignedId {
                        player_id: msg.connection_id,
                    },
                );
                self.deliver(events);
            }
            Err(e) => {
                warn!("Join rejected for {}: {}", msg.connection_id, e);
                self.send_private(msg.connection_id, e.into());
            }
        }
    }
}

impl Handler<PlayCard> for TableActor {
    type Result = ();

    fn handle(&mut self, msg: PlayCard, ctx: &mut Context<Self>) -> Self::Result {
        let PlayCard {
            connection_id,
            player_id,
            card_index,
        } = msg;
        match self.table.play_card(&player_id, card_index) {
            Ok(outcome) => {
                let won = outcome.kind == PlayKind::Win;
                self.deliver(outcome.events);
                if won {
                    self.schedule_restart(ctx);
                }
            }
            Err(e) => {
                warn!(
                    "Play rejected: connection={}, player={}, reason={}",
                    connection_id, player_id, e
                );
                self.send_private(connection_id, e.into());
            }
        }
    }
}

impl Handler<LeaveTable> for TableActor {
    type Result = ();

    fn handle(&mut self, msg: LeaveTable, ctx: &mut Context<Self>) -> Self::Result {
        let events = self.table.leave(msg.connection_id);
        if self.table.session().real_player_count() < 2 {
            // 라운드가 이미 초기화되었으므로 예약된 재시작은 필요 없습니다.
            self.cancel_restart(ctx);
        }
        self.deliver(events);
    }
}

impl Handler<StartNextRound> for TableActor {
    type Result = ();

    fn handle(&mut self, _msg: StartNextRound, ctx: &mut Context<Self>) -> Self::Result {
        self.start_next_round(ctx);
    }
}

impl Handler<GetSnapshot> for TableActor {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.table.snapshot())
    }
}
