use actix::Message;
use uuid::Uuid;

use crate::game::{snapshot::StateSnapshot, turn::CardIndex};

#[derive(Message)]
#[rtype(result = "()")]
pub struct JoinTable {
    pub connection_id: Uuid,
}

/// `connection_id` 는 요청을 보낸 연결, `player_id` 는 요청에 담긴 행동 주체 문자열입니다.
#[derive(Message)]
#[rtype(result = "()")]
pub struct PlayCard {
    pub connection_id: Uuid,
    pub player_id: String,
    pub card_index: CardIndex,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct LeaveTable {
    pub connection_id: Uuid,
}

/// 다음 라운드를 시작하는 외부 트리거 (관리자 요청 또는 예약 타이머)
#[derive(Message)]
#[rtype(result = "()")]
pub struct StartNextRound;

#[derive(Message)]
#[rtype(result = "StateSnapshot")]
pub struct GetSnapshot;
