use actix::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::{events::TableEvent, snapshot::StateSnapshot, turn::CardIndex};

// --- Client to Server Messages ---

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// 테이블에 앉기를 요청합니다.
    #[serde(rename = "join")]
    Join,

    /// 손패의 `card_index` 번째 카드를 냅니다.
    ///
    /// 두 필드 모두 형식 검사를 하지 않고 받아서 테이블에서 검증합니다.
    #[serde(rename = "play_card")]
    PlayCard {
        player_id: String,
        card_index: CardIndex,
    },
}

// --- Server to Client Messages ---
#[derive(Serialize, Message, Debug, Clone, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// 입장한 플레이어에게만 보내는 id 배정 알림.
    #[serde(rename = "assigned_id")]
    AssignedId { player_id: Uuid },

    /// 전체 상태 스냅샷.
    #[serde(rename = "state_snapshot")]
    StateSnapshot(StateSnapshot),

    /// 사람이 읽는 이벤트 설명.
    #[serde(rename = "notice")]
    Notice { text: String },

    /// 요청자에게만 보내는 검증 실패 알림.
    #[serde(rename = "action_error")]
    ActionError { code: ErrorCode, message: String },

    #[serde(rename = "round_over")]
    RoundOver { winner_name: String },

    /// 다음 라운드 자동 시작까지 남은 시간.
    #[serde(rename = "round_reset_countdown")]
    RoundResetCountdown { seconds_left: u64 },
}

impl ServerMessage {
    /// StateChanged 는 호출 시점의 스냅샷으로 바꿉니다.
    pub fn from_event(event: TableEvent, snapshot: impl FnOnce() -> StateSnapshot) -> Self {
        match event {
            TableEvent::StateChanged => ServerMessage::StateSnapshot(snapshot()),
            TableEvent::Notice(text) => ServerMessage::Notice { text },
            TableEvent::RoundOver { winner_name } => ServerMessage::RoundOver { winner_name },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::AssignedId { .. } => "assigned_id",
            ServerMessage::StateSnapshot(_) => "state_snapshot",
            ServerMessage::Notice { .. } => "notice",
            ServerMessage::ActionError { .. } => "action_error",
            ServerMessage::RoundOver { .. } => "round_over",
            ServerMessage::RoundResetCountdown { .. } => "round_reset_countdown",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotYourTurn,
    InvalidCardIndex,
    AlreadySeated,
    TableFull,
    InvalidMessageFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{rng::GameRng, GameSession, RoundRules};

    #[test]
    fn parses_client_messages() {
        let join: ClientMessage = serde_json::from_str(r#"{"type":"join"}"#).unwrap();
        assert_eq!(join, ClientMessage::Join);

        let id = Uuid::new_v4();
        let text = format!(
            r#"{{"type":"play_card","player_id":"{}","card_index":2}}"#,
            id
        );
        let play: ClientMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(
            play,
            ClientMessage::PlayCard {
                player_id: id.to_string(),
                card_index: CardIndex::Position(2)
            }
        );
    }

    #[test]
    fn odd_play_fields_still_parse() {
        let text = r#"{"type":"play_card","player_id":"dummy-1","card_index":1.5}"#;
        let play: ClientMessage = serde_json::from_str(text).unwrap();
        assert_eq!(
            play,
            ClientMessage::PlayCard {
                player_id: "dummy-1".into(),
                card_index: CardIndex::Other(serde_json::json!(1.5))
            }
        );
    }

    #[test]
    fn structurally_broken_messages_are_rejected() {
        for text in [
            r#"{"type":"play_card","player_id":"x"}"#,
            r#"{"type":"play_card","card_index":0}"#,
            r#"{"type":"shuffle"}"#,
            "not json",
        ] {
            assert!(serde_json::from_str::<ClientMessage>(text).is_err(), "{}", text);
        }
    }

    #[test]
    fn server_messages_are_type_tagged() {
        let msg = ServerMessage::ActionError {
            code: ErrorCode::NotYourTurn,
            message: "Not your turn".into(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "action_error");
        assert_eq!(json["code"], "not_your_turn");

        let json = serde_json::to_value(ServerMessage::RoundResetCountdown { seconds_left: 5 })
            .unwrap();
        assert_eq!(json["type"], "round_reset_countdown");
        assert_eq!(json["seconds_left"], 5);
    }

    #[test]
    fn snapshot_message_flattens_state() {
        let mut rng = GameRng::new(1);
        let session = GameSession::new(RoundRules::default(), &mut rng);
        let msg = ServerMessage::from_event(TableEvent::StateChanged, || session.snapshot());
        assert_eq!(msg.kind(), "state_snapshot");

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "state_snapshot");
        assert_eq!(json["deck_remaining"], session.deck().len());
        assert_eq!(json["seats"].as_array().unwrap().len(), 4);
    }
}
