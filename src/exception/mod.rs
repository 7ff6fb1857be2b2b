use thiserror::Error;

use crate::protocol::{ErrorCode, ServerMessage};

/// 클라이언트 요청 검증 실패.
///
/// 모두 요청자에게만 알려지며 게임 상태를 바꾸지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not your turn")]
    NotYourTurn,

    #[error("Invalid card index: {index}")]
    InvalidCardIndex { index: String },

    #[error("You are already seated at the table")]
    AlreadySeated,

    #[error("The table is full")]
    TableFull,

    #[error("Invalid message format: {0}")]
    InvalidMessageFormat(String),
}

impl GameError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::NotYourTurn => ErrorCode::NotYourTurn,
            GameError::InvalidCardIndex { .. } => ErrorCode::InvalidCardIndex,
            GameError::AlreadySeated => ErrorCode::AlreadySeated,
            GameError::TableFull => ErrorCode::TableFull,
            GameError::InvalidMessageFormat(_) => ErrorCode::InvalidMessageFormat,
        }
    }
}

/// 검증 실패를 요청자에게 보낼 ServerMessage 로 변환합니다.
impl From<GameError> for ServerMessage {
    fn from(error: GameError) -> Self {
        ServerMessage::ActionError {
            code: error.code(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_private_action_error() {
        let msg: ServerMessage = GameError::NotYourTurn.into();
        match msg {
            ServerMessage::ActionError { code, message } => {
                assert_eq!(code, ErrorCode::NotYourTurn);
                assert_eq!(message, "Not your turn");
            }
            _ => panic!("expected action error"),
        }
    }

    #[test]
    fn invalid_index_message_names_the_index() {
        let error = GameError::InvalidCardIndex { index: "9".into() };
        assert_eq!(error.to_string(), "Invalid card index: 9");
        assert_eq!(error.code(), ErrorCode::InvalidCardIndex);

        let error = GameError::InvalidCardIndex {
            index: "1.5".into(),
        };
        assert_eq!(error.to_string(), "Invalid card index: 1.5");
    }
}
