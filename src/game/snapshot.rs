use serde::Serialize;

use crate::{fraction::Fraction, unit::player::Player};

use super::GameSession;

/// 모든 클라이언트에게 보내는 전체 상태.
///
/// 덱은 남은 장수만 포함하고 카드 내용은 보내지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub seats: Vec<Player>,
    pub deck_remaining: usize,
    pub plate_value: f64,
    pub plate_fraction: Fraction,
    pub target_value: f64,
    pub target_fraction: Fraction,
    pub current_seat_index: usize,
}

impl GameSession {
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            seats: self.seats.clone(),
            deck_remaining: self.deck.len(),
            plate_value: self.plate_value(),
            plate_fraction: self.plate,
            target_value: self.target_value(),
            target_fraction: self.target,
            current_seat_index: self.current_seat,
        }
    }
}
