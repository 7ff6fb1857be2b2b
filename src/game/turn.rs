use std::fmt;

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    exception::GameError,
    fraction::Fraction,
    unit::player::{Player, PlayerId},
};

use super::{events::TableEvent, GameSession};

/// 클라이언트가 보낸 카드 위치.
///
/// 정수가 아닌 값(`1.5`, `"2"`, 범위를 넘는 수)도 그대로 받아두고,
/// 차례 확인이 끝난 뒤 잘못된 위치로 거절합니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CardIndex {
    Position(i64),
    Other(serde_json::Value),
}

impl CardIndex {
    /// 손패 범위 안의 위치일 때만 Some.
    fn resolve(&self, hand_len: usize) -> Option<usize> {
        match self {
            CardIndex::Position(index) => usize::try_from(*index).ok(),
            CardIndex::Other(_) => None,
        }
        .filter(|i| *i < hand_len)
    }
}

impl fmt::Display for CardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardIndex::Position(index) => write!(f, "{}", index),
            CardIndex::Other(value) => write!(f, "{}", value),
        }
    }
}

/// 카드 한 장을 낸 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKind {
    /// target 과의 차이가 허용 오차 이내. 턴은 넘어가지 않습니다.
    Win,
    /// target + 허용 오차를 넘김. 카드는 버려집니다.
    Bust { forced_discard: bool },
    Normal { drew_replacement: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub kind: PlayKind,
    pub events: Vec<TableEvent>,
}

/// 턴 진행.
impl GameSession {
    /// 현재 plate 에 더해도 target + 허용 오차를 넘지 않는 카드가 있는지 확인합니다.
    pub fn has_valid_move(&self, player: &Player) -> bool {
        let limit = self.target + Fraction::tolerance();
        player
            .hand()
            .iter()
            .any(|card| self.plate + card.fraction() <= limit)
    }

    /// `acting_player` 가 손패의 `card_index` 번째 카드를 plate 에 냅니다.
    ///
    /// 검증에 실패하면 상태를 전혀 바꾸지 않고 에러를 반환합니다.
    pub fn play_card(
        &mut self,
        acting_player: PlayerId,
        card_index: CardIndex,
    ) -> Result<PlayOutcome, GameError> {
        let seat = self.current_seat;
        let player = self
            .seats
            .get(seat)
            .filter(|p| p.id() == acting_player)
            .ok_or(GameError::NotYourTurn)?;

        let index = card_index.resolve(player.hand().len()).ok_or_else(|| {
            GameError::InvalidCardIndex {
                index: card_index.to_string(),
            }
        })?;

        let card = &player.hand()[index];
        let candidate = self.plate + card.fraction();
        let tolerance = Fraction::tolerance();

        debug!(
            "{} plays {} (index {}): plate={} candidate={} target={}",
            player.name(),
            card,
            index,
            self.plate,
            candidate,
            self.target
        );

        let outcome = if (candidate - self.target).abs() <= tolerance {
            self.apply_win(seat, index)
        } else if candidate > self.target + tolerance {
            self.apply_bust(seat, index)
        } else {
            self.apply_normal(seat, index, candidate)
        };
        Ok(outcome)
    }

    fn advance_turn(&mut self) {
        self.current_seat = (self.current_seat + 1) % self.seats.len();
    }

    fn apply_win(&mut self, seat: usize, index: usize) -> PlayOutcome {
        // plate 를 target 에 정확히 맞춥니다.
        self.plate = self.target;

        let player = &mut self.seats[seat];
        player.take_card(index);
        let winner_name = player.name().to_string();

        info!("{} wins the round. target={}", winner_name, self.target);

        PlayOutcome {
            kind: PlayKind::Win,
            events: vec![
                TableEvent::StateChanged,
                TableEvent::notice(format!(
                    "{} wins! Close enough to the target: {}",
                    winner_name, self.target
                )),
                TableEvent::RoundOver { winner_name },
            ],
        }
    }

    fn apply_bust(&mut self, seat: usize, index: usize) -> PlayOutcome {
        let mut events = Vec::new();

        let Some(card) = self.seats[seat].take_card(index) else {
            return PlayOutcome {
                kind: PlayKind::Bust {
                    forced_discard: false,
                },
                events,
            };
        };
        let name = self.seats[seat].name().to_string();
        events.push(TableEvent::notice(format!(
            "Bust! {} went over the target and discarded {}.",
            name, card
        )));

        let forced_discard = !self.has_valid_move(&self.seats[seat]);
        if forced_discard {
            events.push(TableEvent::notice(format!(
                "{} has no valid moves and must discard and draw.",
                name
            )));
            let player = &mut self.seats[seat];
            if !player.hand().is_empty() {
                player.take_card(0);
            }
            if let Some(drawn) = self.deck.draw() {
                self.seats[seat].receive(drawn);
            }
        }

        if let Some(drawn) = self.deck.draw() {
            self.seats[seat].receive(drawn);
        }

        info!(
            "{} busted with {}. forced_discard={}, deck_remaining={}",
            name,
            card,
            forced_discard,
            self.deck.len()
        );

        self.advance_turn();
        events.push(TableEvent::StateChanged);

        PlayOutcome {
            kind: PlayKind::Bust { forced_discard },
            events,
        }
    }

    fn apply_normal(&mut self, seat: usize, index: usize, candidate: Fraction) -> PlayOutcome {
        let mut events = Vec::new();

        self.plate = candidate;
        let Some(card) = self.seats[seat].take_card(index) else {
            return PlayOutcome {
                kind: PlayKind::Normal {
                    drew_replacement: false,
                },
                events,
            };
        };

        let drew_replacement = match self.deck.draw() {
            Some(drawn) => {
                self.seats[seat].receive(drawn);
                true
            }
            None => {
                events.push(TableEvent::notice(
                    "Deck is empty! No more cards can be drawn.",
                ));
                false
            }
        };

        let name = self.seats[seat].name().to_string();
        info!(
            "{} played {}. plate={}, deck_remaining={}",
            name,
            card,
            self.plate,
            self.deck.len()
        );

        self.advance_turn();
        events.push(TableEvent::StateChanged);
        events.push(TableEvent::notice(format!("{} played {}.", name, card)));

        PlayOutcome {
            kind: PlayKind::Normal { drew_replacement },
            events,
        }
    }
}
