use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::{
    card::Card,
    enums::{AUTOMATED_PLACEHOLDER_NAME, PLACEHOLDER_ID_PREFIX, WAITING_PLACEHOLDER_NAME},
};

/// 좌석 주인의 식별자.
///
/// 실제 플레이어는 연결 id 로, placeholder 는 좌석 번호로 구분합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Connection(Uuid),
    Placeholder(usize),
}

impl PlayerId {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PlayerId::Placeholder(_))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Connection(id) => write!(f, "{}", id),
            PlayerId::Placeholder(seat) => write!(f, "{}{}", PLACEHOLDER_ID_PREFIX, seat),
        }
    }
}

/// `dummy-<seat>` 는 placeholder, 그 외에는 Uuid 로 읽습니다.
impl FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(seat) = s
            .strip_prefix(PLACEHOLDER_ID_PREFIX)
            .and_then(|rest| rest.parse::<usize>().ok())
        {
            return Ok(PlayerId::Placeholder(seat));
        }
        Uuid::parse_str(s).map(PlayerId::Connection)
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        PlayerId::Connection(id)
    }
}

/// 좌석에 앉은 플레이어. placeholder 는 항상 빈 손패를 가집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    #[serde(rename = "cards")]
    hand: Vec<Card>,
}

impl Player {
    pub fn new(connection_id: Uuid, name: String, hand: Vec<Card>) -> Player {
        Player {
            id: PlayerId::Connection(connection_id),
            name,
            hand,
        }
    }

    /// 첫 번째 빈 좌석은 대기 중 문구를, 나머지는 자동 플레이어 문구를 씁니다.
    pub fn placeholder(seat: usize) -> Player {
        let name = if seat == 0 {
            WAITING_PLACEHOLDER_NAME
        } else {
            AUTOMATED_PLACEHOLDER_NAME
        };
        Player {
            id: PlayerId::Placeholder(seat),
            name: name.to_string(),
            hand: Vec::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_placeholder()
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Vec<Card> {
        &mut self.hand
    }

    /// 손패에서 `index` 번째 카드를 제거합니다. 범위를 벗어나면 None.
    pub fn take_card(&mut self, index: usize) -> Option<Card> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardImage;

    #[test]
    fn placeholder_ids_use_reserved_prefix() {
        assert_eq!(PlayerId::Placeholder(2).to_string(), "dummy-2");
        assert_eq!(Player::placeholder(0).name(), WAITING_PLACEHOLDER_NAME);
        assert_eq!(Player::placeholder(3).name(), AUTOMATED_PLACEHOLDER_NAME);
        assert!(Player::placeholder(1).hand().is_empty());
    }

    #[test]
    fn player_ids_parse_from_wire_text() {
        let id = Uuid::new_v4();
        assert_eq!(
            id.to_string().parse::<PlayerId>().unwrap(),
            PlayerId::Connection(id)
        );
        assert_eq!(
            "dummy-2".parse::<PlayerId>().unwrap(),
            PlayerId::Placeholder(2)
        );
        assert!("dummy-x".parse::<PlayerId>().is_err());
        assert!("Player 1".parse::<PlayerId>().is_err());
    }

    #[test]
    fn take_card_out_of_range_is_none() {
        let card = Card::new(1, 2, CardImage::Cake).unwrap();
        let mut player = Player::new(Uuid::new_v4(), "Player 1".into(), vec![card.clone()]);
        assert!(player.take_card(1).is_none());
        assert_eq!(player.take_card(0), Some(card));
        assert!(player.hand().is_empty());
    }

    #[test]
    fn serializes_with_string_id() {
        let id = Uuid::new_v4();
        let player = Player::new(id, "Player 1".into(), vec![]);
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["name"], "Player 1");
        assert!(json["cards"].as_array().unwrap().is_empty());
    }
}
