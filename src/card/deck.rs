use crate::{card::Card, game::rng::RandomSource};

/// 카드 더미. 맨 뒤(top)에서부터 뽑습니다.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Deck {
        Deck { cards }
    }

    /// 서로 독립적으로 뽑은 `size` 장의 카드로 덱을 만듭니다. 중복을 허용합니다.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, size: usize) -> Deck {
        Deck {
            cards: (0..size).map(|_| Card::random(rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 맨 위 카드를 한 장 뽑습니다. 덱이 비었으면 None.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 최대 `count` 장을 뽑습니다. 덱이 부족하면 남은 만큼만 반환합니다.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        (0..count).map_while(|_| self.draw()).collect()
    }

    /// 덱의 끝에서 `count` 장을 순서를 유지한 채로 떼어냅니다.
    pub fn split_tail(&mut self, count: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(count);
        self.cards.split_off(at)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
