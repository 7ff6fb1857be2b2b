pub mod events;
pub mod rng;
pub mod seats;
pub mod snapshot;
pub mod table;
pub mod turn;

use tracing::debug;

use crate::{
    card::deck::Deck,
    enums::{
        DEFAULT_DECK_SIZE, DEFAULT_HAND_SIZE, DEFAULT_MAX_TARGET_CARDS, DEFAULT_MIN_TARGET_CARDS,
    },
    fraction::Fraction,
    unit::player::Player,
};

use rng::RandomSource;

/// 한 라운드를 만들 때 쓰는 규칙 값들
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub deck_size: usize,
    pub hand_size: usize,
    pub min_target_cards: usize,
    pub max_target_cards: usize,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            deck_size: DEFAULT_DECK_SIZE,
            hand_size: DEFAULT_HAND_SIZE,
            min_target_cards: DEFAULT_MIN_TARGET_CARDS,
            max_target_cards: DEFAULT_MAX_TARGET_CARDS,
        }
    }
}

/// 프로세스 전체에서 하나만 존재하는 게임 상태.
///
/// 좌석은 항상 4개이며, plate/target 은 기약분수로만 저장합니다.
/// 소수 값은 분수에서 계산하므로 둘이 어긋날 일이 없습니다.
/// 모든 변경은 `game::table::Table` 을 통해서만 이루어집니다.
#[derive(Debug, Clone)]
pub struct GameSession {
    rules: RoundRules,
    seats: Vec<Player>,
    deck: Deck,
    plate: Fraction,
    target: Fraction,
    current_seat: usize,
    // 라운드가 초기화되어도 이어서 증가합니다.
    next_player_number: u32,
}

impl GameSession {
    pub fn new<R: RandomSource + ?Sized>(rules: RoundRules, rng: &mut R) -> GameSession {
        let mut session = GameSession {
            rules,
            seats: Vec::new(),
            deck: Deck::default(),
            plate: Fraction::ZERO,
            target: Fraction::ZERO,
            current_seat: 0,
            next_player_number: 1,
        };
        session.initialize_round(rng);
        session.ensure_four_seats();
        session
    }

    /// 새 덱을 만들고 끝에서 3~5장을 떼어 target 을 만든 뒤 plate 를 0/1 로 되돌립니다.
    ///
    /// 앉아 있는 플레이어는 그대로 둡니다.
    pub fn initialize_round<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut deck = Deck::generate(rng, self.rules.deck_size);
        let count = rng.uniform(
            self.rules.min_target_cards as u32,
            self.rules.max_target_cards as u32,
        ) as usize;
        let target_cards = deck.split_tail(count);

        self.target = target_cards
            .iter()
            .fold(Fraction::ZERO, |acc, card| acc + card.fraction());
        self.plate = Fraction::ZERO;
        self.deck = deck;
        self.current_seat = 0;

        debug!(
            "Round initialized: target={}, target_cards={}, deck_remaining={}",
            self.target,
            target_cards.len(),
            self.deck.len()
        );
    }

    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    pub fn seats(&self) -> &[Player] {
        &self.seats
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn plate(&self) -> Fraction {
        self.plate
    }

    pub fn plate_value(&self) -> f64 {
        self.plate.value()
    }

    pub fn target(&self) -> Fraction {
        self.target
    }

    pub fn target_value(&self) -> f64 {
        self.target.value()
    }

    pub fn current_seat(&self) -> usize {
        self.current_seat
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.seats.get(self.current_seat)
    }
}
