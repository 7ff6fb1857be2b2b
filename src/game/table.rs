use uuid::Uuid;

use crate::{exception::GameError, unit::player::PlayerId};

use super::{
    events::TableEvent,
    rng::{GameRng, RandomSource},
    snapshot::StateSnapshot,
    turn::{CardIndex, PlayOutcome},
    GameSession, RoundRules,
};

/// 게임 상태와 난수 공급원을 함께 소유합니다.
///
/// 들어오는 요청(입장, 카드 내기, 퇴장, 다음 라운드)은 모두 여기를 거칩니다.
/// 각 메서드는 상태를 바꾸고 보내야 할 이벤트 목록을 돌려줄 뿐, 직접 전송하지 않습니다.
pub struct Table<R: RandomSource = GameRng> {
    session: GameSession,
    rng: R,
}

impl<R: RandomSource> Table<R> {
    pub fn new(rules: RoundRules, mut rng: R) -> Self {
        let session = GameSession::new(rules, &mut rng);
        Self { session, rng }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.session.snapshot()
    }

    pub fn join(&mut self, connection_id: Uuid) -> Result<Vec<TableEvent>, GameError> {
        self.session.admit_player(connection_id)
    }

    /// `acting_player` 는 요청에 담긴 id 문자열 그대로입니다.
    /// 어떤 좌석의 id 로도 읽히지 않으면 차례가 아닌 것으로 처리합니다.
    pub fn play_card(
        &mut self,
        acting_player: &str,
        card_index: CardIndex,
    ) -> Result<PlayOutcome, GameError> {
        let acting_player = acting_player
            .parse::<PlayerId>()
            .map_err(|_| GameError::NotYourTurn)?;
        self.session.play_card(acting_player, card_index)
    }

    pub fn leave(&mut self, connection_id: Uuid) -> Vec<TableEvent> {
        self.session.remove_player(connection_id, &mut self.rng)
    }

    pub fn start_next_round(&mut self) -> Vec<TableEvent> {
        self.session.start_next_round(&mut self.rng)
    }
}
