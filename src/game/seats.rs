use tracing::info;
use uuid::Uuid;

use crate::{
    enums::SEAT_COUNT,
    exception::GameError,
    unit::player::{Player, PlayerId},
};

use super::{events::TableEvent, rng::RandomSource, GameSession};

/// 좌석 관리. 좌석 수는 항상 SEAT_COUNT 로 유지됩니다.
impl GameSession {
    /// 빈 좌석을 placeholder 로 채웁니다. 실제 플레이어는 건드리지 않습니다.
    pub fn ensure_four_seats(&mut self) {
        while self.seats.len() < SEAT_COUNT {
            let seat = self.seats.len();
            self.seats.push(Player::placeholder(seat));
        }
    }

    pub fn real_player_count(&self) -> usize {
        self.seats.iter().filter(|p| !p.is_placeholder()).count()
    }

    pub fn is_seated(&self, connection_id: Uuid) -> bool {
        let id = PlayerId::Connection(connection_id);
        self.seats.iter().any(|p| p.id() == id)
    }

    /// 새 플레이어를 앉힙니다.
    ///
    /// 이름을 순서대로 붙이고 손패를 나눠준 다음, placeholder 를 모두 치우고
    /// 맨 뒤에 앉힌 뒤 빈 자리를 다시 채웁니다.
    pub fn admit_player(&mut self, connection_id: Uuid) -> Result<Vec<TableEvent>, GameError> {
        if self.is_seated(connection_id) {
            return Err(GameError::AlreadySeated);
        }
        if self.real_player_count() >= SEAT_COUNT {
            return Err(GameError::TableFull);
        }

        let name = format!("Player {}", self.next_player_number);
        self.next_player_number += 1;
        let hand = self.deck.draw_many(self.rules.hand_size);

        info!(
            "{} joined: connection={}, hand={}, deck_remaining={}",
            name,
            connection_id,
            hand.len(),
            self.deck.len()
        );

        self.seats.retain(|p| !p.is_placeholder());
        self.seats.push(Player::new(connection_id, name, hand));
        self.ensure_four_seats();

        Ok(vec![TableEvent::StateChanged])
    }

    /// 연결이 끊긴 플레이어를 내보냅니다.
    ///
    /// 실제 플레이어가 2명 미만으로 줄면 남은 플레이어까지 내보내고 세션을 초기화합니다.
    pub fn remove_player<R: RandomSource + ?Sized>(
        &mut self,
        connection_id: Uuid,
        rng: &mut R,
    ) -> Vec<TableEvent> {
        let id = PlayerId::Connection(connection_id);
        self.seats.retain(|p| p.id() != id && !p.is_placeholder());
        self.ensure_four_seats();

        if self.current_seat >= self.seats.len() {
            self.current_seat = 0;
        }

        let remaining = self.real_player_count();
        info!(
            "Connection {} left the table: real_players={}",
            connection_id, remaining
        );

        if remaining < 2 {
            info!("Fewer than two real players remain. Resetting session.");
            self.reset_round(rng);
        }

        vec![TableEvent::StateChanged]
    }

    /// 세션을 처음 상태로 되돌립니다.
    ///
    /// 남아 있던 실제 플레이어도 좌석에서 내려가고 네 자리 모두 placeholder 가 됩니다.
    pub fn reset_round<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.seats.clear();
        self.initialize_round(rng);
        self.ensure_four_seats();
    }

    /// 다음 라운드를 시작합니다.
    ///
    /// 앉아 있는 실제 플레이어는 유지하고 새 덱에서 손패를 다시 나눠줍니다.
    pub fn start_next_round<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Vec<TableEvent> {
        self.seats.retain(|p| !p.is_placeholder());
        self.initialize_round(rng);

        let hand_size = self.rules.hand_size;
        for player in self.seats.iter_mut() {
            *player.hand_mut() = self.deck.draw_many(hand_size);
        }
        self.ensure_four_seats();

        info!(
            "New round started: target={}, real_players={}",
            self.target,
            self.real_player_count()
        );

        vec![
            TableEvent::notice("New game started!"),
            TableEvent::StateChanged,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        enums::WAITING_PLACEHOLDER_NAME,
        fraction::Fraction,
        game::{rng::GameRng, RoundRules},
    };

    fn session() -> (GameSession, GameRng) {
        let mut rng = GameRng::new(2024);
        let session = GameSession::new(RoundRules::default(), &mut rng);
        (session, rng)
    }

    #[test]
    fn admit_replaces_placeholders_and_pads_back() {
        let (mut session, _) = session();
        let a = Uuid::new_v4();
        let deck_before = session.deck().len();

        let events = session.admit_player(a).unwrap();
        assert_eq!(events, vec![TableEvent::StateChanged]);
        assert_eq!(session.seats().len(), SEAT_COUNT);
        assert_eq!(session.seats()[0].id(), PlayerId::Connection(a));
        assert_eq!(session.seats()[0].name(), "Player 1");
        assert_eq!(session.seats()[0].hand().len(), 5);
        assert_eq!(session.deck().len(), deck_before - 5);
        assert_eq!(session.seats()[1].id(), PlayerId::Placeholder(1));
        assert_eq!(session.real_player_count(), 1);
    }

    #[test]
    fn names_are_sequential() {
        let (mut session, _) = session();
        session.admit_player(Uuid::new_v4()).unwrap();
        session.admit_player(Uuid::new_v4()).unwrap();
        assert_eq!(session.seats()[0].name(), "Player 1");
        assert_eq!(session.seats()[1].name(), "Player 2");
        assert!(session.seats()[2].is_placeholder());
    }

    #[test]
    fn short_deck_deals_fewer_cards() {
        let mut rng = GameRng::new(1);
        let rules = RoundRules {
            deck_size: 7,
            ..RoundRules::default()
        };
        let mut session = GameSession::new(rules, &mut rng);
        let left = session.deck().len();
        assert!(left < 5);

        session.admit_player(Uuid::new_v4()).unwrap();
        assert_eq!(session.seats()[0].hand().len(), left);
        assert!(session.deck().is_empty());
    }

    #[test]
    fn double_join_is_rejected() {
        let (mut session, _) = session();
        let a = Uuid::new_v4();
        session.admit_player(a).unwrap();
        assert_eq!(session.admit_player(a), Err(GameError::AlreadySeated));
        assert_eq!(session.real_player_count(), 1);
    }

    #[test]
    fn fifth_player_is_rejected() {
        let (mut session, _) = session();
        for _ in 0..SEAT_COUNT {
            session.admit_player(Uuid::new_v4()).unwrap();
        }
        assert_eq!(
            session.admit_player(Uuid::new_v4()),
            Err(GameError::TableFull)
        );
        assert_eq!(session.seats().len(), SEAT_COUNT);
    }

    #[test]
    fn remove_keeps_four_seats() {
        let (mut session, mut rng) = session();
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            session.admit_player(*id).unwrap();
        }

        session.remove_player(ids[1], &mut rng);
        assert_eq!(session.seats().len(), SEAT_COUNT);
        assert_eq!(session.real_player_count(), 2);
        assert!(!session.is_seated(ids[1]));
        assert_eq!(session.seats()[1].id(), PlayerId::Connection(ids[2]));
    }

    #[test]
    fn dropping_below_two_players_resets_round() {
        let (mut session, mut rng) = session();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        session.admit_player(a).unwrap();
        session.admit_player(b).unwrap();

        // 진행 중인 라운드처럼 만들어 둡니다.
        session.plate = Fraction::new(1, 3).unwrap();
        session.current_seat = 1;
        let old_target = session.target();
        let old_deck = session.deck().cards().to_vec();

        session.remove_player(b, &mut rng);

        assert_eq!(session.plate(), Fraction::ZERO);
        assert_eq!(session.current_seat(), 0);
        assert_eq!(session.seats().len(), SEAT_COUNT);
        assert!(!session.is_seated(a));
        assert_eq!(session.real_player_count(), 0);
        assert!(session.seats().iter().all(|p| p.hand().is_empty()));
        assert_eq!(session.seats()[0].name(), WAITING_PLACEHOLDER_NAME);
        let removed = session.rules().deck_size - session.deck().len();
        assert!((3..=5).contains(&removed));
        assert!(session.deck().cards() != old_deck.as_slice() || session.target() != old_target);
    }

    #[test]
    fn removing_unknown_connection_keeps_seats() {
        let (mut session, mut rng) = session();
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            session.admit_player(*id).unwrap();
        }
        session.remove_player(Uuid::new_v4(), &mut rng);
        assert_eq!(session.real_player_count(), 3);
        assert_eq!(session.seats().len(), SEAT_COUNT);
    }

    #[test]
    fn next_round_redeals_real_players() {
        let (mut session, mut rng) = session();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        session.admit_player(a).unwrap();
        session.admit_player(b).unwrap();
        session.seats[0].hand_mut().clear();
        session.plate = Fraction::new(3, 2).unwrap();
        session.current_seat = 1;

        let events = session.start_next_round(&mut rng);

        assert_eq!(
            events,
            vec![
                TableEvent::notice("New game started!"),
                TableEvent::StateChanged
            ]
        );
        assert_eq!(session.plate(), Fraction::ZERO);
        assert_eq!(session.current_seat(), 0);
        assert_eq!(session.real_player_count(), 2);
        assert_eq!(session.seats()[0].hand().len(), 5);
        assert_eq!(session.seats()[1].hand().len(), 5);
        assert_eq!(session.seats().len(), SEAT_COUNT);
        let dealt = session.rules().deck_size - session.deck().len();
        assert!((13..=15).contains(&dealt));
    }

    #[test]
    fn player_numbers_continue_after_reset() {
        let (mut session, mut rng) = session();
        let a = Uuid::new_v4();
        session.admit_player(a).unwrap();
        session.remove_player(a, &mut rng);
        session.admit_player(Uuid::new_v4()).unwrap();
        assert_eq!(session.seats()[0].name(), "Player 2");
    }
}
