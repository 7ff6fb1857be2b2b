/// 테이블의 좌석 수. 좌석은 항상 이 개수로 유지됩니다.
pub const SEAT_COUNT: usize = 4;

/// 라운드 시작 시 생성되는 덱의 카드 수
pub const DEFAULT_DECK_SIZE: usize = 100;

/// 입장 시 지급되는 카드 수
pub const DEFAULT_HAND_SIZE: usize = 5;

/// target 을 만들기 위해 덱에서 빼는 카드 수 범위 (양 끝 포함)
pub const DEFAULT_MIN_TARGET_CARDS: usize = 3;
pub const DEFAULT_MAX_TARGET_CARDS: usize = 5;

/// 카드 분모 범위 (양 끝 포함)
pub const MIN_DENOMINATOR: u32 = 2;
pub const MAX_DENOMINATOR: u32 = 12;

/// 승리 판정 허용 오차 (1/20 = 0.05)
pub const TOLERANCE_NUMERATOR: i64 = 1;
pub const TOLERANCE_DENOMINATOR: i64 = 20;

pub const PLACEHOLDER_ID_PREFIX: &str = "dummy-";
pub const WAITING_PLACEHOLDER_NAME: &str = "Waiting for player...";
pub const AUTOMATED_PLACEHOLDER_NAME: &str = "AI Player";
