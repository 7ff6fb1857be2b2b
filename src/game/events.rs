/// 상태 전이가 만들어내는 브로드캐스트 이벤트.
///
/// 게임 로직은 이벤트 목록만 돌려주고, 실제 전송은 table actor 가 맡습니다.
/// 목록의 순서가 곧 클라이언트가 받는 순서입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// 현재 상태 스냅샷을 모두에게 보냅니다.
    StateChanged,
    Notice(String),
    RoundOver { winner_name: String },
}

impl TableEvent {
    pub fn notice(text: impl Into<String>) -> Self {
        TableEvent::Notice(text.into())
    }
}
