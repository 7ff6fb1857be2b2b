use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 카드/target 생성에 쓰이는 균등 정수 난수 공급원.
///
/// 테스트에서는 고정된 값을 돌려주는 구현을 주입해서 결과를 재현할 수 있습니다.
pub trait RandomSource {
    /// `[low, high]` 범위(양 끝 포함)의 균등 정수를 반환합니다.
    fn uniform(&mut self, low: u32, high: u32) -> u32;
}

/// 서버에서 사용하는 기본 난수 공급원.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// seed 가 없으면 entropy 로 초기화합니다.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for GameRng {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.inner.gen_range(low..=high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        (**self).uniform(low, high)
    }
}
