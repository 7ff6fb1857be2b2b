pub mod deck;

use std::fmt;

use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

use crate::{
    enums::{MAX_DENOMINATOR, MIN_DENOMINATOR},
    fraction::Fraction,
    game::rng::RandomSource,
};

/// 카드 그림. 게임 진행에는 영향이 없는 장식용 값입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardImage {
    #[serde(rename = "pizza.png")]
    Pizza,
    #[serde(rename = "watermelon.png")]
    Watermelon,
    #[serde(rename = "cake.png")]
    Cake,
    #[serde(rename = "icecream.png")]
    IceCream,
}

impl CardImage {
    pub const ALL: [CardImage; 4] = [
        CardImage::Pizza,
        CardImage::Watermelon,
        CardImage::Cake,
        CardImage::IceCream,
    ];
}

/// 분수 값을 가진 카드. 한 번 만들어지면 바뀌지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    numerator: u32,
    denominator: u32,
    image: CardImage,
}

impl Card {
    /// 분자나 분모가 0 이면 None 을 반환합니다.
    pub fn new(numerator: u32, denominator: u32, image: CardImage) -> Option<Card> {
        if numerator == 0 || denominator == 0 {
            return None;
        }
        Some(Card {
            numerator,
            denominator,
            image,
        })
    }

    /// 분모는 [2, 12], 분자는 [1, 분모] 에서 균등하게 뽑습니다.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Card {
        let denominator = rng.uniform(MIN_DENOMINATOR, MAX_DENOMINATOR);
        let numerator = rng.uniform(1, denominator);
        let image_index = rng.uniform(0, CardImage::ALL.len() as u32 - 1) as usize;
        Card {
            numerator,
            denominator,
            image: CardImage::ALL[image_index],
        }
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    pub fn image(&self) -> CardImage {
        self.image
    }

    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// 기약분수로 변환한 값.
    pub fn fraction(&self) -> Fraction {
        Fraction::new(self.numerator as i64, self.denominator as i64).unwrap_or_default()
    }
}

/// 카드에 적힌 그대로의 `n/d` 표기 (약분하지 않음)
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Card", 5)?;
        state.serialize_field("numerator", &self.numerator)?;
        state.serialize_field("denominator", &self.denominator)?;
        state.serialize_field("decimal", &self.value())?;
        state.serialize_field("fraction", &self.to_string())?;
        state.serialize_field("image", &self.image)?;
        state.end()
    }
}
