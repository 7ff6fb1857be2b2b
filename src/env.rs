use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::{
    enums::{
        DEFAULT_DECK_SIZE, DEFAULT_HAND_SIZE, DEFAULT_MAX_TARGET_CARDS, DEFAULT_MIN_TARGET_CARDS,
    },
    game::RoundRules,
};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub server: ServerSettings,
    pub session: SessionSettings,
    #[serde(default)]
    pub game: GameSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load(&run_mode)
    }

    pub fn load(run_mode: &str) -> Result<Self, ConfigError> {
        println!("Loading configuration for RUN_MODE: {}", run_mode);

        let s = Config::builder()
            // Load environment-specific file (e.g., development.toml, production.toml)
            .add_source(
                File::with_name(&format!("config/{}", run_mode))
                    .format(FileFormat::Toml)
                    .required(true),
            )
            // Add environment variables (e.g., APP_SERVER__PORT=8000)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.game.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub directory: String,
    pub filename: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub heartbeat_interval_seconds: u64,
    pub client_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameSettings {
    pub deck_size: usize,
    pub hand_size: usize,
    pub min_target_cards: usize,
    pub max_target_cards: usize,
    /// 지정하면 카드 생성이 재현 가능해집니다.
    pub rng_seed: Option<u64>,
    /// 지정하면 승리 후 이 시간(초)이 지나 다음 라운드를 자동으로 시작합니다.
    pub round_restart_delay_seconds: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            deck_size: DEFAULT_DECK_SIZE,
            hand_size: DEFAULT_HAND_SIZE,
            min_target_cards: DEFAULT_MIN_TARGET_CARDS,
            max_target_cards: DEFAULT_MAX_TARGET_CARDS,
            rng_seed: None,
            round_restart_delay_seconds: None,
        }
    }
}

impl GameSettings {
    /// 설정값이 유효한지 검증
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::Message(
                "Invalid game.hand_size: 0 (must be at least 1)".into(),
            ));
        }
        if self.min_target_cards == 0 {
            return Err(ConfigError::Message(
                "Invalid game.min_target_cards: 0 (must be at least 1)".into(),
            ));
        }
        if self.min_target_cards > self.max_target_cards {
            return Err(ConfigError::Message(format!(
                "Invalid target card range: {}..={}",
                self.min_target_cards, self.max_target_cards
            )));
        }
        if self.deck_size < self.max_target_cards {
            return Err(ConfigError::Message(format!(
                "Invalid game.deck_size: {} (must be at least max_target_cards {})",
                self.deck_size, self.max_target_cards
            )));
        }
        Ok(())
    }

    pub fn round_rules(&self) -> RoundRules {
        RoundRules {
            deck_size: self.deck_size,
            hand_size: self.hand_size,
            min_target_cards: self.min_target_cards,
            max_target_cards: self.max_target_cards,
        }
    }
}
