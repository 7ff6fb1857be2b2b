use std::io;
use std::time::Duration;

use actix::{Actor, Addr};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    env::{GameSettings, Settings},
    game::{
        rng::{GameRng, RandomSource},
        table::Table,
    },
    subscript::SubScriptionManager,
    table::TableActor,
};

pub mod admin;
pub mod card;
pub mod enums;
pub mod env;
pub mod exception;
pub mod fraction;
pub mod game;
pub mod protocol;
pub mod session;
pub mod subscript;
pub mod table;
pub mod unit;

pub struct LoggerManager {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

impl LoggerManager {
    pub fn setup(settings: &Settings) -> Self {
        // 1. 파일 로거 설정
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            &settings.logging.directory,
            &settings.logging.filename,
        );
        let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(file_appender);

        // 2. 로그 레벨 필터 (RUST_LOG 가 있으면 우선)
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.server.log_level));

        // 3. 콘솔 레이어
        let console_layer = fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(false)
            .pretty();

        // 4. 파일 레이어
        let file_layer = fmt::layer()
            .with_writer(non_blocking_file_writer)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .init();

        tracing::info!(
            "Logger initialized: console and file ({}/{})",
            settings.logging.directory,
            settings.logging.filename
        );

        Self { _guard: guard }
    }
}

/// HTTP 핸들러들이 공유하는 상태
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub table_addr: Addr<TableActor>,
    pub sub_manager_addr: Addr<SubScriptionManager>,
}

/// 설정값으로 테이블 actor 를 만들어 시작합니다.
pub fn start_table(
    game: &GameSettings,
    sub_manager_addr: Addr<SubScriptionManager>,
) -> Addr<TableActor> {
    let rng: Box<dyn RandomSource> = Box::new(GameRng::from_optional_seed(game.rng_seed));
    let table = Table::new(game.round_rules(), rng);
    let restart_delay = game.round_restart_delay_seconds.map(Duration::from_secs);
    TableActor::new(table, sub_manager_addr, restart_delay).start()
}
