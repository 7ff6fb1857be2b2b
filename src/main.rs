use std::time::Duration;

use actix::{Actor, System};
use actix_web::{get, web, App, Error, HttpRequest, HttpResponse, HttpServer};
use actix_web_actors::ws;
use clap::Parser;
use plate_server::{
    admin, env::Settings, session::PlayerSession, start_table, subscript::SubScriptionManager,
    AppState, LoggerManager,
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "plate_server", about = "Fraction plate card game server")]
struct Args {
    /// config/<run_mode>.toml 을 읽습니다. 없으면 RUN_MODE 환경 변수를 사용합니다.
    #[arg(long)]
    run_mode: Option<String>,
}

#[get("/ws/")]
async fn table_ws_route(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session = PlayerSession::new(
        state.table_addr.clone(),
        state.sub_manager_addr.clone(),
        Duration::from_secs(state.settings.session.heartbeat_interval_seconds),
        Duration::from_secs(state.settings.session.client_timeout_seconds),
    );
    ws::start(session, &req, stream)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 1. 환경변수 로드
    dotenv::dotenv().ok();
    let args = Args::parse();

    // 2. 설정 파일 로드
    let settings = match args.run_mode {
        Some(run_mode) => Settings::load(&run_mode),
        None => Settings::new(),
    }
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    // 3. 로거 초기화
    let _logger_manager = LoggerManager::setup(&settings);

    // 4. actor 시작
    let sub_manager_addr = SubScriptionManager::new().start();
    let table_addr = start_table(&settings.game, sub_manager_addr.clone());
    info!("SubScriptionManager and TableActor started");

    let app_state = AppState {
        settings: settings.clone(),
        table_addr,
        sub_manager_addr,
    };

    // 5. HTTP 서버 시작
    let bind_address = format!("{}:{}", settings.server.bind_address, settings.server.port);
    info!("Starting HTTP server on {}", bind_address);

    let mut server = HttpServer::new(move || {
        let health_route = || async { HttpResponse::Ok().body("OK") };

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .service(table_ws_route)
            .configure(admin::configure)
            .route("/health", web::get().to(health_route))
    })
    .bind(&bind_address)?
    .run();

    info!("Plate server is running on {}", bind_address);

    // 6. 종료 신호 대기
    tokio::select! {
        res = &mut server => {
            error!("Server exited unexpectedly");
            return res;
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl+C received. Initiating graceful shutdown...");
            System::current().stop();
        },
    }

    server.await?;
    info!("System has shut down gracefully");

    Ok(())
}
