use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::{
    table::messages::{GetSnapshot, StartNextRound},
    AppState,
};

/// 실제 플레이어는 유지한 채 새 라운드를 시작합니다.
#[post("/admin/round/restart")]
pub async fn restart_round(state: web::Data<AppState>) -> impl Responder {
    info!("Admin requested next round");
    state.table_addr.do_send(StartNextRound);
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/admin/state")]
pub async fn table_state(state: web::Data<AppState>) -> impl Responder {
    match state.table_addr.send(GetSnapshot).await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => {
            error!("Failed to read table state: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "status": "error",
                "message": e.to_string(),
            }))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(restart_round).service(table_state);
}
