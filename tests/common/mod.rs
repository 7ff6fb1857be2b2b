#![allow(dead_code)]

use std::time::Duration;

use actix::{Actor, Addr, Context, Handler, Message, MessageResult};
use plate_server::{
    env::GameSettings,
    game::{
        rng::RandomSource,
        table::Table,
        RoundRules,
    },
    protocol::ServerMessage,
    start_table,
    subscript::{
        messages::{GetObserverCount, Register},
        SubScriptionManager,
    },
    table::{messages::GetSnapshot, TableActor},
};
use uuid::Uuid;

/// 항상 같은 값을 돌려주는 난수 공급원.
///
/// `Fixed(2)` 이면 모든 카드가 2/2 가 됩니다.
pub struct Fixed(pub u32);

impl RandomSource for Fixed {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.0.clamp(low, high)
    }
}

/// 받은 ServerMessage 를 모아두는 가짜 연결
#[derive(Default)]
pub struct Observer {
    received: Vec<ServerMessage>,
}

impl Actor for Observer {
    type Context = Context<Self>;
}

impl Handler<ServerMessage> for Observer {
    type Result = ();

    fn handle(&mut self, msg: ServerMessage, _ctx: &mut Context<Self>) {
        self.received.push(msg);
    }
}

#[derive(Message)]
#[rtype(result = "Vec<ServerMessage>")]
pub struct Drain;

impl Handler<Drain> for Observer {
    type Result = MessageResult<Drain>;

    fn handle(&mut self, _msg: Drain, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(std::mem::take(&mut self.received))
    }
}

pub struct Harness {
    pub table: Addr<TableActor>,
    pub sub_manager: Addr<SubScriptionManager>,
}

impl Harness {
    pub fn start(seed: u64) -> Self {
        let game = GameSettings {
            rng_seed: Some(seed),
            ..GameSettings::default()
        };
        let sub_manager = SubScriptionManager::new().start();
        let table = start_table(&game, sub_manager.clone());
        Self { table, sub_manager }
    }

    /// 모든 카드가 2/2 이고 target 이 카드 한 장(1/1)인 테이블.
    /// 첫 번째 플레이어가 아무 카드나 내면 바로 이깁니다.
    pub fn rigged(restart_delay: Option<Duration>) -> Self {
        let rules = RoundRules {
            min_target_cards: 1,
            max_target_cards: 1,
            ..RoundRules::default()
        };
        let rng: Box<dyn RandomSource> = Box::new(Fixed(2));
        let sub_manager = SubScriptionManager::new().start();
        let table = TableActor::new(Table::new(rules, rng), sub_manager.clone(), restart_delay)
            .start();
        Self { table, sub_manager }
    }

    pub async fn connect(&self) -> (Uuid, Addr<Observer>) {
        let connection_id = Uuid::new_v4();
        let observer = Observer::default().start();
        self.sub_manager
            .send(Register {
                connection_id,
                addr: observer.clone().recipient(),
            })
            .await
            .unwrap();
        (connection_id, observer)
    }

    /// table 과 subscription manager 의 mailbox 가 빌 때까지 기다립니다.
    pub async fn settle(&self) {
        self.table.send(GetSnapshot).await.unwrap();
        self.sub_manager.send(GetObserverCount).await.unwrap();
    }

    pub async fn drain(&self, observer: &Addr<Observer>) -> Vec<ServerMessage> {
        self.settle().await;
        observer.send(Drain).await.unwrap()
    }
}

pub fn kinds(messages: &[ServerMessage]) -> Vec<&'static str> {
    messages.iter().map(|m| m.kind()).collect()
}
