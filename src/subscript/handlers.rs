use actix::{Context, Handler};
use tracing::{debug, info, warn};

use super::{messages::*, SubScriptionManager};

impl Handler<Register> for SubScriptionManager {
    type Result = ();

    fn handle(&mut self, msg: Register, _ctx: &mut Context<Self>) -> Self::Result {
        info!("Connection {} registered for notifications.", msg.connection_id);
        self.sessions.insert(msg.connection_id, msg.addr);
    }
}

impl Handler<Deregister> for SubScriptionManager {
    type Result = ();

    fn handle(&mut self, msg: Deregister, _ctx: &mut Context<Self>) -> Self::Result {
        info!("Connection {} deregistered.", msg.connection_id);
        self.sessions.remove(&msg.connection_id);
    }
}

impl Handler<ForwardMessage> for SubScriptionManager {
    type Result = ();

    fn handle(&mut self, msg: ForwardMessage, _ctx: &mut Context<Self>) -> Self::Result {
        if let Some(recipient) = self.sessions.get(&msg.connection_id) {
            recipient.do_send(msg.message);
        } else {
            warn!(
                "Could not find session for connection {} to forward {}.",
                msg.connection_id,
                msg.message.kind()
            );
        }
    }
}

impl Handler<Broadcast> for SubScriptionManager {
    type Result = ();

    fn handle(&mut self, msg: Broadcast, _ctx: &mut Context<Self>) -> Self::Result {
        debug!(
            "Broadcasting {} to {} connections",
            msg.message.kind(),
            self.sessions.len()
        );
        for recipient in self.sessions.values() {
            recipient.do_send(msg.message.clone());
        }
    }
}

impl Handler<GetObserverCount> for SubScriptionManager {
    type Result = usize;

    fn handle(&mut self, _msg: GetObserverCount, _ctx: &mut Context<Self>) -> Self::Result {
        self.sessions.len()
    }
}
