use crate::modules::friendship::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/friendships")
            .service(send_friendship_request)
            .service(accept_friendship_request)
            .service(reject_friendship_request)
            .service(cancel_friendship_request)
            .service(list_sent_requests)
            .service(list_received_requests)
            .service(list_friends),
    );
}
