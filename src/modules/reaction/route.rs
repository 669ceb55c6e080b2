use crate::modules::reaction::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/reactions").service(create_reaction).service(list_training_reactions),
    );
}
