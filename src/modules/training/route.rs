use crate::modules::training::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/trainings")
            .service(create_training)
            .service(list_user_trainings)
            .service(get_training),
    );
}
