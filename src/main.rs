use actix_web::{
    self, App, HttpServer,
    middleware::{Logger, from_fn},
    web,
};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::{connect_database, create_redis_pool},
    middlewares::authentication,
    modules::{
        friendship::{repository_pg::FriendshipRepositoryPg, service::FriendshipRequestService},
        notification::RedisNotificationPublisher,
        reaction::{repository_pg::ReactionRepositoryPg, service::ReactionService},
        training::{repository_pg::TrainingRepositoryPg, service::TrainingService},
        user::{repository_pg::UserRepositoryPg, service::UserService},
    },
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let redis_pool =
        create_redis_pool().map_err(|_| std::io::Error::other("Redis connection error"))?;

    let user_repo = Arc::new(UserRepositoryPg::new(db_pool.clone()));
    let friendship_repo = Arc::new(FriendshipRepositoryPg::new(db_pool.clone()));
    let training_repo = Arc::new(TrainingRepositoryPg::new(db_pool.clone()));
    let reaction_repo = Arc::new(ReactionRepositoryPg::new(db_pool.clone()));
    let publisher = Arc::new(RedisNotificationPublisher::new(redis_pool));

    let user_service = UserService::with_dependencies(user_repo.clone());
    let friendship_service =
        FriendshipRequestService::with_dependencies(friendship_repo.clone(), user_repo.clone());
    let training_service = TrainingService::with_dependencies(
        training_repo.clone(),
        friendship_repo.clone(),
        publisher,
    );
    let reaction_service = ReactionService::with_dependencies(reaction_repo, training_repo);

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(friendship_service.clone()))
            .app_data(web::Data::new(training_service.clone()))
            .app_data(web::Data::new(reaction_service.clone()))
            .app_data(web::Data::new(db_pool.clone()))
            .service(health_check)
            .service(
                web::scope("/api").configure(modules::user::route::public_api_configure).service(
                    web::scope("")
                        .wrap(from_fn(authentication))
                        .configure(modules::user::route::configure)
                        .configure(modules::friendship::route::configure)
                        .configure(modules::training::route::configure)
                        .configure(modules::reaction::route::configure),
                ),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
