#[macro_use] extern crate rocket;

mod config;
mod handlers;
mod messages;

use config::ServerConfig;
use gomoku_engine::GomokuEngine;

#[launch]
fn run() -> _ {
    env_logger::init();

    let config = ServerConfig::from_env();
    let engine = GomokuEngine::with_pool_size(config.pool_size);

    rocket::build()
        .mount("/", handlers::get_routes())
        .manage(engine)
        .manage(config)
}
