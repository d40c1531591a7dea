#[macro_use(new_key_type)]
extern crate slotmap;
#[macro_use]
extern crate log;

mod engine;
mod game;
mod helpers;

use cgmath::*;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    error::Error,
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use engine::*;
use game::*;
use helpers::*;

pub const EPSILON: f64 = 0.000_001;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let conf = match build_config() {
        Ok(conf) => conf,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if conf.happy_exit {
        return;
    }
    debug!("{:#?}", conf);

    let quit = Arc::new(AtomicBool::new(false));
    let quit_handler = quit.clone();
    ctrlc::set_handler(move || {
        warn!("interrupted");
        quit_handler.store(true, Ordering::Relaxed);
    })
    .or_log_error("failed to install Ctrl-C handler");

    let mut engine = match Engine::new(conf, real_filesystem(), quit) {
        Ok(engine) => engine,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    while engine.tick() {}
}
