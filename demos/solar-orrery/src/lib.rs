use wasm_bindgen::prelude::*;

mod bodies;
mod game;
mod ui;
use game::SolarOrrery;

orrery_web::export_game!(SolarOrrery, "solar-orrery");
