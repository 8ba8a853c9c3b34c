//! citydb-wasm — WebAssembly bindings for citydb-core
//!
//! This crate exposes a small JS/WASM API over the embedded city gazetteer
//! for browser front ends (city pickers, route comparison widgets).
//!
//! What it provides
//! ----------------
//! - Initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Plain queries: `city_count()`, `city_name(id)`, `distance_km(a, b)`
//! - JSON-serializable views:
//!   - `search_cities("bomb", 10)`
//!   - `get_city("mumbai")`
//!   - `cities_by_state("Kerala")`, `cities_by_region("South")`, `cities_by_tier(1)`
//!   - `popular_cities(20)`, `related_cities("pune", 5)`, `nearest_cities("pune", 5)`
//!   - `smart_suggestions("tech capital")`
//!   - `route_options("pune", "mumbai")`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search_cities, distance_km } from 'citydb-wasm';
//!
//! async function main() {
//!   await init();
//!   console.log(search_cities('bombay', 5));
//!   console.log(distance_km('mumbai', 'delhi'));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The dataset is compiled into `citydb-core`; there is nothing to fetch.
//! - Functions returning `JsValue` throw a JS error string if the gazetteer
//!   cannot be built or a value cannot be serialized.
use citydb_core::prelude::*;
use std::result::Result;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

fn db() -> Result<&'static Gazetteer, JsValue> {
    Gazetteer::shared().map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js<T: Serialize + ?Sized>(v: &T) -> Result<JsValue, JsValue> {
    to_value(v).map_err(JsValue::from)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match Gazetteer::shared() {
        Ok(db) => {
            let stats = db.stats();
            web_sys::console::log_1(&format!("✓ Loaded {} cities", stats.cities).into());
        }
        Err(e) => web_sys::console::error_1(&format!("citydb: {e}").into()),
    }
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn city_count() -> usize {
    Gazetteer::shared().map(|db| db.len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn city_name(id: &str) -> Option<String> {
    Gazetteer::shared()
        .ok()?
        .get_by_id(id)
        .map(|c| c.name().to_string())
}

/// Great-circle km between two city ids; `undefined` if either is unknown.
#[wasm_bindgen]
pub fn distance_km(from: &str, to: &str) -> Option<f64> {
    let db = Gazetteer::shared().ok()?;
    DistanceCalculator::new(db).distance(from, to)
}

#[wasm_bindgen]
pub fn get_city(id: &str) -> Result<JsValue, JsValue> {
    match db()?.get_by_id(id) {
        Some(c) => js(c),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    js(&db()?.stats())
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

/// Ranked matches, each as `{ score, city }`, best first.
#[wasm_bindgen]
pub fn search_cities(query: &str, limit: usize) -> Result<JsValue, JsValue> {
    let hits = CityQuery::new(db()?).search_scored(query, limit);

    let array = js_sys::Array::new();
    for hit in &hits {
        array.push(&js(hit)?);
    }
    Ok(array.into())
}

#[wasm_bindgen]
pub fn smart_suggestions(query: &str) -> Result<JsValue, JsValue> {
    js(&CityQuery::new(db()?).suggest(query))
}

/* --------------------------------------------------------------------------
   Category Views
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn cities_by_state(state: &str) -> Result<JsValue, JsValue> {
    js(&CityQuery::new(db()?).by_state(state))
}

#[wasm_bindgen]
pub fn cities_by_region(region: &str) -> Result<JsValue, JsValue> {
    let region: Region = region.parse().map_err(|e: String| JsValue::from_str(&e))?;
    js(&CityQuery::new(db()?).by_region(region))
}

#[wasm_bindgen]
pub fn cities_by_tier(tier: u8) -> Result<JsValue, JsValue> {
    let tier = Tier::new(tier).ok_or_else(|| JsValue::from_str("tier must be 1..=4"))?;
    js(&CityQuery::new(db()?).by_tier(tier))
}

#[wasm_bindgen]
pub fn popular_cities(limit: usize) -> Result<JsValue, JsValue> {
    js(&CityQuery::new(db()?).popular(limit))
}

#[wasm_bindgen]
pub fn related_cities(id: &str, limit: usize) -> Result<JsValue, JsValue> {
    js(&CityQuery::new(db()?).related(id, limit))
}

#[derive(Serialize)]
struct NearView<'a> {
    city: &'a CityRecord,
    distance_km: f64,
}

#[wasm_bindgen]
pub fn nearest_cities(id: &str, limit: usize) -> Result<JsValue, JsValue> {
    let near: Vec<NearView<'_>> = CityQuery::new(db()?)
        .nearest(id, limit)
        .into_iter()
        .map(|(city, distance_km)| NearView { city, distance_km })
        .collect();
    js(&near)
}

/* --------------------------------------------------------------------------
   Routes
-------------------------------------------------------------------------- */

/// Per-mode options, lowest emissions first; `null` for unknown ids.
#[wasm_bindgen]
pub fn route_options(from: &str, to: &str) -> Result<JsValue, JsValue> {
    match RoutePlanner::new(db()?).plan(from, to) {
        Some(routes) => js(&routes),
        None => Ok(JsValue::NULL),
    }
}
