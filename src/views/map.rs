// ============================================================================
// MAP VIEW - Leaflet sobre OpenStreetMap
// ============================================================================
// El mapa se crea una sola vez (primer acceso a la página) y se reutiliza.
// ============================================================================

use std::cell::RefCell;
use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, on_click_id, window};
use crate::utils::leaflet_ffi::{self, lat_lng, LeafletMap};
use crate::utils::{CITY_MARKERS, LOCATE_BUTTON_ID, MAP_CONTAINER_ID};
use crate::views::alert::{show_alert, AlertKind};

thread_local! {
    static MAP: RefCell<Option<LeafletMap>> = RefCell::new(None);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocalização não suportada no seu navegador!";

pub fn map_html() -> String {
    format!(
        r#"<button type="button" class="btn" id="{}">📍 Localizar-me</button><div id="{}" class="map-container"></div>"#,
        LOCATE_BUTTON_ID, MAP_CONTAINER_ID
    )
}

/// Muestra el mapa de la página `mapa`
pub fn show_map() {
    if let Err(e) = try_show_map() {
        log::error!("❌ [MAP] {:?}", e);
    }
}

fn try_show_map() -> Result<(), JsValue> {
    let existing = MAP.with(|slot| slot.borrow().clone());
    if let Some(map) = existing {
        // La sección estuvo oculta: Leaflet necesita recalcular el tamaño
        map.invalidate_size();
        return Ok(());
    }
    if get_element_by_id(MAP_CONTAINER_ID).is_none() {
        return Ok(());
    }

    let config = &CONFIG.map_config;
    let map = leaflet_ffi::create_map(MAP_CONTAINER_ID)?;
    map.set_view(&lat_lng(config.default_center_lat, config.default_center_lng), config.default_zoom);

    let options = serde_wasm_bindgen::to_value(&TileLayerOptions {
        attribution: &config.attribution,
        max_zoom: 19,
    })?;
    leaflet_ffi::tile_layer(&config.tile_url, &options).add_layer_to(&map);

    for (name, lat, lng) in CITY_MARKERS {
        leaflet_ffi::marker(&lat_lng(lat, lng)).add_marker_to(&map).bind_popup(name);
    }
    log::info!("🗺️ [MAP] Mapa criado");

    MAP.with(|slot| *slot.borrow_mut() = Some(map.clone()));

    let button_map = map.clone();
    on_click_id(LOCATE_BUTTON_ID, move |_| locate_user(&button_map))?;
    locate_user(&map);
    Ok(())
}

/// Tras logout el contenedor desaparece: el próximo acceso crea un mapa nuevo
pub fn forget_map() {
    MAP.with(|slot| slot.borrow_mut().take());
}

/// Centra el mapa en la posición del navegador. Si el usuario niega el permiso no pasa nada.
fn locate_user(map: &LeafletMap) {
    let Some(navigator) = window().map(|w| w.navigator()) else {
        return;
    };
    let supported = Reflect::has(&navigator, &"geolocation".into()).unwrap_or(false);
    let geolocation = match navigator.geolocation() {
        Ok(geo) if supported => geo,
        _ => {
            show_alert(GEOLOCATION_UNSUPPORTED, AlertKind::Warning);
            return;
        }
    };

    let map = map.clone();
    let on_position = Closure::once(move |position: JsValue| {
        if let Some((lat, lng)) = coords(&position) {
            let center = lat_lng(lat, lng);
            map.set_view(&center, CONFIG.map_config.locate_zoom);
            leaflet_ffi::marker(&center)
                .add_marker_to(&map)
                .bind_popup("Você está aqui!")
                .open_popup();
            log::info!("📍 [MAP] Posição: {:.5}, {:.5}", lat, lng);
        }
    });
    let on_error = Closure::once(move |_err: JsValue| {
        log::debug!("📍 [MAP] Geolocalização negada ou indisponível");
    });

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        on_position.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
    ) {
        log::warn!("⚠️ [MAP] getCurrentPosition falhou: {:?}", e);
    }
    on_position.forget();
    on_error.forget();
}

fn coords(position: &JsValue) -> Option<(f64, f64)> {
    let coords = Reflect::get(position, &"coords".into()).ok()?;
    let lat = Reflect::get(&coords, &"latitude".into()).ok()?.as_f64()?;
    let lng = Reflect::get(&coords, &"longitude".into()).ok()?.as_f64()?;
    Some((lat, lng))
}
