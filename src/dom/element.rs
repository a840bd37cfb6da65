// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Elemento por ID o error (para propagar con `?`)
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("Elemento #{} não encontrado", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Reemplaza el contenido de `#id` si existe (la vista puede haber cambiado)
pub fn set_html_by_id(id: &str, html: &str) -> bool {
    match get_element_by_id(id) {
        Some(element) => {
            element.set_inner_html(html);
            true
        }
        None => false,
    }
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Habilitar / deshabilitar un botón o input
pub fn set_disabled(element: &Element, disabled: bool) -> Result<(), JsValue> {
    if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    }
}

/// Valor de un `<input>` (o `<select>` con el mismo contrato)
pub fn input_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Todos los elementos que cumplen `selector`
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Agregar varios hijos en orden
pub fn append_child_all(parent: &Element, children: &[&Element]) -> Result<(), JsValue> {
    for child in children {
        parent.append_child(child)?;
    }
    Ok(())
}
