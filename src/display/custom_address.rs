//! Selección de dirección personalizada
//!
//! Muestra u oculta el panel de "Otra dirección..." según el valor del
//! select de origen o destino. Si falta alguno de los dos elementos no se
//! hace nada.

/// Valor del select que activa la dirección personalizada
pub const CUSTOM_VALUE: &str = "custom";

/// Panel que se puede mostrar u ocultar
pub trait RevealPanel {
    fn set_visible(&mut self, visible: bool);
}

/// Acceso a los elementos de la página por id
pub trait PageDocument {
    fn select_value(&self, id: &str) -> Option<String>;
    fn reveal_panel(&mut self, id: &str) -> Option<&mut dyn RevealPanel>;
}

/// Par select/panel de la página
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomAddressPair {
    pub select_id: &'static str,
    pub panel_id: &'static str,
}

pub const ORIGIN_CUSTOM_PAIR: CustomAddressPair = CustomAddressPair {
    select_id: "origen_predefinido",
    panel_id: "origen_custom_wrapper",
};

pub const DESTINATION_CUSTOM_PAIR: CustomAddressPair = CustomAddressPair {
    select_id: "destino_predefinido",
    panel_id: "destino_custom_wrapper",
};

/// Aplicar la regla sobre elementos ya resueltos
///
/// Devuelve la visibilidad aplicada, o `None` si falta algún elemento.
pub fn apply_custom_toggle(
    select_value: Option<&str>,
    panel: Option<&mut dyn RevealPanel>,
) -> Option<bool> {
    let (value, panel) = (select_value?, panel?);
    let visible = value == CUSTOM_VALUE;
    panel.set_visible(visible);
    Some(visible)
}

pub fn toggle_custom_address(
    document: &mut dyn PageDocument,
    pair: CustomAddressPair,
) -> Option<bool> {
    let value = document.select_value(pair.select_id);
    apply_custom_toggle(value.as_deref(), document.reveal_panel(pair.panel_id))
}

pub fn toggle_origin_custom(document: &mut dyn PageDocument) -> Option<bool> {
    toggle_custom_address(document, ORIGIN_CUSTOM_PAIR)
}

pub fn toggle_destination_custom(document: &mut dyn PageDocument) -> Option<bool> {
    toggle_custom_address(document, DESTINATION_CUSTOM_PAIR)
}
