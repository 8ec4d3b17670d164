//! Out-of-order section delivery.
//!
//! The shell writes one slot per deferred section in DOM order. Sections
//! arrive later in completion order as `<template>` elements, and a small
//! inline script moves each template's content into its slot, replacing any
//! placeholder.

/// Script body that swaps a streamed template into its slot.
///
/// Include it in the shell head before any section is streamed.
pub const SLOT_SWAP_SCRIPT: &str = "function $swap(id){\
var t=document.querySelector('template[data-section=\"'+id+'\"]');\
var s=document.getElementById('slot-'+id);\
if(!t||!s)return;\
s.replaceChildren(t.content.cloneNode(true));\
t.remove();}";

/// Render an empty (or placeholder-filled) slot for a section.
pub fn render_slot(section_id: &str, placeholder: Option<&str>) -> String {
    format!(
        r#"<div id="slot-{id}" data-slot="{id}">{}</div>"#,
        placeholder.unwrap_or_default(),
        id = section_id
    )
}

/// Render resolved section HTML that replaces its slot's content.
///
/// Empty `html` clears the slot, removing any placeholder.
pub fn render_swap(section_id: &str, html: &str) -> String {
    format!(
        r#"<template data-section="{id}">{html}</template><script>$swap("{id}")</script>"#,
        id = section_id,
        html = html
    )
}
