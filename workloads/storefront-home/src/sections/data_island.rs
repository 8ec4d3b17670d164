//! JSON data islands for client-side code.

use serde::Serialize;
use storefront_sdk::storefront_streaming::{escape_html, escape_script_json};

/// Render `value` as `<script type="application/json" id="{id}">`.
pub fn render_data_island<T: Serialize>(id: &str, value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(format!(
        r#"<script type="application/json" id="{}">{}</script>"#,
        escape_html(id),
        escape_script_json(&json)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_island() {
        let html = render_data_island("analytics", &json!({ "pageType": "home" })).unwrap();
        assert_eq!(
            html,
            r#"<script type="application/json" id="analytics">{"pageType":"home"}</script>"#
        );
    }

    #[test]
    fn test_script_close_escaped() {
        let html = render_data_island("x", &json!({ "html": "</script>" })).unwrap();
        assert!(html.contains(r#"<\/script>"#));
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
