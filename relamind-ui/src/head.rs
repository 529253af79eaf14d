//! Browser Document Head
//!
//! [`DocumentHead`] backed by the live `document`, used by the navigation
//! guard.

use leptos::document;
use relamind::DocumentHead;

/// The page's `<title>` and `<meta name="description">`
pub struct BrowserHead;

impl DocumentHead for BrowserHead {
    fn title(&self) -> String {
        document().title()
    }

    fn set_title(&mut self, title: &str) {
        document().set_title(title);
    }

    fn set_description(&mut self, description: &str) {
        let doc = document();

        let meta = match doc.query_selector("meta[name=\"description\"]") {
            Ok(Some(meta)) => meta,
            _ => {
                let Ok(meta) = doc.create_element("meta") else {
                    return;
                };
                let _ = meta.set_attribute("name", "description");
                if let Some(head) = doc.head() {
                    let _ = head.append_child(&meta);
                }
                meta
            }
        };

        let _ = meta.set_attribute("content", description);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use relamind::{before_each, find_route};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn description_tags() -> Vec<String> {
        let nodes = document()
            .query_selector_all("meta[name=\"description\"]")
            .unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .filter_map(|meta| meta.get_attribute("content"))
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_set_title() {
        let mut head = BrowserHead;
        head.set_title("成长日记 - RelaMind");
        assert_eq!(head.title(), "成长日记 - RelaMind");
        assert_eq!(document().title(), "成长日记 - RelaMind");
    }

    #[wasm_bindgen_test]
    fn test_description_created_then_updated() {
        let mut head = BrowserHead;

        head.set_description("first");
        assert_eq!(description_tags(), vec!["first".to_string()]);

        head.set_description("second");
        assert_eq!(description_tags(), vec!["second".to_string()]);
    }

    #[wasm_bindgen_test]
    fn test_guard_writes_document_head() {
        let route = find_route("/super-agent").unwrap();
        before_each(route, &mut BrowserHead);

        assert_eq!(document().title(), "AI超级智能体 - RelaMind");
        assert_eq!(
            description_tags(),
            vec![route.meta.description.unwrap().to_string()]
        );
    }
}
