use maud::{Markup, html};

use crate::HTMX_PATH;

/// The fragment URL the index shell loads. The filter form submits back to
/// `/` as a plain GET, so the raw (already-encoded) query string is forwarded
/// into the `/matches` request untouched.
#[must_use]
pub fn fragment_url(query_string: &str) -> String {
    if query_string.is_empty() {
        "/matches".to_string()
    } else {
        format!("/matches?{query_string}")
    }
}

#[must_use]
pub fn render_index_template(title: &str, fragment: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head{
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) {}
        }
        body {
            h1 { (title) }
            div id="matches" hx-get=(fragment) hx-trigger="load" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
        }
    }
}
