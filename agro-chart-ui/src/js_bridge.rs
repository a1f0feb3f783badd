//! Typed wrappers around Plotly.js via `js_sys::eval()`.
//!
//! Plotly is loaded from a `<script>` tag injected at startup and used as the
//! `window.Plotly` global. Every call polls until Plotly and the target element
//! exist, so components can fire these from effects without ordering concerns.
//! Values are embedded as JSON literals, which are valid JS expressions.

/// Plotly.js bundle used when the host page does not already provide one.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[agro] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Script that injects Plotly once and raises `window.__agroPlotlyReady`.
pub fn init_script(plotly_url: &str) -> String {
    format!(
        r#"
        (function() {{
            if (window.__agroPlotlyReady || window.__agroPlotlyLoading) return;
            window.__agroPlotlyLoading = true;
            if (typeof Plotly === 'undefined') {{
                var script = document.createElement('script');
                script.src = {url};
                script.charset = 'utf-8';
                document.head.appendChild(script);
            }}
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    window.__agroPlotlyReady = true;
                    console.log('[agro] Plotly ready');
                }}
            }}, 100);
        }})();
        "#,
        url = js_string(plotly_url),
    )
}

/// Load Plotly.js from [`PLOTLY_CDN`]. Safe to call more than once.
pub fn init_charts() {
    call_js(&init_script(PLOTLY_CDN));
}

/// Script drawing `figure_json` (a serialized `Figure`) into `container_id`.
pub fn render_script(container_id: &str, figure_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var id = {id};
            var figure = {figure};
            var poll = setInterval(function() {{
                var el = document.getElementById(id);
                if (window.__agroPlotlyReady && el) {{
                    clearInterval(poll);
                    try {{
                        Plotly.newPlot(el, figure.data, figure.layout, {{ responsive: true }});
                    }} catch(e) {{ console.error('[agro] Plotly.newPlot error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        id = js_string(container_id),
        figure = figure_json,
    )
}

/// Draw a figure. Replaces whatever was plotted in the container before.
pub fn render_figure(container_id: &str, figure_json: &str) {
    log::debug!("js_bridge: render {}", container_id);
    call_js(&render_script(container_id, figure_json));
}

/// Script restyling trace visibility and the title of an existing plot.
pub fn selection_script(container_id: &str, visibility: &[bool], title: &str) -> String {
    let visible = serde_json::to_string(visibility).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
        (function() {{
            var id = {id};
            var poll = setInterval(function() {{
                var el = document.getElementById(id);
                if (window.__agroPlotlyReady && el && el.data) {{
                    clearInterval(poll);
                    try {{
                        Plotly.update(el, {{ visible: {visible} }}, {{ 'title.text': {title} }});
                    }} catch(e) {{ console.error('[agro] Plotly.update error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        id = js_string(container_id),
        visible = visible,
        title = js_string(title),
    )
}

/// Apply a region selection to an already drawn figure. Only visibility and
/// title change; data and axes stay as plotted.
pub fn apply_selection(container_id: &str, visibility: &[bool], title: &str) {
    log::debug!("js_bridge: select on {} -> {}", container_id, title);
    call_js(&selection_script(container_id, visibility, title));
}

/// Release the plot in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({id}); \
         if (el) {{ if (typeof Plotly !== 'undefined') Plotly.purge(el); el.innerHTML = ''; }}",
        id = js_string(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_script_embeds_figure_as_literal() {
        let script = render_script("forest-flux-chart", r#"{"data":[],"layout":{}}"#);
        assert!(script.contains(r#"var id = "forest-flux-chart";"#));
        assert!(script.contains(r#"var figure = {"data":[],"layout":{}};"#));
        assert!(script.contains("Plotly.newPlot"));
    }

    #[test]
    fn selection_script_quotes_title() {
        let script = selection_script("c", &[false, true], "Forest Flux for Cote d'Ivoire");
        assert!(script.contains("visible: [false,true]"));
        assert!(script.contains(r#"'title.text': "Forest Flux for Cote d'Ivoire""#));
    }

    #[test]
    fn init_script_loads_given_url() {
        let script = init_script("https://example.org/plotly.js");
        assert!(script.contains(r#"script.src = "https://example.org/plotly.js";"#));
    }
}
