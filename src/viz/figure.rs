//! Minimal Plotly figure model: traces, layout and frames as JSON values,
//! serialized into a self-contained HTML page that loads plotly.js from CDN.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// A chart as plotly.js consumes it: `data` traces, a `layout`, and optional
/// animation `frames`.
#[derive(Debug, Clone)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
    pub frames: Vec<Value>,
}

impl Figure {
    pub fn new(data: Vec<Value>, layout: Value) -> Self {
        Self {
            data,
            layout,
            frames: Vec::new(),
        }
    }

    pub fn with_frames(mut self, frames: Vec<Value>) -> Self {
        self.frames = frames;
        self
    }

    /// Title string from the layout, if set. Used by tests and diagnostics.
    pub fn title(&self) -> Option<&str> {
        self.layout.get("title")?.get("text")?.as_str()
    }

    /// Render the figure as one standalone HTML document.
    pub fn to_html(&self, page_title: &str) -> String {
        let data = escape_for_script(&Value::Array(self.data.clone()));
        let layout = escape_for_script(&self.layout);
        let frames = escape_for_script(&Value::Array(self.frames.clone()));
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n\
             <title>{page_title}</title>\n\
             <script src=\"{PLOTLY_CDN}\"></script>\n</head>\n<body>\n\
             <div id=\"chart\" style=\"width:100%;height:100vh;\"></div>\n\
             <script>\n\
             var data = {data};\n\
             var layout = {layout};\n\
             var frames = {frames};\n\
             Plotly.newPlot(\"chart\", data, layout, {{responsive: true}}).then(function() {{\n\
               if (frames.length > 0) {{ Plotly.addFrames(\"chart\", frames); }}\n\
             }});\n\
             </script>\n</body>\n</html>\n"
        )
    }

    /// Write the HTML document to `path`.
    pub fn write_html<P: AsRef<Path>>(&self, path: P, page_title: &str) -> Result<()> {
        let path = path.as_ref();
        let mut f = File::create(path)
            .with_context(|| format!("create output file {}", path.display()))?;
        f.write_all(self.to_html(page_title).as_bytes())
            .with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

/// JSON embedded in a `<script>` block must not contain a literal `</`,
/// which would terminate the block early.
fn escape_for_script(v: &Value) -> String {
    v.to_string().replace("</", "<\\/")
}
