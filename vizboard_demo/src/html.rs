// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static HTML report for `vizboard_demo`.

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) frames: Vec<HtmlFrame>,
}

#[derive(Debug)]
pub(crate) struct HtmlFrame {
    pub(crate) caption: String,
    pub(crate) svg: String,
}

impl HtmlFrame {
    pub(crate) fn new(caption: impl Into<String>, svg: String) -> Self {
        Self {
            caption: caption.into(),
            svg,
        }
    }
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_html(&section.description)));
        out.push_str("<div class=\"frames\">\n");
        for frame in &section.frames {
            out.push_str("<figure>\n");
            // Frames are inline SVG.
            out.push_str(&frame.svg);
            out.push_str(&format!(
                "<figcaption>{}</figcaption>\n",
                escape_html(&frame.caption)
            ));
            out.push_str("</figure>\n");
        }
        out.push_str("</div>\n</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

const STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 2rem; background: #fafafa; color: #222; }
section { margin-bottom: 3rem; }
.frames { display: flex; flex-wrap: wrap; gap: 1.5rem; }
figure { margin: 0; }
figcaption { font-size: 0.85rem; color: #555; margin-top: 0.25rem; }
svg { border: 1px solid #ddd; }
</style>
"#;

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
