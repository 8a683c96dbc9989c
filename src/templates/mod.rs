//! Built-in JAMMLOG templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. Autoescaping is on for
//! `.html` templates. Post fields go through the `verbatim` filter instead,
//! which escapes the same characters and also writes carriage returns as
//! `&#13;`: a literal CR would be rewritten to LF by any HTML parser, a
//! character reference is not. Besides `verbatim` output, only the
//! pre-rendered navigation fragment, the static navigation hrefs and
//! generated post URLs are marked `| safe`.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::content::{Post, PostId};

/// Template renderer with the embedded JAMMLOG templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("jammlog/layout.html")),
            ("post_list.html", include_str!("jammlog/post_list.html")),
            ("post_detail.html", include_str!("jammlog/post_detail.html")),
            // Partials
            ("partials/nav.html", include_str!("jammlog/partials/nav.html")),
        ])?;

        tera.register_filter("verbatim", verbatim_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template_name, context)
    }
}

/// Escape text so that a parsed document reads back exactly as `s`
pub fn escape_verbatim(s: &str) -> String {
    tera::escape_html(s).replace('\r', "&#13;")
}

/// Tera filter: escape post text, keeping carriage returns
fn verbatim_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("verbatim", "value", String, value);
    Ok(tera::Value::String(escape_verbatim(&s)))
}

/// A fixed navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Site-wide navigation, in display order
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "JAMMLOG",
        href: "/",
    },
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Blog",
        href: "/blog/",
    },
    NavLink {
        label: "About Me",
        href: "/about_me/",
    },
];

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub date: String,
    pub url: String,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            date: post.created_at.format("%Y-%m-%d").to_string(),
            url: post.url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_verbatim() {
        assert_eq!(escape_verbatim("a\r\nb"), "a&#13;\nb");
        assert_eq!(escape_verbatim("<b>&"), "&lt;b&gt;&amp;");
        assert_eq!(escape_verbatim("첫 번째"), "첫 번째");
    }
}
