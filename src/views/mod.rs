//! Page views - turns the post store into HTML documents
//!
//! Both pages embed the output of [`Views::navigation`] verbatim, so the
//! navigation fragment is identical on every page. Renders only read the
//! store and keep no state between calls.

use anyhow::Result;
use tera::Context;

use crate::content::{Post, PostId};
use crate::error::BlogError;
use crate::helpers::{parse_post_url, post_url, BLOG_PATH};
use crate::store::PostStore;
use crate::templates::{PostData, TemplateRenderer, NAV_LINKS};

/// Shown in the main area of the list page while the store is empty
pub const EMPTY_LIST_MESSAGE: &str = "아직 게시물이 없습니다.";

/// A page the views know how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The post list (`/blog/`)
    List,
    /// A single post (`/blog/{id}/`)
    Detail(PostId),
}

impl Route {
    /// Parse a request path into a route
    pub fn parse(path: &str) -> Option<Self> {
        if path == BLOG_PATH {
            Some(Self::List)
        } else {
            parse_post_url(path).map(Self::Detail)
        }
    }

    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Self::List => BLOG_PATH.to_string(),
            Self::Detail(id) => post_url(*id),
        }
    }
}

/// Page renderer
pub struct Views {
    renderer: TemplateRenderer,
    language: String,
}

impl Views {
    /// Create the views, loading the embedded templates
    pub fn new(language: &str) -> Result<Self> {
        Ok(Self {
            renderer: TemplateRenderer::new()?,
            language: language.to_string(),
        })
    }

    /// Render the navigation fragment
    pub fn navigation(&self) -> Result<String, BlogError> {
        let mut context = Context::new();
        context.insert("nav_links", &NAV_LINKS);
        Ok(self.renderer.render("partials/nav.html", &context)?)
    }

    /// Render a route against the current store contents
    pub fn dispatch(&self, route: Route, store: &PostStore) -> Result<String, BlogError> {
        match route {
            Route::List => self.render_list(store),
            Route::Detail(id) => self.render_detail(store, id),
        }
    }

    /// Render the post list page
    pub fn render_list(&self, store: &PostStore) -> Result<String, BlogError> {
        let posts: Vec<PostData> = store.list_all()?.iter().map(PostData::from).collect();
        tracing::debug!("Rendering post list with {} posts", posts.len());

        let mut context = self.page_context()?;
        context.insert("posts", &posts);
        context.insert("empty_message", EMPTY_LIST_MESSAGE);

        Ok(self.renderer.render("post_list.html", &context)?)
    }

    /// Render a post detail page
    pub fn render_detail(&self, store: &PostStore, id: PostId) -> Result<String, BlogError> {
        let post: Post = store.get_by_id(id)?.ok_or(BlogError::NotFound(id))?;
        tracing::debug!("Rendering post {}", id);

        let mut context = self.page_context()?;
        context.insert("post", &PostData::from(&post));

        Ok(self.renderer.render("post_detail.html", &context)?)
    }

    /// Context shared by every full page
    fn page_context(&self) -> Result<Context, BlogError> {
        let mut context = Context::new();
        context.insert("language", &self.language);
        context.insert("navigation", &self.navigation()?);
        Ok(context)
    }
}
