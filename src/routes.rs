//! Route Table
//!
//! Static mapping from URL path to page view and document metadata, plus the
//! global pre-navigation guard that applies that metadata.

use serde::Serialize;

/// Page views the application can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    RelaMind,
    SuperAgent,
    Diary,
    Terms,
    Privacy,
}

impl View {
    /// Path of the route rendering this view
    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|route| route.view == self)
            .map_or("/", |route| route.path)
    }
}

/// Document metadata attached to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RouteMeta {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

/// A single client-side route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub meta: RouteMeta,
}

/// All client-side routes. Paths are unique.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        name: "Home",
        view: View::Home,
        meta: RouteMeta {
            title: Some("RelaMind - AI 个人成长伙伴"),
            description: Some(
                "RelaMind 是你的 AI 成长伙伴，帮助你记录成长、理解自己、成为更好的你",
            ),
        },
    },
    RouteEntry {
        path: "/relamind",
        name: "RelaMind",
        view: View::RelaMind,
        meta: RouteMeta {
            title: Some("RelaMind - AI 个人成长伙伴"),
            description: Some("与 RelaMind 对话，记录成长，理解自己"),
        },
    },
    RouteEntry {
        path: "/super-agent",
        name: "SuperAgent",
        view: View::SuperAgent,
        meta: RouteMeta {
            title: Some("AI超级智能体 - RelaMind"),
            description: Some("AI超级智能体是全能助手，能解答各类专业问题"),
        },
    },
    RouteEntry {
        path: "/diary",
        name: "Diary",
        view: View::Diary,
        meta: RouteMeta {
            title: Some("成长日记 - RelaMind"),
            description: Some("记录每天的心情与感想，让 RelaMind 陪你回顾成长"),
        },
    },
    RouteEntry {
        path: "/terms",
        name: "Terms",
        view: View::Terms,
        meta: RouteMeta {
            title: Some("服务条款 - RelaMind"),
            description: Some("RelaMind 服务条款"),
        },
    },
    RouteEntry {
        path: "/privacy",
        name: "Privacy",
        view: View::Privacy,
        meta: RouteMeta {
            title: Some("隐私政策 - RelaMind"),
            description: Some("RelaMind 如何收集、使用和保护你的个人信息"),
        },
    },
];

/// Look up the route matching a location path.
///
/// Query string and fragment are ignored, as is a trailing slash on any path
/// other than the root.
pub fn find_route(path: &str) -> Option<&'static RouteEntry> {
    let path = path
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    ROUTES.iter().find(|route| route.path == path)
}

/// Look up a route by its name
pub fn route_by_name(name: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|route| route.name == name)
}

/// Writable document head (title and description meta tag)
pub trait DocumentHead {
    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);
    fn set_description(&mut self, description: &str);
}

/// Outcome of the navigation guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
}

/// Global pre-navigation hook.
///
/// Copies the destination's title (and description, when declared) into the
/// document head. Never blocks or redirects.
pub fn before_each<H: DocumentHead + ?Sized>(to: &RouteEntry, head: &mut H) -> Navigation {
    if let Some(title) = to.meta.title {
        head.set_title(title);
    }
    if let Some(description) = to.meta.description {
        head.set_description(description);
    }

    tracing::debug!(route = to.name, path = to.path, "Navigating");
    Navigation::Proceed
}

/// In-memory document head, for tests and non-browser renderers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
    pub title: String,
    pub description: Option<String>,
}

impl DocumentHead for MemoryHead {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_description(&mut self, description: &str) {
        self.description = Some(description.to_string());
    }
}
