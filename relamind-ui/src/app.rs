//! App Root Component
//!
//! Main application component with routing, the navigation guard and global
//! providers.

use leptos::*;
use leptos_router::*;
use relamind::{before_each, find_route, View};

use crate::components::{Nav, Toast};
use crate::head::BrowserHead;
use crate::pages::{Diary, Home, Privacy, RelaMind, SuperAgent, Terms};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <NavigationGuard />

            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path=View::Home.path() view=Home />
                        <Route path=View::RelaMind.path() view=RelaMind />
                        <Route path=View::SuperAgent.path() view=SuperAgent />
                        <Route path=View::Diary.path() view=Diary />
                        <Route path=View::Terms.path() view=Terms />
                        <Route path=View::Privacy.path() view=Privacy />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Applies the destination route's title and description on every
/// navigation, including the initial load. Unknown paths leave the head as is.
#[component]
fn NavigationGuard() -> impl IntoView {
    let location = use_location();

    create_render_effect(move |_| {
        let path = location.pathname.get();
        if let Some(route) = find_route(&path) {
            before_each(route, &mut BrowserHead);
        }
    });
}

/// Footer with the legal links
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"RelaMind · AI 个人成长伙伴"</span>
                <div class="flex items-center space-x-4">
                    <A href=View::Terms.path() class="hover:text-white">"服务条款"</A>
                    <A href=View::Privacy.path() class="hover:text-white">"隐私政策"</A>
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"页面不存在"</h1>
            <p class="text-gray-400 mb-6">"你访问的页面不存在或已被移除。"</p>
            <A
                href=View::Home.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "返回首页"
            </A>
        </div>
    }
}
