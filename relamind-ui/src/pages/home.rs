//! Home Page
//!
//! Landing page introducing the three ways to use RelaMind.

use leptos::*;
use leptos_router::*;
use relamind::View;

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-12">
            // Hero
            <section class="text-center py-12">
                <div class="text-6xl mb-4">"🌱"</div>
                <h1 class="text-4xl font-bold mb-4">"RelaMind"</h1>
                <p class="text-xl text-gray-300">"你的 AI 个人成长伙伴"</p>
                <p class="text-gray-400 mt-2">"记录成长、理解自己、成为更好的你"</p>
                <A
                    href=View::RelaMind.path()
                    class="inline-block mt-8 px-8 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "开始对话"
                </A>
            </section>

            // Feature cards
            <section class="grid md:grid-cols-3 gap-6">
                <FeatureCard
                    icon="💬"
                    title="智能对话"
                    description="情感陪伴、回顾历史、调用工具，RelaMind 会自动选择合适的方式回应你"
                    href=View::RelaMind.path()
                />
                <FeatureCard
                    icon="🤖"
                    title="超级智能体"
                    description="制定计划、搜索资料、生成文件，多步骤完成复杂任务"
                    href=View::SuperAgent.path()
                />
                <FeatureCard
                    icon="📔"
                    title="成长日记"
                    description="写下心情与感想，它们会成为 RelaMind 了解你的记忆"
                    href=View::Diary.path()
                />
            </section>

            // Footer links
            <div class="flex justify-center space-x-6 text-sm text-gray-500">
                <A href=View::Terms.path() class="hover:text-gray-300">"服务条款"</A>
                <A href=View::Privacy.path() class="hover:text-gray-300">"隐私政策"</A>
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    href: &'static str,
) -> impl IntoView {
    view! {
        <A href=href class="block bg-gray-800 hover:bg-gray-700 rounded-xl p-6 transition-colors">
            <div class="text-3xl mb-3">{icon}</div>
            <h2 class="text-xl font-semibold mb-2">{title}</h2>
            <p class="text-gray-400 text-sm">{description}</p>
        </A>
    }
}
