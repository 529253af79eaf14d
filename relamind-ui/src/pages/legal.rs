//! Terms and Privacy Pages

use leptos::*;

/// Terms of service
#[component]
pub fn Terms() -> impl IntoView {
    view! {
        <LegalPage title="服务条款">
            <p>"RelaMind 提供基于人工智能的对话、任务规划与日记记录服务。"</p>
            <p>"AI 生成的内容仅供参考，不构成医疗、心理、法律或财务建议。如有需要，请咨询专业人士。"</p>
            <p>"请勿利用本服务发布违法、侵权或有害的内容。我们可能对违反条款的使用采取限制措施。"</p>
            <p>"我们会持续改进服务，条款更新后继续使用即视为接受新的条款。"</p>
        </LegalPage>
    }
}

/// Privacy policy
#[component]
pub fn Privacy() -> impl IntoView {
    view! {
        <LegalPage title="隐私政策">
            <p>"我们保存你的对话记录与日记内容，用于在后续对话中回顾你的成长经历。"</p>
            <p>"日记会连同日期、心情和标签存入知识库，仅用于为你提供个性化回应。"</p>
            <p>"我们不会出售你的个人信息。超级智能体执行任务时可能访问公开网络资源，但不会上传你的日记。"</p>
            <p>"如需删除你的数据，请联系我们。"</p>
        </LegalPage>
    }
}

#[component]
fn LegalPage(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <article class="max-w-3xl mx-auto bg-gray-800 rounded-xl p-8">
            <h1 class="text-3xl font-bold mb-6">{title}</h1>
            <div class="space-y-4 text-gray-300 leading-relaxed">
                {children()}
            </div>
        </article>
    }
}
