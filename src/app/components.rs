use leptos::prelude::*;

use super::{
    content::{ExperienceEntry, Stat},
    portfolio::PageState,
};

/// Entrance animation classes: `hidden` until the page has loaded.
pub fn reveal(loaded: bool, hidden: &'static str, shown: &'static str) -> &'static str {
    if loaded {
        shown
    } else {
        hidden
    }
}

pub const FADE_UP: (&str, &str) = ("translate-y-8 opacity-0", "translate-y-0 opacity-100");
pub const FADE_UP_SMALL: (&str, &str) = ("translate-y-4 opacity-0", "translate-y-0 opacity-100");
pub const SLIDE_FROM_RIGHT: (&str, &str) = ("translate-x-8 opacity-0", "translate-x-0 opacity-100");
pub const SLIDE_FROM_LEFT: (&str, &str) = ("-translate-x-8 opacity-0", "translate-x-0 opacity-100");

/// Class string that switches from `motion.0` to `motion.1` once loaded.
pub fn revealed(
    base: &'static str,
    motion: (&'static str, &'static str),
) -> impl Fn() -> String + Send + Sync + 'static {
    let page = expect_context::<PageState>();
    move || format!("{base} {}", reveal(page.loaded.get(), motion.0, motion.1))
}

pub fn delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms")
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(default = "from-blue-600 to-teal-500")] accent: &'static str,
    #[prop(default = "text-gray-900")] color: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class=format!("text-4xl font-bold mb-4 {color}")>{title}</h2>
            <div class=format!("w-24 h-1 bg-gradient-to-r {accent} mx-auto rounded-full")></div>
        </div>
    }
}

#[component]
pub fn SkillBadge(skill: &'static str, #[prop(default = 0)] delay: u32) -> impl IntoView {
    view! {
        <span
            class=revealed(
                "inline-block px-3 py-1 m-1 text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600 rounded-full transform transition-all duration-500 hover:scale-110 hover:shadow-lg",
                FADE_UP_SMALL,
            )
            style=delay_style(delay)
        >
            {skill}
        </span>
    }
}

#[component]
pub fn StatCard(stat: &'static Stat, #[prop(default = 0)] delay: u32) -> impl IntoView {
    view! {
        <div
            class=revealed(
                "bg-white p-6 rounded-xl shadow-lg hover:shadow-xl transition-all duration-500 transform hover:-translate-y-2",
                FADE_UP,
            )
            style=delay_style(delay)
        >
            <div class="flex items-center justify-center w-12 h-12 bg-gradient-to-r from-blue-600 to-teal-500 rounded-lg mb-4 mx-auto">
                <i class=format!("{} text-2xl text-white", stat.icon) />
            </div>
            <h3 class="text-2xl font-bold text-gray-900 mb-2">{stat.value}</h3>
            <p class="text-gray-600 text-sm">{stat.label}</p>
        </div>
    }
}

#[component]
pub fn ExperienceCard(
    entry: &'static ExperienceEntry,
    #[prop(default = 0)] delay: u32,
) -> impl IntoView {
    view! {
        <div
            class=revealed(
                "bg-white p-6 rounded-xl shadow-lg hover:shadow-xl transition-all duration-500 transform hover:-translate-y-1 border-l-4 border-blue-600",
                SLIDE_FROM_RIGHT,
            )
            style=delay_style(delay)
        >
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h3 class="text-xl font-bold text-gray-900">{entry.role}</h3>
                    <h4 class="text-lg font-semibold text-blue-600">{entry.company}</h4>
                    <p class="text-sm text-gray-500 flex items-center">
                        <i class="extra-location mr-1" />
                        {entry.location}
                    </p>
                </div>
                <div class="text-sm font-medium text-gray-600 bg-gray-100 px-3 py-1 rounded-full flex items-center">
                    <i class="extra-calendar mr-1" />
                    {entry.period}
                </div>
            </div>
            <ul class="space-y-2">
                {entry
                    .achievements
                    .iter()
                    .map(|achievement| {
                        view! {
                            <li class="flex items-start text-gray-700">
                                <i class="extra-zap mr-2 mt-0.5 text-teal-500 flex-shrink-0" />
                                <span class="text-sm leading-relaxed">{*achievement}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
