use leptos::prelude::*;

use super::{
    content::{NAME, SECTIONS},
    portfolio::PageState,
};

#[component]
pub fn NavBar() -> impl IntoView {
    let page = expect_context::<PageState>();
    view! {
        <nav class="fixed top-0 w-full bg-white/95 backdrop-blur-md border-b border-gray-200 z-50 transition-all duration-300">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h3 class="text-xl font-bold bg-gradient-to-r from-blue-600 to-teal-500 bg-clip-text text-transparent">
                            {NAME}
                        </h3>
                    </div>
                    <div class="hidden md:flex space-x-8">
                        <NavLinks />
                    </div>
                    <div class="md:hidden">
                        <button
                            on:click=move |_| page.toggle_menu()
                            class="p-2 rounded-md text-gray-600 hover:text-blue-600 transition-colors"
                            aria-label="Toggle navigation menu"
                            aria-expanded=move || page.menu_open.get().to_string()
                        >
                            <i class=move || {
                                if page.menu_open.get() { "extra-close text-2xl" } else { "extra-menu text-2xl" }
                            } />
                        </button>
                    </div>
                </div>
                <Show when=move || page.menu_open.get()>
                    <div class="md:hidden py-4 border-t border-gray-200">
                        <div class="flex flex-col space-y-2">
                            <NavLinks />
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn NavLinks() -> impl IntoView {
    SECTIONS
        .iter()
        .map(|(target, label)| view! { <NavLink target=*target label=*label /> })
        .collect_view()
}

#[component]
pub fn NavLink(target: &'static str, label: &'static str) -> impl IntoView {
    let page = expect_context::<PageState>();
    let active = move || page.is_active(target);
    view! {
        <button
            on:click=move |_| page.navigate(target)
            class=move || {
                format!(
                    "relative px-4 py-2 text-sm font-medium transition-all duration-300 hover:text-blue-600 {}",
                    if active() { "text-blue-600" } else { "text-gray-600" },
                )
            }
        >
            {label}
            <Show when=active>
                <div class="absolute bottom-0 left-0 w-full h-0.5 bg-gradient-to-r from-blue-600 to-teal-500 rounded-full" />
            </Show>
        </button>
    }
}
