use leptos::prelude::*;

use super::{
    components::{revealed, SLIDE_FROM_LEFT, SLIDE_FROM_RIGHT},
    content::{AVATAR_SRC, HERO_SUMMARY, LINKEDIN_URL, NAME, ROLE},
    portfolio::PageState,
};

const SPARKLE_COUNT: usize = 50;
const SPARKLE_SEED: u32 = 0x9E37_79B9;

/// One twinkling dot of the hero background. Positions are percentages,
/// timings are seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

/// Scatters `count` sparkles from a fixed seed, so the server render and the
/// hydrated page place them identically.
pub fn sparkles(count: usize) -> Vec<Sparkle> {
    let mut state = SPARKLE_SEED;
    // xorshift32, mapped onto [0, 1)
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        f64::from(state) / (f64::from(u32::MAX) + 1.0)
    };
    (0..count)
        .map(|_| Sparkle {
            left: next() * 100.0,
            top: next() * 100.0,
            delay: next() * 3.0,
            duration: 2.0 + next() * 3.0,
        })
        .collect()
}

#[component]
pub fn Hero() -> impl IntoView {
    let page = expect_context::<PageState>();
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center bg-gradient-to-br from-blue-900 via-purple-900 to-teal-900 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-blue-600/20 to-teal-600/20"></div>
            <Sparkles />
            <div class="relative z-10 max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class=revealed("text-white transform transition-all duration-1000", SLIDE_FROM_LEFT)>
                        <h1 class="text-4xl md:text-6xl font-bold mb-6 leading-tight">
                            "Hi, I'm "
                            <span class="bg-gradient-to-r from-orange-400 to-yellow-400 bg-clip-text text-transparent">
                                {NAME}
                            </span>
                        </h1>
                        <h2 class="text-2xl md:text-3xl font-semibold mb-6 text-blue-100">{ROLE}</h2>
                        <p class="text-lg md:text-xl text-blue-100 mb-8 leading-relaxed">
                            {HERO_SUMMARY}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <button
                                on:click=move |_| page.navigate("contact")
                                class="bg-gradient-to-r from-orange-500 to-orange-600 hover:from-orange-600 hover:to-orange-700 text-white font-semibold py-3 px-8 rounded-lg transform transition-all duration-300 hover:-translate-y-1 hover:shadow-xl"
                            >
                                "Get In Touch"
                            </button>
                            <a
                                href=LINKEDIN_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="border-2 border-white/30 hover:bg-white/10 text-white font-semibold py-3 px-8 rounded-lg transform transition-all duration-300 hover:-translate-y-1 flex items-center justify-center"
                            >
                                <i class="extra-link mr-2" />
                                "View LinkedIn"
                            </a>
                        </div>
                    </div>
                    <div class=revealed(
                        "transform transition-all duration-1000 delay-300",
                        SLIDE_FROM_RIGHT,
                    )>
                        <div class="relative">
                            <div class="w-80 h-80 mx-auto bg-gradient-to-br from-blue-500/20 to-teal-500/20 rounded-full flex items-center justify-center backdrop-blur-sm border border-white/20 p-4">
                                <div class="w-full h-full rounded-full overflow-hidden border-4 border-white/30 shadow-2xl">
                                    <Avatar />
                                </div>
                            </div>
                            <div class="absolute -top-4 -right-4 w-8 h-8 bg-yellow-400 rounded-full animate-bounce"></div>
                            <div class="absolute -bottom-8 -left-8 w-6 h-6 bg-orange-400 rounded-full animate-pulse"></div>
                        </div>
                    </div>
                </div>
                <div class="text-center mt-16">
                    <button
                        on:click=move |_| page.navigate("about")
                        class="text-white/70 hover:text-white transition-colors animate-bounce"
                        aria-label="Scroll to About"
                    >
                        <i class="extra-chevron-down text-3xl" />
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Sparkles() -> impl IntoView {
    view! {
        <div class="absolute inset-0">
            {sparkles(SPARKLE_COUNT)
                .into_iter()
                .map(|s| {
                    let style = format!(
                        "left: {:.3}%; top: {:.3}%; animation-delay: {:.3}s; animation-duration: {:.3}s",
                        s.left,
                        s.top,
                        s.delay,
                        s.duration,
                    );
                    view! {
                        <div class="absolute animate-pulse" style=style>
                            <div class="w-1 h-1 bg-white/30 rounded-full"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Profile photo, replaced by a placeholder if it fails to load.
#[component]
fn Avatar() -> impl IntoView {
    let (failed, set_failed) = signal(false);
    view! {
        <Show
            when=move || !failed()
            fallback=|| {
                view! {
                    <div class="w-full h-full bg-gradient-to-br from-blue-600 to-teal-600 rounded-full flex items-center justify-center">
                        <i class="extra-user text-9xl text-white" />
                    </div>
                }
            }
        >
            <img
                src=AVATAR_SRC
                alt=NAME
                class="w-full h-full object-cover"
                on:error=move |_| set_failed(true)
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkles_are_deterministic() {
        assert_eq!(sparkles(SPARKLE_COUNT), sparkles(SPARKLE_COUNT));
        assert_eq!(sparkles(SPARKLE_COUNT).len(), SPARKLE_COUNT);
    }

    #[test]
    fn test_sparkles_stay_in_range() {
        for s in sparkles(500) {
            assert!((0.0..100.0).contains(&s.left));
            assert!((0.0..100.0).contains(&s.top));
            assert!((0.0..3.0).contains(&s.delay));
            assert!((2.0..5.0).contains(&s.duration));
        }
    }

    #[test]
    fn test_sparkles_are_spread_out() {
        let all = sparkles(SPARKLE_COUNT);
        let left_half = all.iter().filter(|s| s.left < 50.0).count();
        assert!(left_half > 0 && left_half < SPARKLE_COUNT);
    }
}
