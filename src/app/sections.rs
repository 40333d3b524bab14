use leptos::{either::Either, prelude::*};

use super::{
    components::{
        delay_style, revealed, ExperienceCard, SectionHeading, SkillBadge, StatCard, FADE_UP,
    },
    content::{
        stagger_ms, SkillGroup, ABOUT, CONTACT_CHANNELS, EDUCATION, EXPERIENCE, LINKEDIN_URL,
        MAILTO, NAME, SKILL_GROUPS, STATS, TAGLINE,
    },
};

const COPYRIGHT_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-white">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="About Me" />
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-12">
                        <p class="text-lg text-gray-700 mb-6 leading-relaxed">{ABOUT[0]}</p>
                        <p class="text-lg text-gray-700 leading-relaxed">{ABOUT[1]}</p>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                        {STATS
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! { <StatCard stat delay={100 * (i as u32 + 1)} /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-gray-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Professional Experience" />
                <div class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            view! { <ExperienceCard entry delay={100 * (i as u32 + 1)} /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    let edu = &EDUCATION;
    view! {
        <section id="education" class="py-20 bg-white">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Education" />
                <div class="max-w-4xl mx-auto">
                    <div class=revealed(
                        "bg-gradient-to-r from-blue-50 to-teal-50 p-8 rounded-xl border border-blue-200 transform transition-all duration-700",
                        FADE_UP,
                    )>
                        <div class="flex items-start">
                            <div class="flex-shrink-0">
                                <div class="w-12 h-12 bg-gradient-to-r from-blue-600 to-teal-500 rounded-lg flex items-center justify-center">
                                    <i class="extra-award text-2xl text-white" />
                                </div>
                            </div>
                            <div class="ml-6">
                                <h3 class="text-2xl font-bold text-gray-900 mb-2">{edu.degree}</h3>
                                <h4 class="text-xl font-semibold text-blue-600 mb-2">{edu.school}</h4>
                                <div class="flex flex-wrap gap-4 text-sm text-gray-600 mb-4">
                                    <span class="flex items-center">
                                        <i class="extra-location mr-1" />
                                        {edu.location}
                                    </span>
                                    <span class="flex items-center">
                                        <i class="extra-calendar mr-1" />
                                        {edu.period}
                                    </span>
                                    <span class="flex items-center">
                                        <i class="extra-bar-chart mr-1" />
                                        {edu.grade}
                                    </span>
                                </div>
                                <div class="bg-yellow-50 border border-yellow-200 rounded-lg p-4">
                                    <p class="text-gray-700 leading-relaxed">{edu.highlight}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    // badge delays keep counting across cards
    let mut first_badge = 0;
    let cards = SKILL_GROUPS
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let start = first_badge;
            first_badge += group.skills.len();
            view! { <SkillCard group delay={100 * (i as u32 + 1)} first_badge=start /> }
        })
        .collect_view();
    view! {
        <section id="skills" class="py-20 bg-gray-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Technical Skills" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: &'static SkillGroup, delay: u32, first_badge: usize) -> impl IntoView {
    view! {
        <div
            class=revealed(
                "bg-white p-6 rounded-xl shadow-lg hover:shadow-xl transition-all duration-500 transform hover:-translate-y-2",
                FADE_UP,
            )
            style=delay_style(delay)
        >
            <div class="flex items-center mb-4">
                <i class=format!("{} {} text-2xl mr-3", group.icon, group.accent) />
                <h3 class="text-xl font-semibold text-gray-900">{group.title}</h3>
            </div>
            <div class="flex flex-wrap">
                {group
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <SkillBadge skill=*skill delay={stagger_ms(150, 50, first_badge + i)} />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section
            id="contact"
            class="py-20 bg-gradient-to-br from-blue-900 via-purple-900 to-teal-900 text-white relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-blue-600/20 to-teal-600/20"></div>
            <div class="relative z-10 max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Get In Touch"
                    accent="from-orange-400 to-yellow-400"
                    color="text-white"
                />
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-12">
                        <h3 class="text-2xl font-semibold mb-4">"Let's Connect"</h3>
                        <p class="text-xl text-blue-100 leading-relaxed">
                            "I'm always interested in discussing new opportunities, innovative projects, and collaborations in the field of data science and AI. Feel free to reach out!"
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {CONTACT_CHANNELS
                            .iter()
                            .enumerate()
                            .map(|(i, channel)| {
                                let text = match channel.href {
                                    Some(href) => Either::Left(view! {
                                        <a
                                            href=href
                                            target=channel.external.then_some("_blank")
                                            rel=channel.external.then_some("noopener noreferrer")
                                            class="text-blue-200 hover:text-white transition-colors"
                                        >
                                            {channel.text}
                                        </a>
                                    }),
                                    None => Either::Right(view! {
                                        <p class="text-blue-200">{channel.text}</p>
                                    }),
                                };
                                view! {
                                    <div
                                        class=revealed(
                                            "bg-white/10 backdrop-blur-md p-6 rounded-xl border border-white/20 hover:bg-white/15 transition-all duration-300 transform hover:-translate-y-2",
                                            FADE_UP,
                                        )
                                        style=delay_style(100 * (i as u32 + 1))
                                    >
                                        <div class="flex items-center">
                                            <div class=format!(
                                                "w-12 h-12 bg-gradient-to-r {} rounded-lg flex items-center justify-center mr-4",
                                                channel.badge,
                                            )>
                                                <i class=format!("{} text-2xl text-white", channel.icon) />
                                            </div>
                                            <div>
                                                <h4 class="text-lg font-semibold mb-1">{channel.label}</h4>
                                                {text}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="text-center mt-12">
                        <div
                            class=revealed("transform transition-all duration-700", FADE_UP)
                            style=delay_style(500)
                        >
                            <p class="text-lg text-blue-100 mb-6">
                                "Ready to collaborate on your next data science project?"
                            </p>
                            <a
                                href=MAILTO
                                class="inline-flex items-center bg-gradient-to-r from-orange-500 to-orange-600 hover:from-orange-600 hover:to-orange-700 text-white font-semibold py-3 px-8 rounded-lg transform transition-all duration-300 hover:-translate-y-1 hover:shadow-xl"
                            >
                                <i class="extra-email mr-2" />
                                "Send Message"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-8">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <div class="flex justify-center items-center mb-4">
                        <div class="w-8 h-8 bg-gradient-to-r from-blue-600 to-teal-500 rounded-lg flex items-center justify-center mr-3">
                            <i class="extra-user text-white" />
                        </div>
                        <h3 class="text-xl font-bold bg-gradient-to-r from-blue-400 to-teal-400 bg-clip-text text-transparent">
                            {NAME}
                        </h3>
                    </div>
                    <p class="text-gray-400 mb-4">{TAGLINE}</p>
                    <div class="flex justify-center space-x-6 mb-6">
                        <a
                            href=MAILTO
                            class="text-gray-400 hover:text-white transition-colors text-2xl"
                            aria-label="Email"
                        >
                            <i class="extra-email" />
                        </a>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-white transition-colors text-2xl"
                            aria-label="LinkedIn"
                        >
                            <i class="devicon-linkedin-plain" />
                        </a>
                    </div>
                    <div class="border-t border-gray-800 pt-6">
                        <p class="text-gray-500 text-sm">
                            {format!("© {COPYRIGHT_YEAR} {NAME}. All rights reserved.")}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
