mod components;
mod content;
mod hero;
mod nav;
mod portfolio;
mod sections;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use content::{NAME, TAGLINE};
use portfolio::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <meta name="description" content=TAGLINE />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50">
            <h1 class="text-4xl font-bold text-gray-900">"404"</h1>
            <p class="text-gray-600">"Page not found."</p>
            <a href="/" class="text-blue-600 hover:underline">
                "Back to the portfolio"
            </a>
        </main>
    }
}
