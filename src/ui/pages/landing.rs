//! Landing page component
//!
//! Single-page marketing site for FUOJ:
//! - SEO meta tags and JSON-LD built from the page content
//! - Fixed header that compacts once the page scrolls, with a collapsible
//!   mobile menu
//! - Hero, about, team, features and contact sections, each fading in the
//!   first time it scrolls into view
//! - Footer with social and mail links

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::content::{self, ABOUT_IMAGE, HERO_IMAGE};
use crate::core::{Glyph, HeaderState, MenuState, SectionId, motion};
use crate::ui::animated::{AnimatedSection, AnimatedText};
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::Icon;
use crate::ui::navigation::{go_to, page_scroller};
use crate::ui::sections::{FeaturesSection, TeamSection};

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="min-h-screen bg-gradient-to-b from-gray-900 via-blue-900 to-purple-900 text-white">
            <Header />

            <main>
                <AnimatedSection id=SectionId::Home>
                    <HeroSection />
                </AnimatedSection>
                <AnimatedSection id=SectionId::AboutUs>
                    <AboutSection />
                </AnimatedSection>
                <AnimatedSection id=SectionId::Team>
                    <TeamSection />
                </AnimatedSection>
                <AnimatedSection id=SectionId::Features>
                    <FeaturesSection />
                </AnimatedSection>
                <AnimatedSection id=SectionId::Contact>
                    <ContactSection />
                </AnimatedSection>
            </main>

            <Footer />
        </div>
    }
}

/// Header with scroll-aware styling, desktop nav and mobile menu
#[component]
fn Header() -> impl IntoView {
    let header = RwSignal::new(HeaderState::default());
    let menu = RwSignal::new(MenuState::default());

    #[cfg(feature = "hydrate")]
    {
        fn sync(header: RwSignal<HeaderState>) {
            if let Ok(offset) = window().scroll_y() {
                let next = HeaderState::from_offset(offset);
                if header.get_untracked() != next {
                    header.set(next);
                }
            }
        }

        let handle = window_event_listener(leptos::ev::scroll, move |_| sync(header));
        // Page may be restored mid-scroll on reload.
        Effect::new(move |_| sync(header));
        on_cleanup(move || handle.remove());
    }

    let select = move |section: SectionId| {
        let mut state = menu.get_untracked();
        state.select(section, &page_scroller());
        menu.set(state);
    };

    view! {
        <header class=move || header.get().class() data-scrolled=move || header.get().is_scrolled().to_string()>
            <div class="container mx-auto px-4 flex justify-between items-center">
                <Logo />

                <nav class="hidden md:flex space-x-6" aria-label="Sections">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    type="button"
                                    class="nav-spring text-sm hover:text-blue-400"
                                    on:click=move |_| select(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-2">
                    <Button class="hidden sm:inline-flex">"Try Now"</Button>

                    <button
                        type="button"
                        class="md:hidden p-2 rounded-lg hover:bg-gray-800 transition-colors"
                        on:click=move |_| menu.update(MenuState::toggle)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                    >
                        {move || {
                            if menu.get().is_open() {
                                view! { <Icon glyph=Glyph::Close class="w-6 h-6" /> }
                            } else {
                                view! { <Icon glyph=Glyph::Menu class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <MobileMenu on_select=Callback::new(select) />
            </Show>
        </header>
    }
}

/// Mobile navigation overlay, mounted only while the menu is open
#[component]
fn MobileMenu(on_select: Callback<SectionId>) -> impl IntoView {
    view! {
        <nav class="md:hidden bg-gray-900/95 backdrop-blur-md border-t border-gray-800" aria-label="Sections">
            <div class="container mx-auto px-4 py-4 flex flex-col gap-1">
                {SectionId::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                type="button"
                                class="block w-full text-left px-4 py-2 text-sm rounded-lg hover:bg-gray-800 hover:text-blue-400 transition-colors"
                                on:click=move |_| on_select.run(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <Button class="mt-2 w-full">"Try Now"</Button>
            </div>
        </nav>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <A href="/" attr:class="flex items-center space-x-2">
            <Icon glyph=Glyph::PlusSquare class="h-8 w-8 text-blue-400" />
            <span class="text-xl font-bold">
                <AnimatedText text=content::BRAND />
            </span>
        </A>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="pt-32 pb-20 relative overflow-hidden">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center">
                    <div class="hero-slide md:w-1/2 mb-10 md:mb-0">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-blue-400 to-purple-500 text-transparent bg-clip-text">
                            {format!("Welcome to {}", content::PRODUCT)}
                        </h1>
                        <p class="text-xl mb-8 text-gray-300">{content::HERO_TAGLINE}</p>
                        <Button size=ButtonSize::Large class="press-spring">
                            "Get Started"
                        </Button>
                    </div>
                    <div class="hero-zoom md:w-1/2">
                        <div class="relative h-64 md:h-96">
                            <img
                                src=HERO_IMAGE.path
                                alt=HERO_IMAGE.alt
                                width=HERO_IMAGE.width.to_string()
                                height=HERO_IMAGE.height.to_string()
                                class="w-full h-full object-contain rounded-lg shadow-2xl"
                            />
                        </div>
                    </div>
                </div>
            </div>
            <button
                type="button"
                class="hint-bounce absolute bottom-4 left-1/2"
                on:click=move |_| {
                    go_to(SectionId::AboutUs);
                }
                aria-label="Scroll to About Us"
            >
                <Icon glyph=Glyph::ChevronDown class="w-8 h-8 text-blue-400" />
            </button>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-800/50">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl md:text-5xl font-bold mb-12 text-center bg-gradient-to-r from-blue-400 to-purple-500 text-transparent bg-clip-text">
                    "About Us"
                </h2>
                <div class="flex flex-col lg:flex-row items-center lg:items-start gap-12">
                    <div class="lg:w-1/2 text-lg text-gray-300">
                        <p class="mb-6">{content::ABOUT_VISION}</p>
                        <p class="mb-6">"Our mission is threefold:"</p>
                        <ul class="list-disc list-inside mb-6">
                            {content::ABOUT_MISSION
                                .iter()
                                .map(|item| view! { <li>{*item}</li> })
                                .collect_view()}
                        </ul>
                        <p>{content::ABOUT_CLOSING}</p>
                    </div>
                    <div class="lg:w-1/2">
                        <div class="hover-spring rounded-lg overflow-hidden shadow-2xl">
                            <img
                                src=ABOUT_IMAGE.path
                                alt=ABOUT_IMAGE.alt
                                width=ABOUT_IMAGE.width.to_string()
                                height=ABOUT_IMAGE.height.to_string()
                                loading="lazy"
                                class="w-full h-auto"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-r from-blue-600 to-purple-600 text-white">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">
                    "Ready to elevate your coding experience?"
                </h2>
                <p class="text-xl mb-8">
                    {format!("Join thousands of developers who trust {} for their projects.", content::PRODUCT)}
                </p>
                <Button variant=ButtonVariant::Light size=ButtonSize::Large class="press-spring">
                    "Get Started Now"
                </Button>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <A href="/" attr:class="flex items-center space-x-2">
                            <Icon glyph=Glyph::PlusSquare class="h-6 w-6 text-blue-400" />
                            <span class="text-lg font-semibold">{content::BRAND}</span>
                        </A>
                    </div>
                    <div class="flex space-x-4">
                        <a
                            href=content::SOCIAL_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-blue-400 transition-colors"
                            aria-label="Facebook"
                        >
                            <Icon glyph=Glyph::Facebook class="h-6 w-6" />
                        </a>
                        <a
                            href=content::mailto()
                            class="hover:text-blue-400 transition-colors"
                            aria-label="Email us"
                        >
                            <Icon glyph=Glyph::Mail class="h-6 w-6" />
                        </a>
                    </div>
                </div>
                <div class="mt-8 text-center text-sm text-gray-400">
                    <p>{content::copyright(year)}</p>
                </div>
            </div>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{} - Online Judge by {}", content::PRODUCT, content::BRAND);

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=content::PAGE_DESCRIPTION />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=content::PAGE_DESCRIPTION />
        <Meta property="og:image" content=HERO_IMAGE.path />
        <script type="application/ld+json" inner_html=content::structured_data().to_string()></script>
    }
}

/// Animation classes generated from the timing constants
#[component]
fn LandingStyles() -> impl IntoView {
    view! { <style inner_html=motion::stylesheet()></style> }
}
