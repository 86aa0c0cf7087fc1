use leptos::server_fn::codec::GetUrl;
use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

#[cfg(feature = "ssr")]
use crate::sections::get_sections;
use crate::sections::{gallery_images, Section, GLOBAL_SECTION_CACHE, SECTION_FILES};
use crate::tracker::{ActiveSection, IntersectionUpdate, LightboxState, RevealMap};

use super::gallery::ImageGallery;
use super::lightbox::Lightbox;
use super::nav::{MobileMenu, TableOfContents};

#[server(input = GetUrl)]
pub async fn get_sections_server() -> Result<Vec<Section>, ServerFnError> {
    get_sections()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn BiographyPage() -> impl IntoView {
    let active = RwSignal::new(ActiveSection::default());
    let revealed = RwSignal::new(RevealMap::default());
    let lightbox = RwSignal::new(LightboxState::default());

    let sections = Resource::new(
        || (),
        |_| async move {
            let cache = &*GLOBAL_SECTION_CACHE;
            let cached = SECTION_FILES
                .iter()
                .map(|name| cache.get(*name).and_then(|s| s.clone()))
                .collect::<Option<Vec<_>>>();
            if let Some(all) = cached {
                return all;
            }
            let all = get_sections_server().await.unwrap_or_default();
            // only cache fetched sections on the browser
            #[cfg(feature = "hydrate")]
            for section in &all {
                cache.insert(format!("{}.md", section.meta.id), Some(section.clone()));
            }
            all
        },
    );

    view! {
        <Title text="Biography" />
        <div class="container mx-auto px-4 py-12 max-w-6xl grid grid-cols-1 lg:grid-cols-[1fr_3fr] gap-12">
            <Transition fallback=move || {
                view! { <SectionSkeleton /> }
            }>
                {move || Suspend::new(async move {
                    let sections = sections.await;
                    let metas = sections.iter().map(|s| s.meta.clone()).collect::<Vec<_>>();
                    let current = Signal::derive(move || {
                        active.with(|a| a.current().map(ToOwned::to_owned))
                    });
                    view! {
                        <MobileMenu sections=metas.clone() active=current />

                        <div class="hidden lg:block sticky top-4 w-64 pr-8 pt-20">
                            <TableOfContents sections=metas active=current />
                        </div>

                        <div class="lg:col-span-1">
                            <h1 class="text-6xl font-serif font-bold text-center mb-12 text-gray-900 dark:text-gray-100 leading-tight">
                                "NG QI HENG Biography"
                            </h1>

                            {sections
                                .into_iter()
                                .enumerate()
                                .map(|(index, section)| {
                                    view! {
                                        <BiographySection index section active revealed lightbox />
                                    }
                                })
                                .collect_view()}

                            <section class="mb-16">
                                <h2 class="text-4xl font-serif font-semibold mb-6 text-gray-800 dark:text-gray-200">
                                    "Gallery"
                                </h2>
                                <ImageGallery images=gallery_images() lightbox />
                            </section>
                        </div>
                    }
                })}
            </Transition>
            <Lightbox state=lightbox />
        </div>
    }
}

#[component]
fn BiographySection(
    index: usize,
    section: Section,
    active: RwSignal<ActiveSection>,
    revealed: RwSignal<RevealMap>,
    lightbox: RwSignal<LightboxState>,
) -> impl IntoView {
    let Section { meta, content } = section;
    let section_ref = NodeRef::<html::Section>::new();
    let image_ref = NodeRef::<html::Img>::new();

    // Active while the section straddles the viewport midline.
    {
        let id = meta.id.clone();
        use_intersection_observer_with_options(
            section_ref,
            move |entries, _| {
                active.update(|a| {
                    a.apply(
                        entries
                            .iter()
                            .map(|e| IntersectionUpdate::new(id.clone(), e.is_intersecting())),
                    )
                });
            },
            UseIntersectionObserverOptions::default()
                .root_margin("-50% 0px -50% 0px".to_string()),
        );
    }

    // Fade in once 30% of the image clears the bottom inset.
    {
        let id = meta.id.clone();
        use_intersection_observer_with_options(
            image_ref,
            move |entries, _| {
                revealed.update(|r| {
                    r.apply(
                        entries
                            .iter()
                            .map(|e| IntersectionUpdate::new(id.clone(), e.is_intersecting())),
                    )
                });
            },
            UseIntersectionObserverOptions::default()
                .thresholds(vec![0.3])
                .root_margin("0px 0px -100px 0px".to_string()),
        );
    }

    let image = meta.image.clone();
    let reveal_id = meta.id.clone();
    let image_class = move || {
        if revealed.with(|r| r.is_visible(&reveal_id)) {
            "w-full h-64 object-cover rounded-lg shadow-md cursor-pointer transition-opacity duration-700 ease-in-out opacity-100"
        } else {
            "w-full h-64 object-cover rounded-lg shadow-md cursor-pointer transition-opacity duration-700 ease-in-out opacity-0"
        }
    };
    // Image and text swap sides on every other section.
    let layout = if index % 2 == 1 {
        "flex flex-col md:flex-row-reverse items-start gap-8"
    } else {
        "flex flex-col md:flex-row items-start gap-8"
    };

    view! {
        <section id=meta.id.clone() class="mb-16" node_ref=section_ref>
            <h2 class="text-4xl font-serif font-semibold mb-6 text-gray-800 dark:text-gray-200">
                {meta.title.clone()}
            </h2>
            <div class=layout>
                <div class="md:w-1/2 flex-shrink-0">
                    <img
                        node_ref=image_ref
                        src=image.src.clone()
                        alt=image.alt.clone()
                        class=image_class
                        on:click=move |_| lightbox.update(|l| l.show(image.clone()))
                    />
                </div>
                <div class="md:w-1/2 prose prose-lg dark:prose-invert max-w-none">
                    <div inner_html=content></div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionSkeleton() -> impl IntoView {
    view! {
        <div class="lg:col-start-2 space-y-4">
            <div class="loading-skeleton h-10 rounded w-2/3 mx-auto"></div>
            <div class="loading-skeleton h-64 rounded"></div>
            <div class="loading-skeleton h-6 rounded w-3/4"></div>
            <div class="loading-skeleton h-64 rounded"></div>
            <div class="loading-skeleton h-6 rounded w-2/3"></div>
        </div>
    }
}
