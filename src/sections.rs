use std::sync::LazyLock;

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

pub static GLOBAL_SECTION_CACHE: LazyLock<DashMap<String, Option<Section>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

/// Fixed section order. This is also the table-of-contents order.
pub const SECTION_FILES: [&str; 6] = [
    "personal-introduction.md",
    "profession-skills.md",
    "experience.md",
    "involvement.md",
    "qualification.md",
    "self-development.md",
];

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    image: String,
    image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMeta {
    pub id: String,
    pub title: String,
    pub image: ImageItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub meta: SectionMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone)]
pub enum SectionError {
    #[error("Section not found")]
    NotFound,
    #[error("Couldn't parse section content")]
    Parse,
}

/// Standalone gallery shown at the bottom of the biography page.
pub fn gallery_images() -> Vec<ImageItem> {
    [
        ("https://picsum.photos/id/1015/600/400", "Hiking trip"),
        ("https://picsum.photos/id/1025/600/400", "Campus life"),
        ("https://picsum.photos/id/1035/600/400", "Parade day"),
        ("https://picsum.photos/id/1043/600/400", "Workshop"),
        ("https://picsum.photos/id/1050/600/400", "Project demo"),
        ("https://picsum.photos/id/1062/600/400", "Team training"),
    ]
    .into_iter()
    .map(|(src, alt)| ImageItem {
        src: src.to_string(),
        alt: alt.to_string(),
    })
    .collect()
}

#[cfg(feature = "ssr")]
pub async fn get_section(name: String) -> Result<Section, SectionError> {
    let file = Assets::get(&name).ok_or(SectionError::NotFound)?;

    let cache = &*GLOBAL_SECTION_CACHE;
    cache
        .entry(name.clone())
        .or_insert_with(move || parse_section(&name, file))
        .clone()
        .ok_or(SectionError::Parse)
}

#[cfg(feature = "ssr")]
pub async fn get_sections() -> Result<Vec<Section>, SectionError> {
    let mut sections = Vec::with_capacity(SECTION_FILES.len());
    for name in SECTION_FILES {
        sections.push(get_section(name.to_string()).await?);
    }
    Ok(sections)
}

#[cfg(feature = "ssr")]
fn parse_section(name: &str, file: rust_embed::EmbeddedFile) -> Option<Section> {
    let content = String::from_utf8(file.data.into()).ok()?;
    let matter = Matter::<YAML>::new();
    let fm = matter.parse_with_struct::<FrontMatter>(&content)?;

    let meta = SectionMeta {
        id: name.strip_suffix(".md").unwrap_or(name).to_string(),
        title: fm.data.title,
        image: ImageItem {
            src: fm.data.image,
            alt: fm.data.image_alt,
        },
    };

    let parser = Parser::new_ext(&fm.content, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);

    Some(Section {
        meta,
        content: html_output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_files_are_embedded() {
        for name in SECTION_FILES {
            assert!(Assets::get(name).is_some(), "missing embedded section {name}");
        }
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids = SECTION_FILES
            .iter()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTION_FILES.len());
    }

    #[test]
    fn gallery_images_are_distinct() {
        let images = gallery_images();
        let mut srcs = images.iter().map(|i| i.src.as_str()).collect::<Vec<_>>();
        srcs.sort_unstable();
        srcs.dedup();
        assert_eq!(srcs.len(), images.len());
        assert!(images.iter().all(|i| !i.alt.is_empty()));
    }

    #[cfg(feature = "ssr")]
    mod rendered {
        use super::*;

        #[tokio::test]
        async fn sections_come_back_in_declared_order() {
            let sections = get_sections().await.expect("embedded sections should parse");
            let ids = sections
                .iter()
                .map(|s| s.meta.id.as_str())
                .collect::<Vec<_>>();
            let expected = SECTION_FILES
                .iter()
                .map(|name| name.strip_suffix(".md").unwrap_or(name))
                .collect::<Vec<_>>();
            assert_eq!(ids, expected);
        }

        #[tokio::test]
        async fn every_section_has_title_image_and_body() {
            let sections = get_sections().await.expect("embedded sections should parse");
            for section in sections {
                assert!(!section.meta.title.is_empty());
                assert!(section.meta.image.src.starts_with("https://picsum.photos/"));
                assert!(!section.meta.image.alt.is_empty());
                assert!(
                    section.content.contains("<h3>"),
                    "section {} should render its headings",
                    section.meta.id
                );
            }
        }

        #[tokio::test]
        async fn unknown_section_is_not_found() {
            let err = get_section("missing.md".to_string())
                .await
                .expect_err("missing file should not resolve");
            assert!(matches!(err, SectionError::NotFound));
        }

        #[tokio::test]
        async fn repeated_lookups_hit_the_cache() {
            let first = get_section("experience.md".to_string())
                .await
                .expect("experience section should parse");
            assert!(GLOBAL_SECTION_CACHE.contains_key("experience.md"));
            let second = get_section("experience.md".to_string())
                .await
                .expect("cached section should resolve");
            assert_eq!(first, second);
        }
    }
}
