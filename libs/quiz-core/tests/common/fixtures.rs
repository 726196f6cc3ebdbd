//! Catalog fixtures.

use quiz_core::{Catalog, StudyItem};

/// Sample catalog in the JSON shape the loader accepts.
pub const SAMPLE_JSON: &str = r#"[
    {
        "title": "Pit and Fissure Sealant",
        "content": "prevention of caries in deep pits and fissures of teeth.",
        "image": "images/page1.png"
    },
    {
        "title": "fluoride varnish",
        "content": "1- ion exchange 2- decrease surface energy",
        "image": "images/page2.png"
    },
    {
        "title": "fluoride gel in styrofoam disposable tray",
        "image": "images/page3.png"
    },
    {
        "title": "ionic toothbrush"
    }
]"#;

/// The same catalog in the plain-text format.
pub const SAMPLE_TEXT: &str = "\
Title: Pit and Fissure Sealant
Image: images/page1.png
Content: prevention of caries in deep pits and fissures of teeth.

Title: fluoride varnish
Image: images/page2.png
Content: 1- ion exchange 2- decrease surface energy

Title: fluoride gel in styrofoam disposable tray
Image: images/page3.png

Title: ionic toothbrush
";

/// Catalog with the given titles and no content or images.
pub fn titled(titles: &[&str]) -> Catalog {
    Catalog::new(
        titles
            .iter()
            .map(|title| StudyItem::new(*title, "", ""))
            .collect(),
    )
    .expect("fixture titles are non-empty")
}
