// Resume parsing: document text extraction and heading-driven section
// segmentation. `sections::extract_sections` is pure and never fails.

pub mod extractor;
pub mod handlers;
pub mod headings;
pub mod models;
pub mod personal_info;
pub mod sections;
