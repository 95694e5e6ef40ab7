//! hhc core: pure sitemap model, render-mode selection and page templates.
mod escape;
mod kind;
mod local_path;
mod node;
mod summary;
mod template;

pub use escape::{escape_attr, escape_text};
pub use kind::{SitemapKind, CONTENTS_SUFFIX, INDEX_SUFFIX};
pub use local_path::resolve_local;
pub use node::{NodeRender, ObjectParams, PARAM_IMAGE_NUMBER, PARAM_LOCAL, PARAM_NAME};
pub use summary::{FileOutcome, RunSummary};
pub use template::{
    render_frameset, render_page, render_welcome, CONTENT_TARGET, INDEX_FILE, NAVIGATION_TARGET,
    WELCOME_FILE,
};
