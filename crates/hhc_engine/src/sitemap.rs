use std::fmt::Write;
use std::path::Path;

use ego_tree::NodeRef;
use hhc_core::{escape_attr, escape_text, NodeRender, ObjectParams};
use scraper::node::Node;
use scraper::{ElementRef, Html};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Document-level elements with no place inside a navigation list.
const DROPPED_ELEMENTS: &[&str] = &["head", "title", "meta", "link", "base", "script", "style"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub links: usize,
    pub sections: usize,
    pub labels: usize,
    /// Empty `<li>`, `<ul>` and `<ol>` elements removed.
    pub pruned: usize,
}

impl RenderStats {
    pub fn objects(&self) -> usize {
        self.links + self.sections + self.labels
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSitemap {
    pub html: String,
    pub stats: RenderStats,
}

/// Rewrites `<object>`/`<param>` sitemap markup into list items.
///
/// The fragment is parsed with html5ever, which tolerates unterminated and
/// mis-nested tags, and re-serialized by walking the tree:
/// - an `<object>` becomes a link, section heading or bare label (see [`NodeRender`])
/// - an `<object>` directly inside an `<li>` renders into that `<li>`,
///   anywhere else it gets its own `<li>`
/// - `<li>`, `<ul>` and `<ol>` with blank content are dropped
/// - comments, stray `<param>` and head-only elements are dropped.
pub struct SitemapRenderer {
    target: String,
}

/// Pending work of the tree walk. Tree depth is unbounded (each unterminated
/// `<object>` nests the rest of the document one level deeper), so the walk
/// runs off a heap stack instead of recursion.
enum Step<'a> {
    Enter {
        node: NodeRef<'a, Node>,
        /// The node is a direct child of an `<li>`.
        in_item: bool,
    },
    /// End of a prunable `<li>`, `<ul>` or `<ol>`.
    Prune(&'a str),
    Close(&'a str),
}

/// An open prunable element: where its start tag begins in the output, and
/// whether anything visible was written after it.
struct Frame {
    start: usize,
    filled: bool,
}

struct Walk<'a, 'r> {
    target: &'r str,
    source_dir: &'r Path,
    steps: Vec<Step<'a>>,
    frames: Vec<Frame>,
    out: String,
    stats: RenderStats,
}

impl SitemapRenderer {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn render(&self, fragment: &str, source_dir: &Path) -> RenderedSitemap {
        let document = Html::parse_fragment(fragment);
        let mut walk = Walk {
            target: &self.target,
            source_dir,
            steps: Vec::new(),
            frames: Vec::new(),
            out: String::with_capacity(fragment.len()),
            stats: RenderStats::default(),
        };
        walk.push_children(*document.root_element(), false);
        walk.run();
        RenderedSitemap {
            html: walk.out.trim().to_string(),
            stats: walk.stats,
        }
    }
}

impl<'a> Walk<'a, '_> {
    fn run(&mut self) {
        while let Some(step) = self.steps.pop() {
            match step {
                Step::Enter { node, in_item } => self.enter(node, in_item),
                Step::Prune(tag) => self.prune(tag),
                Step::Close(tag) => self.emit(&format!("</{tag}>")),
            }
        }
    }

    fn push_children(&mut self, node: NodeRef<'a, Node>, in_item: bool) {
        self.steps.extend(
            node.children()
                .rev()
                .map(|node| Step::Enter { node, in_item }),
        );
    }

    fn enter(&mut self, node: NodeRef<'a, Node>, in_item: bool) {
        match node.value() {
            Node::Text(text) => self.emit(&escape_text(text)),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.enter_element(element, in_item);
                }
            }
            Node::Comment(_) | Node::Doctype(_) | Node::ProcessingInstruction(_) => {}
            _ => self.push_children(node, false),
        }
    }

    fn enter_element(&mut self, element: ElementRef<'a>, in_item: bool) {
        let name = element.value().name();
        match name {
            "object" => self.object(element, in_item),
            "li" | "ul" | "ol" => {
                self.frames.push(Frame {
                    start: self.out.len(),
                    filled: false,
                });
                let _ = write!(self.out, "<{name}>");
                self.steps.push(Step::Prune(name));
                self.push_children(*element, name == "li");
            }
            "param" => {}
            _ if DROPPED_ELEMENTS.contains(&name) => {}
            _ => {
                let mut tag = format!("<{name}");
                for (attr, value) in element.value().attrs() {
                    let _ = write!(tag, r#" {}="{}""#, attr, escape_attr(value));
                }
                tag.push('>');
                self.emit(&tag);
                if VOID_ELEMENTS.contains(&name) {
                    return;
                }
                self.steps.push(Step::Close(name));
                self.push_children(*element, false);
            }
        }
    }

    fn object(&mut self, object: ElementRef<'a>, in_item: bool) {
        let params: ObjectParams = object
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "param")
            .filter_map(|param| Some((param.value().attr("name")?, param.value().attr("value")?)))
            .collect();

        let node = NodeRender::select(&params, self.source_dir);
        match node {
            NodeRender::Link { .. } => self.stats.links += 1,
            NodeRender::Section { .. } => self.stats.sections += 1,
            NodeRender::Label { .. } => self.stats.labels += 1,
        }
        let item = node.to_html(self.target);
        if in_item {
            self.emit(&item);
        } else if item.trim().is_empty() {
            self.stats.pruned += 1;
        } else {
            self.emit(&format!("<li>{item}</li>"));
        }

        // An unterminated <object> swallows the markup after it; render that too.
        self.push_children(*object, false);
    }

    fn emit(&mut self, html: &str) {
        if !html.trim().is_empty() {
            if let Some(frame) = self.frames.last_mut() {
                frame.filled = true;
            }
        }
        self.out.push_str(html);
    }

    fn prune(&mut self, tag: &str) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        if frame.filled {
            self.emit(&format!("</{tag}>"));
        } else {
            self.out.truncate(frame.start);
            self.stats.pruned += 1;
        }
    }
}
