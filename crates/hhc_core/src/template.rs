//! Static HTML documents wrapped around converted sitemaps.

use crate::escape::escape_attr;

pub const WELCOME_FILE: &str = "welcome.htm";
pub const INDEX_FILE: &str = "index.htm";
/// Frame name links open in.
pub const CONTENT_TARGET: &str = "content";
/// Frame name of the navigation pane.
pub const NAVIGATION_TARGET: &str = "left";

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <base href="./">
    <style>
        body { margin: 8px; font-family: "Microsoft YaHei", sans-serif; }
        ul { padding-left: 20px; list-style: none; }
        li { margin: 6px 0; }
        a { color: #06c; text-decoration: none; }
        a:hover { text-decoration: underline; }
        .section { font-weight: bold; color: #333; }
    </style>
</head>
<body>
<ul>
"#;

const PAGE_TAIL: &str = "\n</ul>\n</body>\n</html>\n";

/// Wrap a converted sitemap fragment into a standalone page.
pub fn render_page(fragment: &str) -> String {
    let mut page = String::with_capacity(PAGE_HEAD.len() + fragment.len() + PAGE_TAIL.len());
    page.push_str(PAGE_HEAD);
    page.push_str(fragment);
    page.push_str(PAGE_TAIL);
    page
}

pub fn render_welcome() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>CHM Browser</title>
    <style>
        body { padding: 20px; font-family: "Microsoft YaHei", sans-serif; }
        h2 { color: #1a73e8; }
    </style>
</head>
<body>
    <h2>CHM Browser</h2>
    <p>Select a topic in the left pane.</p>
</body>
</html>
"#
    .to_string()
}

/// Two-pane page: `navigation_src` on the left, the content frame on the right.
pub fn render_frameset(navigation_src: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>CHM Browser</title>
    <style>
        .frame-container {{
            position: fixed;
            top: 0;
            bottom: 0;
            width: 100%;
            display: flex;
        }}
        #left-pane {{
            width: 300px;
            height: 100%;
            border-right: 1px solid #ddd;
        }}
        #right-pane {{
            flex: 1;
            height: 100%;
        }}
        iframe {{
            border: none;
            width: 100%;
            height: 100%;
        }}
    </style>
</head>
<body>
    <div class="frame-container">
        <iframe id="left-pane" name="{nav}" src="{src}"></iframe>
        <iframe id="right-pane" name="{content}" src="{welcome}"></iframe>
    </div>
</body>
</html>
"#,
        nav = NAVIGATION_TARGET,
        src = escape_attr(navigation_src),
        content = CONTENT_TARGET,
        welcome = WELCOME_FILE,
    )
}
