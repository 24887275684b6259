//! Static page assemblies used as fixtures: a navigation bar, the showcase
//! body and a footer.

use html::Node;
use html::builder::{anchor, document, element, styled, text};

pub const SHOWCASE_SECTIONS: [&str; 4] = ["hero", "features", "showcase", "pricing"];

pub fn nav_bar() -> Node {
    styled(
        "header",
        vec![("id", "top")],
        vec![("height", "80px")],
        vec![element(
            "nav",
            Vec::new(),
            vec![
                anchor("#features", vec![text("Features")]),
                anchor("#showcase", vec![text("Showcase")]),
                anchor("#pricing", vec![text("Pricing")]),
                anchor("/docs", vec![text("Docs")]),
                anchor("https://github.com/glidepath/glidepath", vec![text("Source")]),
            ],
        )],
    )
}

fn section(id: &str, height: &str, heading: &str, body: Vec<Node>) -> Node {
    let mut children = vec![element("h2", Vec::new(), vec![text(heading)])];
    children.extend(body);
    styled("section", vec![("id", id)], vec![("height", height)], children)
}

pub fn showcase_body() -> Node {
    element(
        "main",
        Vec::new(),
        vec![
            section(
                "hero",
                "400px",
                "Glide between sections",
                vec![anchor("#features", vec![text("Get started")])],
            ),
            section(
                "features",
                "600px",
                "Features",
                vec![element("p", Vec::new(), vec![text("Offset-aware scrolling.")])],
            ),
            section(
                "showcase",
                "800px",
                "Showcase",
                vec![anchor("#pricing", vec![text("See pricing")])],
            ),
            section(
                "pricing",
                "500px",
                "Pricing",
                vec![anchor("#missing-plan", vec![text("Enterprise")])],
            ),
        ],
    )
}

pub fn footer() -> Node {
    styled(
        "footer",
        vec![("id", "footer")],
        vec![("height", "200px")],
        vec![
            anchor("#top", vec![text("Back to top")]),
            anchor("/privacy", vec![text("Privacy")]),
        ],
    )
}

pub fn showcase_page() -> Node {
    document(vec![element(
        "html",
        Vec::new(),
        vec![element(
            "body",
            Vec::new(),
            vec![nav_bar(), showcase_body(), footer()],
        )],
    )])
}
