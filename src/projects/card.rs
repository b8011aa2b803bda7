use crate::projects::model::{Project, has_valid_url, load_projects};
use std::fmt::Write as _;
use std::path::Path;

struct LinkButton<'a> {
    class: &'a str,
    icon: &'a str,
    label: &'a str,
}

const GITHUB: LinkButton<'static> = LinkButton {
    class: "github-btn",
    icon: "fab fa-github",
    label: "GitHub",
};

const DEMO: LinkButton<'static> = LinkButton {
    class: "demo-btn",
    icon: "fas fa-external-link-alt",
    label: "Live Demo",
};

/// Escape text for HTML element content and double-quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn link_button(out: &mut String, button: &LinkButton<'_>, url: Option<&str>) {
    if has_valid_url(url) {
        let href = escape_html(url.unwrap_or_default().trim());
        let _ = writeln!(
            out,
            r#"      <a href="{href}" target="_blank" class="btn {}"><i class="{}"></i> {}</a>"#,
            button.class, button.icon, button.label
        );
    } else {
        let _ = writeln!(
            out,
            r#"      <span class="btn {} disabled"><i class="{}"></i> {}</span>"#,
            button.class, button.icon, button.label
        );
    }
}

/// Markup for one project card. Missing or `#` links render as disabled placeholders.
pub fn render_card(project: &Project) -> String {
    let title = escape_html(&project.title);
    let mut out = String::new();
    out.push_str("<div class=\"project-card\">\n");
    let _ = writeln!(
        out,
        "  <div class=\"project-image\">\n    <img src=\"{}\" alt=\"{title}\">\n  </div>",
        escape_html(&project.image)
    );
    out.push_str("  <div class=\"project-info\">\n");
    let _ = writeln!(out, "    <h3>{title}</h3>");
    let _ = writeln!(out, "    <p>{}</p>", escape_html(&project.description));

    out.push_str("    <div class=\"tech-stack\">\n");
    for tech in &project.technologies {
        let _ = writeln!(out, "      <span class=\"tech-tag\">{}</span>", escape_html(tech));
    }
    out.push_str("    </div>\n");

    out.push_str("    <div class=\"project-links\">\n");
    link_button(&mut out, &GITHUB, project.github.as_deref());
    link_button(&mut out, &DEMO, project.demo.as_deref());
    out.push_str("    </div>\n");

    out.push_str("  </div>\n</div>\n");
    out
}

/// Cards for every project, in order.
pub fn render_cards(projects: &[Project]) -> String {
    projects.iter().map(render_card).collect()
}

/// Load projects from `path` and render their cards.
///
/// Any load failure is logged and yields an empty string, leaving the container empty.
pub fn render_projects(path: impl AsRef<Path>) -> String {
    match load_projects(path.as_ref()) {
        Ok(projects) => {
            tracing::debug!(count = projects.len(), "rendering project cards");
            render_cards(&projects)
        }
        Err(err) => {
            tracing::error!(error = %err, path = %path.as_ref().display(), "error loading projects");
            String::new()
        }
    }
}
