use web_sys as web;

pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Relay Queue",
        desc: "Durable job queue with at-least-once delivery, worker leases, and a web dashboard for retries and dead letters.",
        tags: &["Rust", "Axum", "PostgreSQL", "Tokio"],
        link: "https://github.com/nsaltan/relay-queue",
    },
    Project {
        title: "Tidewatch",
        desc: "Self-hosted uptime monitor. Probes HTTP/TCP targets on a schedule, charts latency history, alerts over email and webhooks.",
        tags: &["Rust", "SQLite", "HTMX", "Docker"],
        link: "https://github.com/nsaltan/tidewatch",
    },
    Project {
        title: "Ledgerline",
        desc: "Plain-text accounting companion: parses journal files, validates balances, and renders monthly cashflow reports.",
        tags: &["Rust", "WASM", "Serde", "Chart.js"],
        link: "https://github.com/nsaltan/ledgerline",
    },
    Project {
        title: "Shelfware",
        desc: "Small library catalog with barcode lookup, loan tracking, and full-text search across a few thousand titles.",
        tags: &["Rust", "Actix", "Meilisearch", "Svelte"],
        link: "https://github.com/nsaltan/shelfware",
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Systems & Backend",
        items: &["Rust", "Tokio", "Axum", "PostgreSQL", "SQLite", "Redis"],
    },
    SkillGroup {
        name: "Web Frontend",
        items: &["WASM", "TypeScript", "HTML/CSS", "Svelte", "HTMX"],
    },
    SkillGroup {
        name: "Infrastructure",
        items: &["Docker", "GitHub Actions", "Nginx", "Grafana"],
    },
    SkillGroup {
        name: "Practices",
        items: &["API design", "Property testing", "Code review", "Technical writing"],
    },
];

const NAME: &str = "Nadia Saltan";
const EMAIL: &str = "hello@saltan.dev";

fn nav_html() -> String {
    format!(
        "<header class=\"topbar\"><div class=\"shell topbar-row\">\
<a href=\"#home\" class=\"brand\">{}</a>\
<nav class=\"links\">\
<a href=\"#about\">About</a>\
<a href=\"#projects\">Projects</a>\
<a href=\"#skills\">Skills</a>\
<a href=\"#contact\">Contact</a>\
</nav>\
<a href=\"#contact\" class=\"btn btn-solid\">Contact</a>\
</div></header>",
        NAME
    )
}

fn hero_html() -> String {
    let chips: String = ["Rust", "WASM", "Tokio", "PostgreSQL", "TypeScript"]
        .iter()
        .map(|t| format!("<span class=\"chip\">{}</span>", t))
        .collect();
    format!(
        "<section id=\"home\" class=\"shell hero\">\
<div class=\"hero-copy\">\
<span class=\"badge\"><span class=\"dot\"></span>Available for contract work</span>\
<h1><span class=\"accent\">Systems</span> Engineer for the Web</h1>\
<p>I build fast, reliable services in Rust and ship them all the way to the \
browser. Storage engines to status pages, with tests at every layer.</p>\
<div class=\"cta-row\">\
<a href=\"#projects\" class=\"btn btn-solid\">View Projects</a>\
<a href=\"#contact\" class=\"btn btn-ghost\">Contact Me</a>\
</div>\
</div>\
<div class=\"hero-card card\">\
<div class=\"hero-card-head\">\
<div class=\"avatar\">NS</div>\
<div><div class=\"muted\">Hello, I'm</div>\
<div class=\"hero-name\">{}</div>\
<div class=\"muted\">Backend &amp; WASM developer</div></div>\
</div>\
<p>Five years of production Rust. I like small binaries, honest error \
messages, and dashboards that stay green.</p>\
<div class=\"chip-row\">{}</div>\
</div>\
</section>",
        NAME, chips
    )
}

fn about_html() -> String {
    "<section id=\"about\" class=\"shell section\">\
<h2>About Me</h2>\
<div class=\"two-col\">\
<div class=\"about-text\">\
<p>I'm a developer who cares about the whole path a request takes, from the \
socket to the pixel. Most of my work lives on the backend, but I enjoy \
bringing the same rigor to front-end code compiled from Rust.</p>\
<p><strong>Currently:</strong> building data-heavy internal tools and keeping \
a fleet of small services observable and boring.</p>\
<p><strong>Mindset:</strong> measure first, simplify second, and leave every \
codebase easier to read than I found it.</p>\
</div>\
<div class=\"card stats-card\">\
<h3>Quick Stats</h3>\
<ul class=\"stats\">\
<li><strong>5+</strong> years of Rust</li>\
<li><strong>12</strong> services in production</li>\
<li><strong>40+</strong> crates published or maintained</li>\
<li><strong>3</strong> conference talks</li>\
</ul>\
</div>\
</div>\
</section>"
        .to_string()
}

fn projects_html() -> String {
    let cards: String = PROJECTS
        .iter()
        .map(|p| {
            let tags: String = p
                .tags
                .iter()
                .map(|t| format!("<span class=\"chip\">{}</span>", t))
                .collect();
            format!(
                "<article class=\"card project-card\">\
<h3>{}</h3><p>{}</p>\
<div class=\"chip-row\">{}</div>\
<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\" class=\"btn btn-ghost\">View Live</a>\
</article>",
                p.title, p.desc, tags, p.link
            )
        })
        .collect();
    format!(
        "<section id=\"projects\" class=\"shell section\">\
<h2>Projects</h2><div class=\"project-grid\">{}</div></section>",
        cards
    )
}

fn skills_html() -> String {
    let groups: String = SKILL_GROUPS
        .iter()
        .map(|g| {
            let items: String = g
                .items
                .iter()
                .map(|s| format!("<li>{}</li>", s))
                .collect();
            format!(
                "<div class=\"card skill-card\"><h3>{}</h3><ul>{}</ul></div>",
                g.name, items
            )
        })
        .collect();
    format!(
        "<section id=\"skills\" class=\"shell section\">\
<h2>Skills</h2><div class=\"skill-grid\">{}</div></section>",
        groups
    )
}

fn contact_html() -> String {
    format!(
        "<section id=\"contact\" class=\"shell section contact\">\
<h2>Contact Me</h2>\
<p class=\"center\">You can also email me directly at \
<a href=\"mailto:{0}\">{0}</a></p>\
<form id=\"contact-form\">\
<label for=\"name\" class=\"sr-only\">Name</label>\
<input id=\"name\" type=\"text\" name=\"name\" placeholder=\"Your Name\" required>\
<label for=\"email\" class=\"sr-only\">Email</label>\
<input id=\"email\" type=\"email\" name=\"email\" placeholder=\"Your Email\" required>\
<label for=\"message\" class=\"sr-only\">Message</label>\
<textarea id=\"message\" name=\"message\" rows=\"5\" placeholder=\"Your Message\" required></textarea>\
<button type=\"submit\" class=\"btn btn-solid\">Send Message</button>\
</form>\
<p id=\"contact-status\" class=\"center muted\" role=\"status\"></p>\
</section>",
        EMAIL
    )
}

fn footer_html(year: u32) -> String {
    format!(
        "<footer class=\"footer\"><div class=\"shell footer-row\">\
<p class=\"muted\">&copy; {} {}. All rights reserved.</p>\
<div class=\"links\">\
<a href=\"https://github.com/nsaltan\" target=\"_blank\" rel=\"noreferrer\">GitHub</a>\
<a href=\"https://www.linkedin.com/in/nadiasaltan\" target=\"_blank\" rel=\"noreferrer\">LinkedIn</a>\
<a href=\"https://fosstodon.org/@nsaltan\" target=\"_blank\" rel=\"noreferrer\">Mastodon</a>\
</div>\
</div></footer>",
        year, NAME
    )
}

/// Render every static section into `#app` once at startup.
pub fn mount(document: &web::Document) {
    if let Some(root) = document.get_element_by_id("app") {
        let year = js_sys::Date::new_0().get_full_year();
        let html = format!(
            "{}{}{}{}{}{}{}",
            nav_html(),
            hero_html(),
            about_html(),
            projects_html(),
            skills_html(),
            contact_html(),
            footer_html(year)
        );
        root.set_inner_html(&html);
        log::info!("[content] sections rendered");
    }
}
