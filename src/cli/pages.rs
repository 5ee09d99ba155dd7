//! Static page content shared by the TUI and the `about` command

/// A titled blurb on the home page
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub techs: &'static [&'static str],
}

/// One entry of the about page's stack list
pub struct Technology {
    pub name: &'static str,
    pub description: &'static str,
}

pub const HOME_TITLE: &str = "Launchpad";
pub const HOME_TAGLINE: &str = "A terminal starter app with a todo list, live launch data and a demo session";

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Todo Demo",
        description: "Add, complete, filter and clear todos. Everything stays in memory.",
        techs: &["TodoStore", "FilterView"],
    },
    Feature {
        title: "Input Validation",
        description: "Todo text is trimmed and must be 3 to 100 characters.",
        techs: &["TodoForm"],
    },
    Feature {
        title: "GraphQL Ready",
        description: "Recent SpaceX launches over GraphQL with bearer-token auth.",
        techs: &["reqwest", "serde"],
    },
    Feature {
        title: "Keyboard First",
        description: "Every page and action is one key away. Press ? for help.",
        techs: &["ratatui", "crossterm"],
    },
    Feature {
        title: "Tests That Work",
        description: "Unit, property and CLI tests run headless.",
        techs: &["proptest", "assert_cmd"],
    },
];

pub const ABOUT_TITLE: &str = "About This Starter";
pub const ABOUT_TAGLINE: &str = "A starter that doesn't waste your time";

pub const ABOUT_WHY: &str = "Setting up the same tools for every project gets old. This \
starter has the CLI, the TUI, configuration, an API client and the test harness \
wired together, so you can start on the actual app.";

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "ratatui", description: "Terminal UI rendering" },
    Technology { name: "crossterm", description: "Raw mode, keys and the alternate screen" },
    Technology { name: "clap", description: "Commands and flags" },
    Technology { name: "serde", description: "JSON and TOML without the boilerplate" },
    Technology { name: "reqwest", description: "HTTP for the GraphQL client" },
    Technology { name: "chrono", description: "Timestamps and launch dates" },
    Technology { name: "thiserror / anyhow", description: "Typed errors in the library, context in the app" },
    Technology { name: "proptest", description: "Property tests for the todo rules" },
    Technology { name: "assert_cmd", description: "End-to-end CLI tests" },
];

/// The about page as plain text, for the `about` command
pub fn about_text() -> String {
    let mut out = String::new();
    out.push_str(ABOUT_TITLE);
    out.push('\n');
    out.push_str(ABOUT_TAGLINE);
    out.push_str("\n\n");
    out.push_str(ABOUT_WHY);
    out.push_str("\n\nWhat's Included\n");
    for tech in TECHNOLOGIES {
        out.push_str(&format!("  {:<20} {}\n", tech.name, tech.description));
    }
    out
}
