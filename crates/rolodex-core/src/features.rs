#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Add, Edit, & Delete",
        description: "Full contact management.",
    },
    Feature {
        title: "Debounced Search",
        description: "Fast, non-blocking list filtering.",
    },
    Feature {
        title: "Dark Mode",
        description: "Switch themes with the T key in the TUI.",
    },
    Feature {
        title: "Local Storage",
        description: "Contacts are saved in a local SQLite file.",
    },
    Feature {
        title: "Seed Import",
        description: "An empty store is filled from the seed URL on first start.",
    },
    Feature {
        title: "Form Validation",
        description: "Ensures required fields are filled.",
    },
    Feature {
        title: "Status Line",
        description: "Feedback for every action.",
    },
    Feature {
        title: "Modals",
        description: "Pop-ups for details, deletion, and this one.",
    },
    Feature {
        title: "Alphabetical Grouping",
        description: "Contacts are grouped by letter.",
    },
    Feature {
        title: "Copy to Clipboard",
        description: "Copy any email or phone from the list.",
    },
    Feature {
        title: "Click-to-Action",
        description: "Call, message, or email from the details view.",
    },
    Feature {
        title: "Country Code Selector",
        description: "Pick the dialing code next to the phone input.",
    },
    Feature {
        title: "JSON Output",
        description: "Every CLI command can print machine-readable JSON.",
    },
];

pub fn features() -> &'static [Feature] {
    FEATURES
}
