use clap::Parser;
use color_eyre::Result;
use protosearch::prelude::*;

/// A trimmed-down browser protocol used across the integration tests.
///
/// Entries are indexed in this order:
/// `DOM.enable`, `DOM.disable`, `DOM.getDocument`, `DOM.querySelector`,
/// `DOM.documentUpdated`, `DOM.NodeId`, `DOM.Node`, `Debugger.enable`,
/// `Debugger.setBreakpoint`, `Debugger.setBreakpointByUrl`,
/// `Debugger.removeBreakpoint`, `Debugger.paused`, `Debugger.BreakpointId`,
/// `Page.reload`, `Page.navigate`, `Page.loadEventFired`.
pub static PROTOCOL: &str = r#"{
    "version": {"major": "1", "minor": "3"},
    "domains": [
        {
            "domain": "DOM",
            "description": "This domain exposes DOM read/write operations.",
            "commands": [
                {"name": "enable", "description": "Enables DOM agent for the given page."},
                {"name": "disable", "description": "Disables DOM agent for the given page."},
                {"name": "getDocument", "description": "Returns the root DOM node to the caller."},
                {"name": "querySelector", "description": "Executes `querySelector` on a given node."}
            ],
            "events": [
                {"name": "documentUpdated", "description": "Fired when `Document` has been totally updated."}
            ],
            "types": [
                {"id": "NodeId", "type": "integer", "description": "Unique DOM node identifier."},
                {"id": "Node", "type": "object", "description": "DOM interaction is implemented in terms of mirror objects."}
            ]
        },
        {
            "domain": "Debugger",
            "commands": [
                {"name": "enable"},
                {"name": "setBreakpoint"},
                {"name": "setBreakpointByUrl"},
                {"name": "removeBreakpoint"}
            ],
            "events": [{"name": "paused"}],
            "types": [{"id": "BreakpointId", "type": "string"}]
        },
        {
            "domain": "Page",
            "commands": [{"name": "reload"}, {"name": "navigate"}],
            "events": [{"name": "loadEventFired"}]
        }
    ]
}"#;

pub fn protocol() -> Result<Protocol> {
    Ok(Protocol::from_reader(PROTOCOL.as_bytes())?)
}

/// Parses command line arguments, the schema path is not read.
pub fn parse_options(args: &[&str]) -> SearchOptions {
    let mut full_args = vec!["protosearch"];
    full_args.extend(args);
    full_args.push("protocol.json");
    SearchOptions::try_parse_from(full_args)
        .expect("Failed to parse options")
        .build()
}

/// Searches the fixture protocol for `query`.
pub fn search(query: &str, args: &[&str]) -> Result<SearchResults> {
    let options = parse_options(args);
    let mut search = Search::from_options(&options);
    search.set_domains(&protocol()?.domains);
    Ok(search.search(query))
}

/// One line per result: the score, then the title with matched runs in brackets.
pub fn render(results: &SearchResults) -> String {
    results
        .iter()
        .map(|matched| {
            let title = matched.title();
            let wrapped: String = highlight_segments(title, &matched.matches, 0, title.chars().count())
                .iter()
                .map(|segment| {
                    if segment.highlighted {
                        format!("[{}]", segment.text)
                    } else {
                        segment.text.to_string()
                    }
                })
                .collect();
            format!("{} {}", matched.score, wrapped)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Searches the fixture protocol and snapshots the rendered results.
///
/// ```ignore
/// search_test!(test_name, "query", &["--tiebreak=score,-begin"], @"...");
/// ```
#[macro_export]
macro_rules! search_test {
    ($name:ident, $query:expr, $options:expr, @$snap:literal) => {
        #[test]
        fn $name() -> color_eyre::Result<()> {
            let results = $crate::common::search($query, $options)?;
            insta::assert_snapshot!($crate::common::render(&results), @$snap);
            Ok(())
        }
    };
}
