//! Static snippet tables, one per documented API operation.
//!
//! Sample bodies live as standalone files next to this module so they keep
//! their native syntax (and editors highlight them correctly); `include_str!`
//! embeds them verbatim at compile time.

use crate::language::Language;
use crate::snippet::SnippetTable;

/// Samples for fetching the delivery events of a message.
pub const MESSAGES_GET_EVENTS: SnippetTable = SnippetTable {
    slug: "messages/get-events",
    title: "Get events for a message",
    entries: &[
        (
            Language::Javascript,
            include_str!("catalog/messages_get_events.js"),
        ),
        (
            Language::Elixir,
            include_str!("catalog/messages_get_events.exs"),
        ),
        (
            Language::Python,
            include_str!("catalog/messages_get_events.py"),
        ),
        (
            Language::Ruby,
            include_str!("catalog/messages_get_events.rb"),
        ),
        (
            Language::Csharp,
            include_str!("catalog/messages_get_events.cs"),
        ),
    ],
};

/// Samples for fetching a single object from a collection.
pub const OBJECTS_GET: SnippetTable = SnippetTable {
    slug: "objects/get",
    title: "Get an object",
    entries: &[
        (Language::Javascript, include_str!("catalog/objects_get.js")),
        (Language::Elixir, include_str!("catalog/objects_get.exs")),
        (Language::Python, include_str!("catalog/objects_get.py")),
        (Language::Ruby, include_str!("catalog/objects_get.rb")),
        (Language::Csharp, include_str!("catalog/objects_get.cs")),
    ],
};

/// Every authored table, in docs-site page order.
pub const TABLES: &[&SnippetTable] = &[&MESSAGES_GET_EVENTS, &OBJECTS_GET];

/// Find a table by its operation slug.
pub fn find(slug: &str) -> Option<&'static SnippetTable> {
    TABLES.iter().copied().find(|table| table.slug == slug)
}
