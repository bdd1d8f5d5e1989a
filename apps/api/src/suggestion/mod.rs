// Activity suggestions: profile lookup, activity draw and template filling.
// The random draw goes through `picker` so handlers and tests can swap it.

pub mod handlers;
pub mod picker;
pub mod renderer;
pub mod templates;
