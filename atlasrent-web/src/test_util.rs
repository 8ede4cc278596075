//! Render helpers for native (non-wasm) component tests.

use futures::executor::block_on;
use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RouterProps {
    pub children: Children,
}

/// Router shell backed by an in-memory history, so components using
/// `Link` render outside a browser.
#[function_component(TestRouter)]
pub fn test_router(props: &RouterProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            { for props.children.iter() }
        </Router>
    }
}

/// Server-render `content` inside the test router and return the HTML.
pub fn render(content: Html) -> String {
    block_on(
        yew::LocalServerRenderer::<TestRouter>::with_props(RouterProps {
            children: Children::new(vec![content]),
        })
        .render(),
    )
}
