use dioxus::prelude::*;

use crate::components::{BookGrid, Features, Footer, Hero};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Features {}
        BookGrid {}
        Footer {}
    }
}
