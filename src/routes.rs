use dioxus::prelude::*;
use crate::views::{ BundlePage, CreatorPage, Navbar, PageNotFound };

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[redirect("/", || Route::CreatorPage {})]
        #[route("/creator")]
        CreatorPage {},
        #[route("/bundle")]
        BundlePage {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}
