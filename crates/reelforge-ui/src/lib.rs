#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Reelforge Web UI.
//! This crate holds the Yew front-end for the short-form video pipeline plus
//! the endpoint resolver and design tokens shared with non-wasm tooling.

pub mod breakpoints;
pub mod core;
pub mod models;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::breakpoints::{self, for_width};
    use crate::core::endpoint::ApiBase;

    #[test]
    fn breakpoint_selection_matches_ranges() {
        assert_eq!(for_width(0).name, breakpoints::XS.name);
        assert_eq!(for_width(640).name, breakpoints::SM.name);
        assert_eq!(for_width(1024).name, breakpoints::LG.name);
        assert_eq!(for_width(2000).name, breakpoints::XXL.name);
    }

    #[test]
    fn resolver_modes_agree_on_logical_paths() {
        let proxied = ApiBase::new("");
        let deployed = ApiBase::new("https://backend.example.com/");
        assert_eq!(proxied.resolve("/api/pipeline"), "/api/pipeline");
        assert_eq!(
            deployed.resolve("/api/pipeline"),
            "https://backend.example.com/pipeline"
        );
    }
}
