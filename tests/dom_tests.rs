// Host-side tests for surface teardown policy.
// The main crate is wasm-only, so we include the DOM helpers directly; only
// the pure parts run here.

#![allow(dead_code)]
mod dom {
    include!("../src/dom.rs");
}

use dom::SurfaceRelease;

#[test]
fn page_surfaces_are_cleared_but_kept() {
    assert_eq!(SurfaceRelease::for_surface(false), SurfaceRelease::ClearOnly);
}

#[test]
fn mounted_surfaces_are_removed() {
    assert_eq!(SurfaceRelease::for_surface(true), SurfaceRelease::ClearAndRemove);
}
