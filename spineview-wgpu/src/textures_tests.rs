use crate::textures::pages_to_resolve;
use spineview::{BlendMode, DrawCall, DrawList, PagePtr};
use std::ffi::c_void;

static PAGE_A: u8 = 1;
static PAGE_B: u8 = 2;
static PAGE_C: u8 = 3;

fn page(marker: &'static u8) -> PagePtr {
    PagePtr::from_raw(marker as *const u8 as *const c_void).unwrap()
}

fn call(page: Option<PagePtr>) -> DrawCall {
    DrawCall {
        first_index: 0,
        index_count: 3,
        blend: BlendMode::Normal,
        premultiplied_alpha: false,
        page,
    }
}

fn list(calls: Vec<DrawCall>) -> DrawList {
    DrawList {
        vertices: Vec::new(),
        indices: Vec::new(),
        calls,
    }
}

#[test]
fn known_page_does_not_block_later_pages() {
    let a = page(&PAGE_A);
    let b = page(&PAGE_B);
    let c = page(&PAGE_C);
    let list = list(vec![call(Some(a)), call(Some(b)), call(Some(c))]);

    // b already resolved (or failed): a and c must still come through.
    let pending = pages_to_resolve(&list, |key| key == b.key());
    assert_eq!(pending, vec![a, c]);
}

#[test]
fn pages_are_deduplicated_within_a_frame() {
    let a = page(&PAGE_A);
    let list = list(vec![call(Some(a)), call(Some(a)), call(Some(a))]);

    let pending = pages_to_resolve(&list, |_| false);
    assert_eq!(pending, vec![a]);
}

#[test]
fn untextured_calls_are_ignored() {
    let a = page(&PAGE_A);
    let list = list(vec![call(None), call(Some(a)), call(None)]);

    let pending = pages_to_resolve(&list, |_| false);
    assert_eq!(pending, vec![a]);
}

#[test]
fn nothing_pending_when_every_page_is_known() {
    let a = page(&PAGE_A);
    let b = page(&PAGE_B);
    let list = list(vec![call(Some(a)), call(Some(b))]);

    let pending = pages_to_resolve(&list, |_| true);
    assert!(pending.is_empty());
}
