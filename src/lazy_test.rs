use super::*;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Default)]
struct FakeImage {
    attrs: Rc<RefCell<HashMap<String, String>>>,
}

impl PartialEq for FakeImage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.attrs, &other.attrs)
    }
}

impl FakeImage {
    fn with_data_src(src: &str) -> Self {
        let img = Self::default();
        img.attrs.borrow_mut().insert("data-src".to_owned(), src.to_owned());
        img
    }
}

impl Attributes for FakeImage {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), FxError> {
        self.attrs.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<(), FxError> {
        self.attrs.borrow_mut().remove(name);
        Ok(())
    }
}

struct ReadOnlyImage;

impl Attributes for ReadOnlyImage {
    fn attribute(&self, _name: &str) -> Option<String> {
        Some("b.png".to_owned())
    }

    fn set_attribute(&self, _name: &str, _value: &str) -> Result<(), FxError> {
        Err(FxError::Js("read-only".to_owned()))
    }

    fn remove_attribute(&self, _name: &str) -> Result<(), FxError> {
        Err(FxError::Js("read-only".to_owned()))
    }
}

// =============================================================
// swap_in_source
// =============================================================

#[test]
fn swap_moves_data_src_to_src() {
    let img = FakeImage::with_data_src("a.png");
    assert!(swap_in_source(&img).unwrap());
    assert_eq!(img.attribute("src").as_deref(), Some("a.png"));
    assert_eq!(img.attribute("data-src"), None);
}

#[test]
fn swap_without_data_src_is_noop() {
    let img = FakeImage::default();
    assert!(!swap_in_source(&img).unwrap());
    assert_eq!(img.attribute("src"), None);
}

#[test]
fn swap_with_empty_data_src_is_noop() {
    let img = FakeImage::with_data_src("");
    assert!(!swap_in_source(&img).unwrap());
    assert_eq!(img.attribute("data-src").as_deref(), Some(""));
}

#[test]
fn swap_propagates_write_failure() {
    assert!(swap_in_source(&ReadOnlyImage).is_err());
}

// =============================================================
// LazyImages
// =============================================================

#[test]
fn lazy_image_loads_once_then_stops_watching() {
    let img = FakeImage::with_data_src("a.png");
    let mut lazy = LazyImages::new();
    let key = lazy.track(img.clone());

    assert!(lazy.on_visible(key, true).unwrap());
    assert_eq!(img.attribute("src").as_deref(), Some("a.png"));
    assert_eq!(img.attribute("data-src"), None);
    assert!(!lazy.is_watching(key));

    img.set_attribute("data-src", "late.png").unwrap();
    assert!(!lazy.on_visible(key, true).unwrap());
    assert_eq!(img.attribute("src").as_deref(), Some("a.png"));
}

#[test]
fn lazy_image_waits_while_not_intersecting() {
    let img = FakeImage::with_data_src("a.png");
    let mut lazy = LazyImages::new();
    let key = lazy.track(img.clone());
    assert!(!lazy.on_visible(key, false).unwrap());
    assert!(lazy.is_watching(key));
    assert_eq!(img.attribute("src"), None);
}

#[test]
fn key_of_finds_tracked_image() {
    let a = FakeImage::with_data_src("a.png");
    let b = FakeImage::with_data_src("b.png");
    let mut lazy = LazyImages::new();
    lazy.track(a.clone());
    lazy.track(b.clone());
    assert_eq!(lazy.key_of(&b), Some(1));
    assert_eq!(lazy.key_of(&FakeImage::default()), None);
}

#[test]
fn load_all_releases_every_image() {
    let images = ["a.png", "b.png", "c.png"].map(FakeImage::with_data_src);
    let mut lazy = LazyImages::new();
    for img in &images {
        lazy.track(img.clone());
    }
    assert_eq!(lazy.load_all(), 3);
    assert!(images.iter().all(|img| img.attribute("data-src").is_none()));
    assert_eq!(lazy.load_all(), 0);
}

#[test]
fn failed_swap_still_unwatches() {
    let mut lazy = LazyImages::new();
    let key = lazy.track(ReadOnlyImage);
    assert!(lazy.on_visible(key, true).is_err());
    assert!(!lazy.is_watching(key));
}
