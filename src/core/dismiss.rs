// Dismissal capability for alert banners.

use thiserror::Error;

use super::model::ElementId;
use super::page::Page;

#[derive(Debug, Error)]
pub enum DismissError {
    #[error("no element with id {0} in the page")]
    NotFound(ElementId),
    #[error("element {0} is already closed")]
    AlreadyClosed(ElementId),
}

/// Knows how to close a single alert element. Injected into the sweep so
/// tests can substitute recording or failing implementations.
pub trait Dismiss {
    fn close(&mut self, page: &mut Page, id: ElementId) -> Result<(), DismissError>;
}

/// Production dismisser: detaches the element from the live tree, which is
/// what a toolkit alert `close` amounts to once its animation settles.
pub struct BannerDismisser;

impl Dismiss for BannerDismisser {
    fn close(&mut self, page: &mut Page, id: ElementId) -> Result<(), DismissError> {
        if !page.contains(id) {
            return Err(DismissError::NotFound(id));
        }
        if !page.is_attached(id) {
            return Err(DismissError::AlreadyClosed(id));
        }
        page.detach(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_detaches_element() {
        let mut page = Page::new();
        let root = page.root();
        let banner = page.append_child(root, &["alert"]).unwrap();

        let mut dismisser = BannerDismisser;
        dismisser.close(&mut page, banner).unwrap();

        assert!(!page.is_attached(banner));
        assert!(page.query_all("alert").is_empty());
    }

    #[test]
    fn test_close_twice_is_an_error() {
        let mut page = Page::new();
        let root = page.root();
        let banner = page.append_child(root, &["alert"]).unwrap();

        let mut dismisser = BannerDismisser;
        dismisser.close(&mut page, banner).unwrap();
        let err = dismisser.close(&mut page, banner).unwrap_err();
        assert!(matches!(err, DismissError::AlreadyClosed(id) if id == banner));
    }

    #[test]
    fn test_close_unknown_element() {
        let mut page = Page::new();
        let mut dismisser = BannerDismisser;
        let err = dismisser.close(&mut page, 4242).unwrap_err();
        assert!(matches!(err, DismissError::NotFound(4242)));
    }
}
