// In-memory page structure: a tree of elements carrying class tokens.
//
// Stands in for the host page. The sweep only ever reads it through
// `query_all` and mutates it through `detach`, so elements stay opaque
// handles to everything above this module.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::model::ElementId;

lazy_static! {
    // Class tokens follow the usual identifier shape; whitespace would break
    // token matching, so it is rejected at creation time.
    static ref CLASS_TOKEN: Regex =
        Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid class token regex");
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no element with id {0} in the page")]
    UnknownParent(ElementId),
    #[error("invalid class token '{0}'")]
    InvalidClassToken(String),
}

#[derive(Debug)]
struct Element {
    classes: Vec<String>,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
    detached: bool,
}

/// The live element tree. Document order is preorder over insertion order.
pub struct Page {
    elements: HashMap<ElementId, Element>,
    root: ElementId,
    next_id: ElementId,
}

impl Page {
    pub fn new() -> Self {
        let root = 0;
        let mut elements = HashMap::new();
        elements.insert(
            root,
            Element {
                classes: Vec::new(),
                children: Vec::new(),
                parent: None,
                detached: false,
            },
        );
        Self {
            elements,
            root,
            next_id: root + 1,
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Append a new element under `parent`. Class tokens are validated.
    pub fn append_child(
        &mut self,
        parent: ElementId,
        classes: &[&str],
    ) -> Result<ElementId, PageError> {
        if !self.elements.contains_key(&parent) {
            return Err(PageError::UnknownParent(parent));
        }
        for token in classes {
            if !CLASS_TOKEN.is_match(token) {
                return Err(PageError::InvalidClassToken((*token).to_string()));
            }
        }

        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(
            id,
            Element {
                classes: classes.iter().map(|t| (*t).to_string()).collect(),
                children: Vec::new(),
                parent: Some(parent),
                detached: false,
            },
        );
        if let Some(p) = self.elements.get_mut(&parent) {
            p.children.push(id);
        }
        Ok(id)
    }

    /// Remove an element (and with it, its subtree) from the live tree.
    /// Returns false if the id is unknown or the element was already detached.
    pub fn detach(&mut self, id: ElementId) -> bool {
        let parent = match self.elements.get_mut(&id) {
            Some(el) if !el.detached => {
                el.detached = true;
                el.parent.take()
            }
            _ => return false,
        };
        if let Some(pid) = parent {
            if let Some(p) = self.elements.get_mut(&pid) {
                p.children.retain(|c| *c != id);
            }
        }
        true
    }

    /// True if the page has ever seen this id (detached elements included).
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// True if the element is still reachable from the root.
    pub fn is_attached(&self, id: ElementId) -> bool {
        let mut current = id;
        loop {
            match self.elements.get(&current) {
                None => return false,
                Some(el) => {
                    if el.detached {
                        return false;
                    }
                    match el.parent {
                        Some(pid) => current = pid,
                        None => return current == self.root,
                    }
                }
            }
        }
    }

    pub fn class_list(&self, id: ElementId) -> Option<&[String]> {
        self.elements.get(&id).map(|el| el.classes.as_slice())
    }

    /// Structural query: all live elements whose class list contains `token`,
    /// in document order. Matching is whole-token, not substring.
    pub fn query_all(&self, token: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect_matches(self.root, token, &mut out);
        out
    }

    fn collect_matches(&self, id: ElementId, token: &str, out: &mut Vec<ElementId>) {
        if let Some(el) = self.elements.get(&id) {
            if el.detached {
                return;
            }
            if el.classes.iter().any(|c| c == token) {
                out.push(id);
            }
            for child in &el.children {
                self.collect_matches(*child, token, out);
            }
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
